//! The list header and its operations.
//!
//! `AnchorList` manages the circular wiring between two embedded anchor
//! nodes. Every boundary accessor resolves to a stored address in O(1);
//! only the validity walk and the iterators touch the chain.

use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::node::ListNode;

// ============================================================================
// AnchorList - the header
// ============================================================================

/// A doubly linked list header with embedded `head`/`tail` anchors.
///
/// The anchors are never user data: they bound the chain, and their
/// addresses are the fixed results of [`rend`](Self::rend) and
/// [`end`](Self::end). The list holds no allocation responsibility -
/// callers own every real node and link them in through the `unsafe`
/// mutating operations.
///
/// # Address stability
///
/// [`init`](Self::init) wires the anchors to their current addresses. After
/// that, the header must not move for as long as any node is linked or any
/// yielded boundary address is still in use. [`boxed`](Self::boxed) gives a
/// header with a stable heap address; an empty header may also be re-wired
/// with another `init` after a move.
#[derive(Debug)]
pub struct AnchorList {
    pub(crate) head: ListNode,
    pub(crate) tail: ListNode,
}

impl AnchorList {
    /// Creates an unwired header. Call [`init`](Self::init) once the header
    /// has reached its final address.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: ListNode::new(),
            tail: ListNode::new(),
        }
    }

    /// Wires the anchors into the empty circular shape:
    /// `head.next == &tail`, `tail.prev == &head`, outer links unset.
    ///
    /// Calling this on a non-empty list orphans the linked nodes (they keep
    /// stale links until reset or relinked).
    pub fn init(&mut self) {
        let head = NonNull::from(&mut self.head);
        let tail = NonNull::from(&mut self.tail);
        self.head.prev = None;
        self.head.next = Some(tail);
        self.tail.prev = Some(head);
        self.tail.next = None;
    }

    /// Creates an initialized, empty list behind a stable heap address.
    #[must_use]
    pub fn boxed() -> Box<AnchorList> {
        let mut list = Box::new(AnchorList::new());
        list.init();
        list
    }

    // ------------------------------------------------------------------
    // Boundary accessors - all O(1) address lookups, never chain walks
    // ------------------------------------------------------------------

    /// Returns `true` iff the chain holds no real node.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.next == Some(self.end())
    }

    /// Returns the first real node, or [`end`](Self::end) when empty.
    ///
    /// Callers detect emptiness by comparing against `end()`, not against
    /// null - the returned address is always a live anchor or node.
    #[inline]
    #[must_use]
    pub fn begin(&self) -> NonNull<ListNode> {
        self.head
            .next
            .expect("begin: list must be initialized")
    }

    /// Returns the tail anchor: one past the last forward position.
    ///
    /// Pure, infallible, and the same address for the header's lifetime.
    #[inline]
    #[must_use]
    pub fn end(&self) -> NonNull<ListNode> {
        NonNull::from(&self.tail)
    }

    /// Returns the last real node, or [`rend`](Self::rend) when empty.
    #[inline]
    #[must_use]
    pub fn rbegin(&self) -> NonNull<ListNode> {
        self.tail
            .prev
            .expect("rbegin: list must be initialized")
    }

    /// Returns the head anchor: one before the first reverse position.
    ///
    /// Pure, infallible, and the same address for the header's lifetime.
    /// Reverse iteration is "start at [`rbegin`](Self::rbegin), stop when
    /// you reach `rend`", mirroring the forward `begin`/`end` pair.
    #[inline]
    #[must_use]
    pub fn rend(&self) -> NonNull<ListNode> {
        NonNull::from(&self.head)
    }

    /// Returns the first real node, or `None` when empty.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<NonNull<ListNode>> {
        if self.is_empty() {
            None
        } else {
            Some(self.begin())
        }
    }

    /// Returns the last real node, or `None` when empty.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<NonNull<ListNode>> {
        if self.is_empty() {
            None
        } else {
            Some(self.rbegin())
        }
    }

    // ------------------------------------------------------------------
    // Node-level splicing
    // ------------------------------------------------------------------

    /// Links `to_add` immediately after `after`.
    ///
    /// # Safety
    /// `after` must be a live anchor or linked node with a successor (i.e.
    /// not the tail anchor), `to_add` must be a live detached node, and both
    /// must stay at their addresses while linked.
    pub unsafe fn insert_after(after: NonNull<ListNode>, to_add: NonNull<ListNode>) {
        unsafe {
            let next = (*after.as_ptr())
                .next
                .expect("insert_after: `after` must have a successor");
            (*to_add.as_ptr()).prev = Some(after);
            (*to_add.as_ptr()).next = Some(next);
            (*after.as_ptr()).next = Some(to_add);
            (*next.as_ptr()).prev = Some(to_add);
        }
    }

    /// Links `to_add` immediately before `before`.
    ///
    /// # Safety
    /// `before` must be a live anchor or linked node with a predecessor
    /// (i.e. not the head anchor), `to_add` must be a live detached node,
    /// and both must stay at their addresses while linked.
    pub unsafe fn insert_before(before: NonNull<ListNode>, to_add: NonNull<ListNode>) {
        unsafe {
            let prev = (*before.as_ptr())
                .prev
                .expect("insert_before: `before` must have a predecessor");
            (*to_add.as_ptr()).next = Some(before);
            (*to_add.as_ptr()).prev = Some(prev);
            (*before.as_ptr()).prev = Some(to_add);
            (*prev.as_ptr()).next = Some(to_add);
        }
    }

    /// Unlinks `node` from whatever chain holds it and resets its links.
    ///
    /// # Safety
    /// `node` must be a live real node currently linked between two live
    /// neighbors. Passing an anchor or a detached node is a contract
    /// violation.
    pub unsafe fn remove(node: NonNull<ListNode>) {
        unsafe {
            let next = (*node.as_ptr())
                .next
                .expect("remove: node must be linked");
            let prev = (*node.as_ptr())
                .prev
                .expect("remove: node must be linked");
            (*prev.as_ptr()).next = Some(next);
            (*next.as_ptr()).prev = Some(prev);
            (*node.as_ptr()).reset();
        }
    }

    // ------------------------------------------------------------------
    // Ends of the list
    // ------------------------------------------------------------------

    /// Links `node` as the new first element.
    ///
    /// # Safety
    /// `node` must be a live detached node that stays at its address while
    /// linked, and the list must satisfy the validity invariant.
    pub unsafe fn push_front(&mut self, node: NonNull<ListNode>) {
        debug_assert!(self.is_valid());
        unsafe { Self::insert_after(NonNull::from(&mut self.head), node) };
    }

    /// Links `node` as the new last element.
    ///
    /// # Safety
    /// Same contract as [`push_front`](Self::push_front).
    pub unsafe fn push_back(&mut self, node: NonNull<ListNode>) {
        debug_assert!(self.is_valid());
        unsafe { Self::insert_before(NonNull::from(&mut self.tail), node) };
    }

    /// Unlinks and returns the first element, or `None` when empty.
    ///
    /// # Safety
    /// The list must satisfy the validity invariant and every linked node
    /// must still be live.
    pub unsafe fn pop_front(&mut self) -> Option<NonNull<ListNode>> {
        debug_assert!(self.is_valid());
        let front = self.front()?;
        unsafe { Self::remove(front) };
        Some(front)
    }

    /// Unlinks and returns the last element, or `None` when empty.
    ///
    /// # Safety
    /// Same contract as [`pop_front`](Self::pop_front).
    pub unsafe fn pop_back(&mut self) -> Option<NonNull<ListNode>> {
        debug_assert!(self.is_valid());
        let back = self.back()?;
        unsafe { Self::remove(back) };
        Some(back)
    }

    /// Exchanges the chains of two lists, re-anchoring the boundary nodes.
    ///
    /// Either list may be empty. Anchors never migrate: each list keeps its
    /// own `end`/`rend` addresses, only real nodes move.
    pub fn swap_contents(&mut self, other: &mut AnchorList) {
        debug_assert!(self.is_valid());
        debug_assert!(other.is_valid());

        let self_was_empty = self.is_empty();
        let other_was_empty = other.is_empty();
        let a_first = self.begin();
        let a_last = self.rbegin();
        let b_first = other.begin();
        let b_last = other.rbegin();

        if other_was_empty {
            self.init();
        } else {
            self.head.next = Some(b_first);
            self.tail.prev = Some(b_last);
            // SAFETY: b_first/b_last are live linked nodes per the invariant
            // maintained by the unsafe linking operations.
            unsafe {
                (*b_first.as_ptr()).prev = Some(NonNull::from(&mut self.head));
                (*b_last.as_ptr()).next = Some(NonNull::from(&mut self.tail));
            }
        }

        if self_was_empty {
            other.init();
        } else {
            other.head.next = Some(a_first);
            other.tail.prev = Some(a_last);
            // SAFETY: as above, for the chain saved off `self`.
            unsafe {
                (*a_first.as_ptr()).prev = Some(NonNull::from(&mut other.head));
                (*a_last.as_ptr()).next = Some(NonNull::from(&mut other.tail));
            }
        }
    }

    // ------------------------------------------------------------------
    // Validity
    // ------------------------------------------------------------------

    /// O(1) anchor clauses of the validity invariant.
    ///
    /// Checks the outer links are unset, the inner links are set, and that
    /// an empty list is empty from both directions.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.head.prev.is_some() || self.tail.next.is_some() {
            return false;
        }
        match (self.head.next, self.tail.prev) {
            (Some(first), Some(last)) => {
                // Empty from one side must mean empty from the other.
                (first == self.end()) == (last == self.rend())
            }
            _ => false,
        }
    }

    /// Full O(n) validity walk: every step from `head` to `tail` must be
    /// mutually consistent (`n.next.prev == n`).
    ///
    /// This could be slow; meant for harnesses and debug assertions.
    #[must_use]
    pub fn is_valid_deep(&self) -> bool {
        if !self.is_valid() {
            return false;
        }
        let end = self.end();
        let mut cur = self.rend();
        loop {
            if cur == end {
                return true;
            }
            // SAFETY: `cur` starts at the head anchor and advances only
            // through links the invariant keeps pointing at live nodes.
            let node = unsafe { cur.as_ref() };
            let Some(next) = node.next else {
                return false;
            };
            if unsafe { next.as_ref() }.prev != Some(cur) {
                return false;
            }
            cur = next;
        }
    }

    // ------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------

    /// Iterates over the real nodes, front to back. Double-ended.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            fwd: self.begin(),
            bwd: self.rbegin(),
            finished: self.is_empty(),
            _list: PhantomData,
        }
    }

    /// Number of real nodes. O(n) walk; `is_empty` is the O(1) query.
    #[must_use]
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

impl Default for AnchorList {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Iter - double-ended cursor pair
// ============================================================================

/// Double-ended iterator over the real nodes of an [`AnchorList`].
///
/// Yields node addresses; the borrow on the list keeps the header immutable
/// for the iterator's lifetime.
#[derive(Debug)]
pub struct Iter<'a> {
    fwd: NonNull<ListNode>,
    bwd: NonNull<ListNode>,
    finished: bool,
    _list: PhantomData<&'a AnchorList>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = NonNull<ListNode>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let cur = self.fwd;
        if cur == self.bwd {
            self.finished = true;
        } else {
            // SAFETY: `cur` is a real node of a valid list, so its
            // successor link is set and points at a live node or the tail
            // anchor.
            self.fwd = unsafe { cur.as_ref() }
                .next
                .expect("iter: linked node must have a successor");
        }
        Some(cur)
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let cur = self.bwd;
        if cur == self.fwd {
            self.finished = true;
        } else {
            // SAFETY: mirror of `next`, walking predecessor links.
            self.bwd = unsafe { cur.as_ref() }
                .prev
                .expect("iter: linked node must have a predecessor");
        }
        Some(cur)
    }
}

impl<'a> IntoIterator for &'a AnchorList {
    type Item = NonNull<ListNode>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(kani)]
mod proofs;
