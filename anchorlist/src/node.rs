use core::ptr::NonNull;

/// The intrusive link pair embedded in caller-owned records.
///
/// A node never owns its neighbors. `None` means "no link": a detached node
/// has both links `None`, the head anchor permanently has `prev == None`,
/// and the tail anchor permanently has `next == None`.
#[derive(Debug)]
pub struct ListNode {
    pub(crate) next: Option<NonNull<ListNode>>,
    pub(crate) prev: Option<NonNull<ListNode>>,
}

impl ListNode {
    /// Creates a detached node (both links unset).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: None,
            prev: None,
        }
    }

    /// Returns the successor link, if any.
    #[inline]
    #[must_use]
    pub fn next(&self) -> Option<NonNull<ListNode>> {
        self.next
    }

    /// Returns the predecessor link, if any.
    #[inline]
    #[must_use]
    pub fn prev(&self) -> Option<NonNull<ListNode>> {
        self.prev
    }

    /// Returns `true` if both links are set.
    ///
    /// Real nodes inside a valid list are always linked; anchors are not
    /// (each anchor keeps one link permanently unset).
    #[inline]
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.next.is_some() && self.prev.is_some()
    }

    /// Clears both links, returning the node to the detached state.
    #[inline]
    pub fn reset(&mut self) {
        self.next = None;
        self.prev = None;
    }
}

impl Default for ListNode {
    fn default() -> Self {
        Self::new()
    }
}
