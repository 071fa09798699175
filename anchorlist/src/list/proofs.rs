use super::*;

/// Bound on synthesized list length, keeps the state space small for Kani.
const MAX_PROOF_NODES: usize = 4;

/// Builds a list of nondeterministic length (0..=MAX_PROOF_NODES) out of
/// `storage`, wiring every node through the verified push path so the
/// validity invariant holds by construction.
fn any_list(list: &mut AnchorList, storage: &mut [ListNode; MAX_PROOF_NODES]) -> usize {
    list.init();
    let len: usize = kani::any();
    kani::assume(len <= MAX_PROOF_NODES);
    for node in storage.iter_mut().take(len) {
        unsafe { list.push_back(NonNull::from(node)) };
    }
    len
}

#[kani::proof]
#[kani::unwind(6)]
fn rend_returns_head_anchor() {
    let mut storage = [(); MAX_PROOF_NODES].map(|()| ListNode::new());
    let mut list = AnchorList::new();
    any_list(&mut list, &mut storage);

    kani::assert(list.is_valid_deep(), "construction yields a valid list");
    let r = list.rend();
    kani::assert(
        r == NonNull::from(&list.head),
        "rend is the head anchor's address",
    );
    kani::assert(list.is_valid_deep(), "rend preserves the invariant");
}

#[kani::proof]
#[kani::unwind(6)]
fn rend_is_pure() {
    let mut storage = [(); MAX_PROOF_NODES].map(|()| ListNode::new());
    let mut list = AnchorList::new();
    any_list(&mut list, &mut storage);

    let head_before = (list.head.next, list.head.prev);
    let tail_before = (list.tail.next, list.tail.prev);
    let first = list.rend();
    let second = list.rend();

    kani::assert(first == second, "rend is deterministic");
    kani::assert(
        (list.head.next, list.head.prev) == head_before,
        "rend leaves the head anchor untouched",
    );
    kani::assert(
        (list.tail.next, list.tail.prev) == tail_before,
        "rend leaves the tail anchor untouched",
    );
}

#[kani::proof]
#[kani::unwind(6)]
fn rend_and_end_are_distinct() {
    let mut storage = [(); MAX_PROOF_NODES].map(|()| ListNode::new());
    let mut list = AnchorList::new();
    any_list(&mut list, &mut storage);

    kani::assert(list.rend() != list.end(), "the two anchors never coincide");
}

#[kani::proof]
#[kani::unwind(8)]
fn reverse_walk_reaches_rend_in_count_steps() {
    let mut storage = [(); MAX_PROOF_NODES].map(|()| ListNode::new());
    let mut list = AnchorList::new();
    let len = any_list(&mut list, &mut storage);

    let mut steps = 0usize;
    let mut cur = list.rbegin();
    while cur != list.rend() {
        cur = unsafe { cur.as_ref() }
            .prev
            .expect("linked node must have a predecessor");
        steps += 1;
    }
    kani::assert(steps == len, "reverse walk takes exactly one step per node");
}

#[kani::proof]
#[kani::unwind(8)]
fn push_pop_preserve_validity() {
    let mut storage = [(); MAX_PROOF_NODES].map(|()| ListNode::new());
    let mut list = AnchorList::new();
    let len = any_list(&mut list, &mut storage);

    let mut extra = ListNode::new();
    if kani::any() {
        unsafe { list.push_front(NonNull::from(&mut extra)) };
        kani::assert(list.is_valid_deep(), "push_front preserves the invariant");
        kani::assert(!list.is_empty(), "pushed list is non-empty");
    } else {
        let popped = unsafe { list.pop_front() };
        kani::assert(
            popped.is_some() == (len > 0),
            "pop_front yields a node exactly when one exists",
        );
        kani::assert(list.is_valid_deep(), "pop_front preserves the invariant");
    }
    kani::assert(
        list.rend() == NonNull::from(&list.head),
        "boundaries are unaffected by mutation",
    );
}
