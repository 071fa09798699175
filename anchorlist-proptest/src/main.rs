fn main() {
    println!("Run with: cargo test");
}

#[cfg(test)]
mod tests {
    use anchorlist::{AnchorList, ListNode};
    use core::ptr::NonNull;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Bound on live nodes per generated scenario.
    const MAX_NODES: usize = 24;

    // ========================================================================
    // Op generation
    // ========================================================================

    #[derive(Debug, Clone)]
    enum OpRecipe {
        PushFront,
        PushBack,
        PopFront,
        PopBack,
        RemoveAt(usize),
        SwapContents,
    }

    fn arb_op_recipe() -> impl Strategy<Value = OpRecipe> {
        prop_oneof![
            Just(OpRecipe::PushFront),
            Just(OpRecipe::PushBack),
            Just(OpRecipe::PopFront),
            Just(OpRecipe::PopBack),
            (0..MAX_NODES).prop_map(OpRecipe::RemoveAt),
            Just(OpRecipe::SwapContents),
        ]
    }

    fn arb_op_recipes(count: usize) -> impl Strategy<Value = Vec<OpRecipe>> {
        prop::collection::vec(arb_op_recipe(), 0..count)
    }

    // ========================================================================
    // Model - a list paired with the expected node order
    // ========================================================================

    struct Model {
        list: Box<AnchorList>,
        order: VecDeque<NonNull<ListNode>>,
        rend0: NonNull<ListNode>,
        end0: NonNull<ListNode>,
    }

    impl Model {
        fn new() -> Self {
            let list = AnchorList::boxed();
            let rend0 = list.rend();
            let end0 = list.end();
            Self {
                list,
                order: VecDeque::new(),
                rend0,
                end0,
            }
        }
    }

    /// Re-checks every externally observable property after each op.
    fn check(m: &Model) {
        let list = &m.list;
        assert!(list.is_valid_deep(), "validity invariant broken");

        // Boundaries are fixed addresses for the header's lifetime.
        assert_eq!(list.rend(), m.rend0, "rend moved");
        assert_eq!(list.end(), m.end0, "end moved");
        assert_ne!(list.rend(), list.end(), "anchors coincide");

        // The chain agrees with the model, both directions.
        assert_eq!(list.is_empty(), m.order.is_empty());
        assert_eq!(list.count(), m.order.len());
        let forward: Vec<_> = list.iter().collect();
        assert_eq!(forward, Vec::from_iter(m.order.iter().copied()));
        let mut backward: Vec<_> = list.iter().rev().collect();
        backward.reverse();
        assert_eq!(backward, forward);

        // Walking backward from rbegin reaches rend in exactly count steps.
        let mut steps = 0;
        let mut cur = list.rbegin();
        while cur != list.rend() {
            cur = unsafe { cur.as_ref() }
                .prev()
                .expect("linked node must have a predecessor");
            steps += 1;
        }
        assert_eq!(steps, m.order.len());

        // The first node's predecessor is rend; empty collapses onto it.
        match m.order.front() {
            Some(&first) => {
                assert_eq!(unsafe { first.as_ref() }.prev(), Some(list.rend()));
                assert_eq!(list.begin(), first);
            }
            None => {
                assert_eq!(list.rbegin(), list.rend());
                assert_eq!(list.begin(), list.end());
            }
        }
    }

    fn run_ops(ops: Vec<OpRecipe>) {
        // Node memory is caller-owned: a boxed pool outlives both lists,
        // popped nodes return to the free stack for reuse.
        let mut pool: Vec<Box<ListNode>> = (0..MAX_NODES * 2)
            .map(|_| Box::new(ListNode::new()))
            .collect();
        let mut free: Vec<NonNull<ListNode>> =
            pool.iter_mut().map(|b| NonNull::from(b.as_mut())).collect();

        let mut a = Model::new();
        let mut b = Model::new();

        for op in ops {
            match op {
                OpRecipe::PushFront => {
                    if let Some(node) = free.pop() {
                        unsafe { a.list.push_front(node) };
                        a.order.push_front(node);
                    }
                }
                OpRecipe::PushBack => {
                    if let Some(node) = free.pop() {
                        unsafe { a.list.push_back(node) };
                        a.order.push_back(node);
                    }
                }
                OpRecipe::PopFront => {
                    let got = unsafe { a.list.pop_front() };
                    assert_eq!(got, a.order.pop_front());
                    if let Some(node) = got {
                        assert!(!unsafe { node.as_ref() }.is_linked());
                        free.push(node);
                    }
                }
                OpRecipe::PopBack => {
                    let got = unsafe { a.list.pop_back() };
                    assert_eq!(got, a.order.pop_back());
                    if let Some(node) = got {
                        free.push(node);
                    }
                }
                OpRecipe::RemoveAt(raw) => {
                    if !a.order.is_empty() {
                        let idx = raw % a.order.len();
                        let node = a.order.remove(idx).expect("index is in range");
                        unsafe { AnchorList::remove(node) };
                        free.push(node);
                    }
                }
                OpRecipe::SwapContents => {
                    a.list.swap_contents(&mut b.list);
                    std::mem::swap(&mut a.order, &mut b.order);
                }
            }
            check(&a);
            check(&b);
        }
    }

    // ========================================================================
    // Proptests
    // ========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1_000))]

        #[test]
        fn arbitrary_op_sequences(ops in arb_op_recipes(64)) {
            run_ops(ops);
        }

        #[test]
        fn rend_is_pure_on_arbitrary_lists(len in 0..MAX_NODES, calls in 1usize..8) {
            let mut pool: Vec<Box<ListNode>> =
                (0..len).map(|_| Box::new(ListNode::new())).collect();
            let mut list = AnchorList::boxed();
            for node in &mut pool {
                unsafe { list.push_back(NonNull::from(node.as_mut())) };
            }
            prop_assert!(list.is_valid_deep());

            // Snapshot every link reachable through the public surface.
            let snapshot = |list: &AnchorList| -> Vec<_> {
                list.iter()
                    .map(|n| {
                        let n = unsafe { n.as_ref() };
                        (n.next(), n.prev())
                    })
                    .chain([(Some(list.begin()), None), (None, Some(list.rbegin()))])
                    .collect::<Vec<_>>()
            };

            let before = snapshot(&list);
            let expected = list.rend();
            for _ in 0..calls {
                prop_assert_eq!(list.rend(), expected);
            }
            prop_assert_eq!(snapshot(&list), before);
            prop_assert!(list.is_valid_deep());
        }
    }
}
