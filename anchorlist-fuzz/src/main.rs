#[cfg(not(feature = "standalone"))]
use afl::fuzz;
use anchorlist::{AnchorList, ListNode};
use arbitrary::Arbitrary;
use core::ptr::NonNull;
use std::collections::VecDeque;

/// Bound on live nodes, so hostile inputs cannot balloon the pool.
const MAX_NODES: usize = 64;

// ============================================================================
// Fuzz input
// ============================================================================

#[derive(Clone, Debug, Arbitrary)]
pub enum FuzzOp {
    PushFront,
    PushBack,
    PopFront,
    PopBack,
    RemoveAt(u8),
    SwapContents,
    Rend,
}

#[derive(Clone, Debug, Arbitrary)]
pub struct FuzzInput {
    ops: Vec<FuzzOp>,
}

// ============================================================================
// Execution
// ============================================================================

fn run_fuzz(input: FuzzInput) {
    let mut pool: Vec<Box<ListNode>> = (0..MAX_NODES)
        .map(|_| Box::new(ListNode::new()))
        .collect();
    let mut free: Vec<NonNull<ListNode>> =
        pool.iter_mut().map(|b| NonNull::from(b.as_mut())).collect();

    let mut list = AnchorList::boxed();
    let mut scratch = AnchorList::boxed();
    let mut order: VecDeque<NonNull<ListNode>> = VecDeque::new();
    let mut scratch_order: VecDeque<NonNull<ListNode>> = VecDeque::new();
    let rend0 = list.rend();

    for op in input.ops {
        match op {
            FuzzOp::PushFront => {
                if let Some(node) = free.pop() {
                    unsafe { list.push_front(node) };
                    order.push_front(node);
                }
            }
            FuzzOp::PushBack => {
                if let Some(node) = free.pop() {
                    unsafe { list.push_back(node) };
                    order.push_back(node);
                }
            }
            FuzzOp::PopFront => {
                let got = unsafe { list.pop_front() };
                assert_eq!(got, order.pop_front());
                if let Some(node) = got {
                    free.push(node);
                }
            }
            FuzzOp::PopBack => {
                let got = unsafe { list.pop_back() };
                assert_eq!(got, order.pop_back());
                if let Some(node) = got {
                    free.push(node);
                }
            }
            FuzzOp::RemoveAt(raw) => {
                if !order.is_empty() {
                    let idx = raw as usize % order.len();
                    let node = order.remove(idx).expect("index is in range");
                    unsafe { AnchorList::remove(node) };
                    free.push(node);
                }
            }
            FuzzOp::SwapContents => {
                list.swap_contents(&mut scratch);
                std::mem::swap(&mut order, &mut scratch_order);
            }
            FuzzOp::Rend => {
                assert_eq!(list.rend(), rend0);
            }
        }

        // Assertion failures are findings, panics from the ADT are too.
        assert!(list.is_valid_deep());
        assert!(scratch.is_valid_deep());
        assert_eq!(list.count(), order.len());
        assert_eq!(scratch.count(), scratch_order.len());
    }
}

// ============================================================================
// Main fuzz target
// ============================================================================

#[cfg(not(feature = "standalone"))]
fn main() {
    fuzz!(|input: FuzzInput| {
        run_fuzz(input);
    });
}

#[cfg(feature = "standalone")]
fn main() {
    use arbitrary::Unstructured;
    use std::io::Read;

    let mut data = Vec::new();
    std::io::stdin().read_to_end(&mut data).unwrap();
    if let Ok(input) = FuzzInput::arbitrary(&mut Unstructured::new(&data)) {
        run_fuzz(input);
    }
}
