//! # anchorlist
//!
//! Sentinel-anchored intrusive doubly linked list.
//!
//! The list header embeds two non-payload anchor nodes, `head` and `tail`,
//! with real nodes wired circularly between them. Both traversal boundaries
//! (`end` going forward, `rend` going backward) are O(1) address lookups into
//! the header, never chain walks.
//!
//! ## Design Principles
//!
//! 1. **Non-owning** - callers own node memory and embed [`ListNode`] in
//!    their own records; the list only rewires links
//! 2. **Checked invariant** - the structural validity predicate is a first
//!    class operation ([`AnchorList::is_valid`], [`AnchorList::is_valid_deep`])
//!    and every harness re-checks it around every mutation
//! 3. **Bounded verification** - proof harnesses live in a `cfg(kani)`
//!    module next to the implementation, with small explicit bounds

// Important rule: we do not declare all modules as pub, we will be very
// intentional about what our public interface is.
mod list;
mod node;

pub use list::{AnchorList, Iter};
pub use node::ListNode;
