//! Capability seam between a reply model and the merge engine.
//!
//! The merge engine never inspects reply variants directly. It asks three
//! questions (errors, found, retrieved) and needs one constructor for the
//! replies it synthesizes.

use crate::ReplyError;

/// A reply that can take part in a fan-out merge.
pub trait MergeableReply {
    /// Ordered error entries. Empty means the reply succeeded.
    fn errors(&self) -> &[ReplyError];

    /// `Some(found)` if this reply reports whether the target document was
    /// located (remove/update style). `None` when the capability is absent.
    fn was_found(&self) -> Option<bool> {
        None
    }

    /// `Some(retrieved)` if this reply reports whether a document was
    /// obtained (get style). `None` when the capability is absent.
    fn was_retrieved(&self) -> Option<bool> {
        None
    }

    /// Build a fresh reply with no found/retrieved capability that carries
    /// exactly `errors`.
    fn synthesize(errors: Vec<ReplyError>) -> Self
    where
        Self: Sized;
}
