//! docmb-merge
//!
//! Fan-out reply reconciliation.
//!
//! A document operation sent to several replicas produces one reply per
//! replica. The [`Reconciler`] folds those replies into the single reply the
//! client observes:
//! - Any substantive error => synthesized failure carrying every error of the
//!   failing replies
//! - Otherwise a clean reply wins over ignored-only noise
//! - All ignored-only => synthesized reply with the first ignored error of each
//! - Nothing reported => synthesized empty success
//!
//! Deterministic, pure logic. No IO.

mod engine;
mod types;

pub use engine::{classify, merge_replies, Reconciler};
pub use types::*;
