//! docmb-protocol
//!
//! Reply model for document operations fanned out over the message bus.
//!
//! - Error code space (transport + document protocol codes)
//! - Error entries and concrete reply variants (put/remove/update/get)
//! - The capability seam ([`MergeableReply`]) consumed by the merge engine
//!
//! Pure data. No IO.

pub mod capability;
pub mod codes;
mod reply;

pub use capability::MergeableReply;
pub use codes::{error_name, is_fatal, is_transient, severity, Severity};
pub use reply::*;
