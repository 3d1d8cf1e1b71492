use docmb_protocol::codes::ERROR_MESSAGE_IGNORED;
use serde::{Deserialize, Serialize};

/// Knobs for the merge engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePolicy {
    /// Error code treated as routing noise rather than a real failure.
    pub ignored_code: u32,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            ignored_code: ERROR_MESSAGE_IGNORED,
        }
    }
}

/// How a single reply's error list classifies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorClass {
    /// No errors.
    Clean,
    /// At least one error, all of them carrying the ignored code.
    IgnoredOnly,
    /// At least one error with any other code.
    Substantive,
}

/// A reply tagged with the destination that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedReply<R> {
    pub index: usize,
    pub reply: R,
}

/// Which rule produced the merged reply.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MergeOutcome {
    /// Nothing was reported; the reply is a synthesized empty success.
    NoReplies,
    /// At least one reply had a substantive error.
    CombinedFailure,
    /// A clean reply was selected and returned as-is.
    Success,
    /// Every reply was ignored-only.
    CombinedIgnored,
}

impl MergeOutcome {
    /// `true` when the merged reply was built by the engine rather than
    /// selected from the reported replies.
    pub fn is_synthesized(&self) -> bool {
        !matches!(self, MergeOutcome::Success)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MergeOutcome::NoReplies => "NO_REPLIES",
            MergeOutcome::CombinedFailure => "COMBINED_FAILURE",
            MergeOutcome::Success => "SUCCESS",
            MergeOutcome::CombinedIgnored => "COMBINED_IGNORED",
        }
    }
}

/// Result of [`Reconciler::resolve`](crate::Reconciler::resolve).
///
/// `index` is `None` exactly when `reply` was synthesized.
#[derive(Clone, Debug, PartialEq)]
pub struct MergeResult<R> {
    pub index: Option<usize>,
    pub reply: R,
    pub outcome: MergeOutcome,
}

impl<R> MergeResult<R> {
    pub fn into_parts(self) -> (Option<usize>, R) {
        (self.index, self.reply)
    }
}

/// Per-class counts observed during a resolve. Logged, not returned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ClassTally {
    pub clean: usize,
    pub ignored_only: usize,
    pub substantive: usize,
}
