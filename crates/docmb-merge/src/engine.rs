use crate::types::ClassTally;
use crate::{ErrorClass, IndexedReply, MergeOutcome, MergePolicy, MergeResult};
use docmb_protocol::{MergeableReply, ReplyError};
use tracing::{debug, trace};

/// Classify an error list against the ignored code.
pub fn classify(errors: &[ReplyError], ignored_code: u32) -> ErrorClass {
    if errors.is_empty() {
        ErrorClass::Clean
    } else if errors.iter().all(|e| e.code == ignored_code) {
        ErrorClass::IgnoredOnly
    } else {
        ErrorClass::Substantive
    }
}

/// Accumulates the replies of one fan-out operation and merges them.
///
/// One instance per logical operation: [`report`](Self::report) each reply
/// as it arrives, then [`resolve`](Self::resolve) once. `resolve` consumes the
/// instance, so a second resolve does not compile.
///
/// "First" always means first in report order. Indices are never sorted and
/// duplicates are not special-cased.
#[derive(Clone, Debug)]
pub struct Reconciler<R> {
    policy: MergePolicy,
    replies: Vec<IndexedReply<R>>,
}

impl<R> Default for Reconciler<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Reconciler<R> {
    pub fn new() -> Self {
        Self::with_policy(MergePolicy::default())
    }

    pub fn with_policy(policy: MergePolicy) -> Self {
        Self {
            policy,
            replies: Vec::new(),
        }
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    /// Replies reported so far, in report order.
    pub fn replies(&self) -> &[IndexedReply<R>] {
        &self.replies
    }
}

impl<R: MergeableReply> Reconciler<R> {
    /// Record the reply produced by destination `index`.
    pub fn report(&mut self, index: usize, reply: R) {
        trace!(
            index,
            errors = reply.errors().len(),
            position = self.replies.len(),
            "fan-out reply reported"
        );
        self.replies.push(IndexedReply { index, reply });
    }

    /// Merge everything reported into the single reply the client observes.
    ///
    /// Precedence:
    /// 1. nothing reported => synthesized empty success
    /// 2. any substantive reply => synthesized reply with all errors of the
    ///    substantive replies, in report order
    /// 3. any clean reply => that reply verbatim with its index; when every
    ///    reply is clean and all share the found (or retrieved) capability,
    ///    the first one that found (retrieved) something wins
    /// 4. all ignored-only => synthesized reply with the first error of each
    pub fn resolve(self) -> MergeResult<R> {
        let Self { policy, mut replies } = self;

        if replies.is_empty() {
            debug!(outcome = MergeOutcome::NoReplies.as_str(), "fan-out merge");
            return MergeResult {
                index: None,
                reply: R::synthesize(Vec::new()),
                outcome: MergeOutcome::NoReplies,
            };
        }

        let mut tally = ClassTally::default();
        let mut substantive_errors: Vec<ReplyError> = Vec::new();
        let mut ignored_errors: Vec<ReplyError> = Vec::new();
        let mut first_clean: Option<usize> = None;

        let mut all_found_aware = true;
        let mut first_found: Option<usize> = None;
        let mut all_retrieval_aware = true;
        let mut first_retrieved: Option<usize> = None;

        for (pos, entry) in replies.iter().enumerate() {
            let errors = entry.reply.errors();
            match classify(errors, policy.ignored_code) {
                ErrorClass::Clean => {
                    tally.clean += 1;
                    first_clean.get_or_insert(pos);
                }
                ErrorClass::IgnoredOnly => {
                    tally.ignored_only += 1;
                    // Later ignored errors from the same reply are duplicates.
                    ignored_errors.extend(errors.first().cloned());
                }
                ErrorClass::Substantive => {
                    tally.substantive += 1;
                    substantive_errors.extend(errors.iter().cloned());
                }
            }

            match entry.reply.was_found() {
                Some(true) => {
                    first_found.get_or_insert(pos);
                }
                Some(false) => {}
                None => all_found_aware = false,
            }
            match entry.reply.was_retrieved() {
                Some(true) => {
                    first_retrieved.get_or_insert(pos);
                }
                Some(false) => {}
                None => all_retrieval_aware = false,
            }
        }

        let (index, reply, outcome) = if tally.substantive > 0 {
            (
                None,
                R::synthesize(substantive_errors),
                MergeOutcome::CombinedFailure,
            )
        } else if let Some(first_clean) = first_clean {
            let pos = if tally.clean == replies.len() {
                if all_found_aware {
                    first_found.unwrap_or(first_clean)
                } else if all_retrieval_aware {
                    first_retrieved.unwrap_or(first_clean)
                } else {
                    first_clean
                }
            } else {
                first_clean
            };
            let chosen = replies.swap_remove(pos);
            (Some(chosen.index), chosen.reply, MergeOutcome::Success)
        } else {
            (
                None,
                R::synthesize(ignored_errors),
                MergeOutcome::CombinedIgnored,
            )
        };

        debug!(
            outcome = outcome.as_str(),
            index = ?index,
            clean = tally.clean,
            ignored_only = tally.ignored_only,
            substantive = tally.substantive,
            ignored_code = policy.ignored_code,
            "fan-out merge"
        );

        MergeResult {
            index,
            reply,
            outcome,
        }
    }
}

/// Report every `(index, reply)` in iteration order and resolve.
pub fn merge_replies<R, I>(policy: MergePolicy, replies: I) -> MergeResult<R>
where
    R: MergeableReply,
    I: IntoIterator<Item = (usize, R)>,
{
    let mut reconciler = Reconciler::with_policy(policy);
    for (index, reply) in replies {
        reconciler.report(index, reply);
    }
    reconciler.resolve()
}
