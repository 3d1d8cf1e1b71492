//! Async fan-out harness.
//!
//! Plays the coordinator that owns a [`Reconciler`]: one task per replica
//! replies after its planned delay, arrivals are serialized through a single
//! channel, and whatever arrived before the cutoff is resolved.

use docmb_merge::{MergePolicy, MergeResult, Reconciler};
use docmb_protocol::MergeableReply;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep, timeout_at, Instant};
use tracing::debug;

/// When and what a single replica answers.
#[derive(Clone, Debug)]
pub struct ReplicaPlan<R> {
    pub index: usize,
    pub delay: Duration,
    pub reply: R,
}

/// What the coordinator observed.
#[derive(Clone, Debug)]
pub struct FanOutRun<R> {
    /// Indices in the order their replies were reported.
    pub arrival_order: Vec<usize>,
    /// Planned indices that did not reply before the cutoff.
    pub missing: Vec<usize>,
    pub merged: MergeResult<R>,
}

#[derive(Clone, Debug)]
pub struct FanOutHarness<R> {
    policy: MergePolicy,
    cutoff: Duration,
    plans: Vec<ReplicaPlan<R>>,
}

impl<R> FanOutHarness<R>
where
    R: MergeableReply + Send + 'static,
{
    pub fn new(cutoff: Duration) -> Self {
        Self {
            policy: MergePolicy::default(),
            cutoff,
            plans: Vec::new(),
        }
    }

    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn replica(mut self, index: usize, delay: Duration, reply: R) -> Self {
        self.plans.push(ReplicaPlan {
            index,
            delay,
            reply,
        });
        self
    }

    /// Must be called inside a tokio runtime.
    pub async fn run(self) -> FanOutRun<R> {
        let Self {
            policy,
            cutoff,
            plans,
        } = self;

        let planned: Vec<usize> = plans.iter().map(|p| p.index).collect();
        let (tx, mut rx) = mpsc::unbounded_channel::<(usize, R)>();

        for plan in plans {
            let tx = tx.clone();
            tokio::spawn(async move {
                sleep(plan.delay).await;
                // Receiver is gone once the cutoff passed.
                let _ = tx.send((plan.index, plan.reply));
            });
        }
        drop(tx);

        let deadline = Instant::now() + cutoff;
        let mut reconciler = Reconciler::with_policy(policy);
        let mut arrival_order = Vec::with_capacity(planned.len());

        loop {
            match timeout_at(deadline, rx.recv()).await {
                Ok(Some((index, reply))) => {
                    arrival_order.push(index);
                    reconciler.report(index, reply);
                }
                Ok(None) => break,
                Err(_) => {
                    debug!(
                        arrived = arrival_order.len(),
                        planned = planned.len(),
                        "fan-out cutoff reached"
                    );
                    break;
                }
            }
        }

        let mut missing = Vec::new();
        let mut remaining = arrival_order.clone();
        for index in planned {
            match remaining.iter().position(|i| *i == index) {
                Some(pos) => {
                    remaining.swap_remove(pos);
                }
                None => missing.push(index),
            }
        }

        FanOutRun {
            arrival_order,
            missing,
            merged: reconciler.resolve(),
        }
    }
}
