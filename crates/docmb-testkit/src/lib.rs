//! docmb-testkit
//!
//! Shared test scaffolding for the merge engine:
//! - reply fixture builders
//! - JSON scenario fixtures (`fixtures/*.json`)
//! - an async fan-out harness that plays the coordinator role
//! - tracing init for tests

mod fanout;
pub mod fixtures;
mod scenario;

pub use fanout::{FanOutHarness, FanOutRun, ReplicaPlan};
pub use scenario::{fixtures_dir, load_scenario, run_scenario, ExpectedMerge, Scenario, ScenarioReply};

/// Install a fmt subscriber for tests (`RUST_LOG` overrides the default
/// `info` filter). Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_test_writer()
        .try_init();
}
