use anyhow::{Context, Result};
use docmb_config::load_layered_yaml_from_strings;
use docmb_merge::{merge_replies, MergeOutcome, MergePolicy, MergeResult};
use docmb_protocol::{DocumentReply, ReplyError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A recorded fan-out: replies in report order plus the expected merge.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Optional YAML policy document; default policy when absent.
    #[serde(default)]
    pub policy_yaml: Option<String>,
    pub replies: Vec<ScenarioReply>,
    pub expect: ExpectedMerge,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioReply {
    pub index: usize,
    pub reply: DocumentReply,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpectedMerge {
    pub index: Option<usize>,
    pub outcome: MergeOutcome,
    #[serde(default)]
    pub errors: Vec<ReplyError>,
}

impl Scenario {
    pub fn policy(&self) -> Result<MergePolicy> {
        match &self.policy_yaml {
            None => Ok(MergePolicy::default()),
            Some(yaml) => load_layered_yaml_from_strings(&[yaml.as_str()])
                .and_then(|loaded| loaded.merge_policy())
                .with_context(|| format!("scenario {}: policy_yaml", self.name)),
        }
    }

    /// Compare a merge result against `expect`.
    pub fn matches(&self, merged: &MergeResult<DocumentReply>) -> bool {
        merged.index == self.expect.index
            && merged.outcome == self.expect.outcome
            && merged.reply.errors == self.expect.errors
    }
}

/// `crates/docmb-testkit/fixtures`.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .with_context(|| format!("read scenario: {}", path.display()))?;
    let scenario: Scenario = serde_json::from_str(&s)
        .with_context(|| format!("parse scenario json: {}", path.display()))?;
    Ok(scenario)
}

/// Report every reply of `scenario` in file order and resolve.
pub fn run_scenario(scenario: &Scenario) -> Result<MergeResult<DocumentReply>> {
    let policy = scenario.policy()?;
    let replies = scenario
        .replies
        .iter()
        .map(|r| (r.index, r.reply.clone()));
    Ok(merge_replies(policy, replies))
}
