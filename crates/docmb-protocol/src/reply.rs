use crate::codes::error_name;
use crate::MergeableReply;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One error entry on a reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyError {
    pub code: u32,
    pub message: String,
}

impl ReplyError {
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ReplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", error_name(self.code), self.message)
    }
}

/// A stored document as returned by a get.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl Document {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }
}

/// Operation-specific payload of a reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplyBody {
    /// No payload. Also the shape of every synthesized reply.
    Empty,
    Put {
        highest_modification_timestamp: u64,
    },
    Remove {
        was_found: bool,
    },
    Update {
        was_found: bool,
        #[serde(default)]
        highest_modification_timestamp: u64,
    },
    /// `last_modified == 0` means nothing was retrieved.
    Get {
        #[serde(default)]
        document: Option<Document>,
        #[serde(default)]
        last_modified: u64,
    },
}

/// Reply to a single document operation from one replica.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentReply {
    #[serde(default)]
    pub errors: Vec<ReplyError>,
    pub body: ReplyBody,
}

impl DocumentReply {
    pub fn new(body: ReplyBody) -> Self {
        Self {
            errors: Vec::new(),
            body,
        }
    }

    pub fn empty() -> Self {
        Self::new(ReplyBody::Empty)
    }

    pub fn put(highest_modification_timestamp: u64) -> Self {
        Self::new(ReplyBody::Put {
            highest_modification_timestamp,
        })
    }

    pub fn remove(was_found: bool) -> Self {
        Self::new(ReplyBody::Remove { was_found })
    }

    pub fn update(was_found: bool) -> Self {
        Self::new(ReplyBody::Update {
            was_found,
            highest_modification_timestamp: 0,
        })
    }

    pub fn get(document: Option<Document>, last_modified: u64) -> Self {
        Self::new(ReplyBody::Get {
            document,
            last_modified,
        })
    }

    /// Builder form of [`add_error`](Self::add_error).
    pub fn with_error(mut self, code: u32, message: impl Into<String>) -> Self {
        self.add_error(ReplyError::new(code, message));
        self
    }

    pub fn add_error(&mut self, error: ReplyError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn num_errors(&self) -> usize {
        self.errors.len()
    }

    /// True when the reply has at least one error and every error has `code`.
    pub fn has_only_errors_of_type(&self, code: u32) -> bool {
        self.has_errors() && self.errors.iter().all(|e| e.code == code)
    }
}

impl MergeableReply for DocumentReply {
    fn errors(&self) -> &[ReplyError] {
        &self.errors
    }

    fn was_found(&self) -> Option<bool> {
        match self.body {
            ReplyBody::Remove { was_found } | ReplyBody::Update { was_found, .. } => {
                Some(was_found)
            }
            _ => None,
        }
    }

    fn was_retrieved(&self) -> Option<bool> {
        match self.body {
            ReplyBody::Get { last_modified, .. } => Some(last_modified != 0),
            _ => None,
        }
    }

    fn synthesize(errors: Vec<ReplyError>) -> Self {
        Self {
            errors,
            body: ReplyBody::Empty,
        }
    }
}
