//! One-line reply builders, paired with the replica index that sent them.

use docmb_protocol::codes::ERROR_MESSAGE_IGNORED;
use docmb_protocol::{Document, DocumentReply};

pub fn clean(index: usize) -> (usize, DocumentReply) {
    (index, DocumentReply::empty())
}

pub fn failed(index: usize, code: u32, message: &str) -> (usize, DocumentReply) {
    (index, DocumentReply::empty().with_error(code, message))
}

/// Reply carrying one `MESSAGE_IGNORED` error per message.
pub fn ignored(index: usize, messages: &[&str]) -> (usize, DocumentReply) {
    let reply = messages
        .iter()
        .fold(DocumentReply::empty(), |r, m| r.with_error(ERROR_MESSAGE_IGNORED, *m));
    (index, reply)
}

pub fn removed(index: usize, was_found: bool) -> (usize, DocumentReply) {
    (index, DocumentReply::remove(was_found))
}

/// Get reply; `last_modified == 0` means nothing was retrieved.
pub fn fetched(index: usize, last_modified: u64) -> (usize, DocumentReply) {
    let document = (last_modified != 0).then(|| Document::new(format!("id:test:doc::{index}")));
    (index, DocumentReply::get(document, last_modified))
}
