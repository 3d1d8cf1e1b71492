//! Scenario: capability-driven selection among clean replies.
//!
//! - All FoundAware and clean: first reply that found the document wins,
//!   else the first reply.
//! - All RetrievalAware and clean: same rule on `was_retrieved`.
//! - Mixed capabilities or ignored noise present: plain first-clean.

use docmb_merge::{MergeOutcome, Reconciler};
use docmb_protocol::codes::ERROR_MESSAGE_IGNORED;
use docmb_protocol::{Document, DocumentReply};

#[test]
fn remove_reply_where_document_was_found_wins() {
    let mut rc = Reconciler::new();
    rc.report(0, DocumentReply::remove(false));
    rc.report(1, DocumentReply::remove(true));
    rc.report(2, DocumentReply::remove(false));

    let merged = rc.resolve();
    assert_eq!(merged.index, Some(1));
    assert_eq!(merged.reply, DocumentReply::remove(true));
}

#[test]
fn first_remove_reply_when_nothing_found() {
    let mut rc = Reconciler::new();
    rc.report(0, DocumentReply::remove(false));
    rc.report(1, DocumentReply::remove(false));

    let merged = rc.resolve();
    assert_eq!(merged.index, Some(0));
    assert_eq!(merged.outcome, MergeOutcome::Success);
}

#[test]
fn first_update_reply_that_found_wins() {
    let mut rc = Reconciler::new();
    rc.report(0, DocumentReply::update(false));
    rc.report(1, DocumentReply::update(true));
    rc.report(2, DocumentReply::update(true));

    assert_eq!(rc.resolve().index, Some(1));
}

#[test]
fn remove_and_update_share_the_found_capability() {
    let mut rc = Reconciler::new();
    rc.report(0, DocumentReply::remove(false));
    rc.report(1, DocumentReply::update(true));

    assert_eq!(rc.resolve().index, Some(1));
}

#[test]
fn get_reply_that_retrieved_a_document_wins() {
    let doc = Document::new("id:ns:music::1").with_field("title", "x".into());
    let mut rc = Reconciler::new();
    rc.report(0, DocumentReply::get(None, 0));
    rc.report(1, DocumentReply::get(Some(doc.clone()), 12_345));
    rc.report(2, DocumentReply::get(None, 0));

    let merged = rc.resolve();
    assert_eq!(merged.index, Some(1));
    assert_eq!(merged.reply, DocumentReply::get(Some(doc), 12_345));
}

#[test]
fn first_get_reply_when_nothing_retrieved() {
    let mut rc = Reconciler::new();
    rc.report(4, DocumentReply::get(None, 0));
    rc.report(5, DocumentReply::get(None, 0));

    assert_eq!(rc.resolve().index, Some(4));
}

#[test]
fn mixed_capabilities_fall_back_to_first_reported() {
    let mut rc = Reconciler::new();
    rc.report(0, DocumentReply::empty());
    rc.report(1, DocumentReply::remove(true));

    assert_eq!(rc.resolve().index, Some(0));
}

#[test]
fn ignored_noise_disables_found_refinement() {
    let mut rc = Reconciler::new();
    rc.report(0, DocumentReply::remove(false).with_error(ERROR_MESSAGE_IGNORED, "a"));
    rc.report(1, DocumentReply::remove(false));
    rc.report(2, DocumentReply::remove(true));

    let merged = rc.resolve();
    assert_eq!(merged.index, Some(1));
    assert_eq!(merged.reply, DocumentReply::remove(false));
}
