//! Scenario: merge policy extraction from layered YAML.
//!
//! - Missing section => default policy (MESSAGE_IGNORED)
//! - Overlay overrides base
//! - Zero, negative, non-integer and out-of-range codes are rejected
//! - File-based loading matches string-based loading

use docmb_config::{load_layered_yaml, load_layered_yaml_from_strings, merge_policy_from_config};
use docmb_merge::MergePolicy;
use docmb_protocol::codes::{ERROR_ABORTED, ERROR_MESSAGE_IGNORED};
use std::io::Write;

#[test]
fn missing_merge_section_yields_default_policy() {
    let loaded = load_layered_yaml_from_strings(&["{}"]).unwrap();
    let policy = loaded.merge_policy().unwrap();
    assert_eq!(policy, MergePolicy::default());
    assert_eq!(policy.ignored_code, ERROR_MESSAGE_IGNORED);
}

#[test]
fn overlay_overrides_ignored_code() {
    let base = "merge:\n  ignored_code: 250001\n";
    let overlay = format!("merge:\n  ignored_code: {ERROR_ABORTED}\n");

    let loaded = load_layered_yaml_from_strings(&[base, overlay.as_str()]).unwrap();
    assert_eq!(loaded.merge_policy().unwrap().ignored_code, ERROR_ABORTED);
}

#[test]
fn invalid_ignored_codes_are_rejected() {
    for bad in [
        "merge:\n  ignored_code: 0\n",
        "merge:\n  ignored_code: -5\n",
        "merge:\n  ignored_code: 1.5\n",
        "merge:\n  ignored_code: \"250001\"\n",
        "merge:\n  ignored_code: 300000\n",
    ] {
        let loaded = load_layered_yaml_from_strings(&[bad]).unwrap();
        let err = merge_policy_from_config(&loaded.config_json)
            .expect_err("invalid code must be rejected");
        assert!(
            format!("{err:#}").contains("CONFIG_INVALID_POLICY"),
            "unexpected error for {bad:?}: {err:#}"
        );
    }
}

#[test]
fn invalid_yaml_is_an_error() {
    assert!(load_layered_yaml_from_strings(&["merge: [unclosed"]).is_err());
}

#[test]
fn files_load_like_strings() {
    let mut base = tempfile::NamedTempFile::new().unwrap();
    writeln!(base, "merge:\n  ignored_code: 250001").unwrap();
    let mut overlay = tempfile::NamedTempFile::new().unwrap();
    writeln!(overlay, "merge:\n  ignored_code: {ERROR_ABORTED}").unwrap();

    let base_path = base.path().to_str().unwrap().to_string();
    let overlay_path = overlay.path().to_str().unwrap().to_string();

    let from_files = load_layered_yaml(&[base_path.as_str(), overlay_path.as_str()]).unwrap();
    let from_strings = load_layered_yaml_from_strings(&[
        "merge:\n  ignored_code: 250001\n",
        format!("merge:\n  ignored_code: {ERROR_ABORTED}\n").as_str(),
    ])
    .unwrap();

    assert_eq!(from_files.config_hash, from_strings.config_hash);
    assert_eq!(
        from_files.merge_policy().unwrap().ignored_code,
        ERROR_ABORTED
    );
}

#[test]
fn missing_file_names_the_path() {
    let err = load_layered_yaml(&["/nonexistent/docmb/merge.yaml"]).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/docmb/merge.yaml"));
}
