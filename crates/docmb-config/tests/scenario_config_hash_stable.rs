//! Config hash stability
//!
//! GREEN when:
//! - Loading the same inputs twice returns identical config_hash.
//! - Reordering keys within YAML doesn't change the hash.
//! - Different values produce different hashes.

use docmb_config::load_layered_yaml_from_strings;

const BASE_YAML: &str = r#"
merge:
  ignored_code: 250001
logging:
  level: debug
  target: docmb_merge
"#;

const BASE_YAML_REORDERED: &str = r#"
logging:
  target: docmb_merge
  level: debug
merge:
  ignored_code: 250001
"#;

#[test]
fn same_input_produces_identical_hash() {
    let a = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let b = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();

    assert_eq!(a.config_hash, b.config_hash);
    assert_eq!(a.canonical_json, b.canonical_json);
}

#[test]
fn reordered_keys_produce_same_hash() {
    let original = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let reordered = load_layered_yaml_from_strings(&[BASE_YAML_REORDERED]).unwrap();

    assert_eq!(
        original.config_hash, reordered.config_hash,
        "reordering keys in YAML must not change the hash"
    );
}

#[test]
fn different_values_produce_different_hash() {
    let a = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let b = load_layered_yaml_from_strings(&["merge:\n  ignored_code: 251019\n"]).unwrap();

    assert_ne!(a.config_hash, b.config_hash);
}

#[test]
fn hash_is_64_hex_chars() {
    let loaded = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();

    assert_eq!(loaded.config_hash.len(), 64);
    assert!(loaded.config_hash.chars().all(|c| c.is_ascii_hexdigit()));
}
