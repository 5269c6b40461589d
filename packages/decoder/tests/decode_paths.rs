//! Path expansion tests
//!
//! Covers dotted-name nesting, intermediate container reuse, write policy
//! for repeated names, and collision handling.

use formlit_decoder::{decode, DecodeError, FieldTypes, FormData};
use serde_json::json;

fn strings_only(pairs: &[(&str, &str)]) -> serde_json::Value {
    let form = FormData::from_pairs(pairs.iter().copied());
    decode(&form, &FieldTypes::none()).expect("decode should succeed")
}

#[test]
fn dotted_names_nest_instead_of_flat_keys() {
    let object = strings_only(&[("a.b.c", "v")]);
    assert_eq!(object, json!({"a": {"b": {"c": "v"}}}));
    assert!(object.get("a.b.c").is_none());
}

#[test]
fn shared_prefixes_reuse_one_container() {
    let object = strings_only(&[("a.b.c1", "1"), ("a.b.c2", "2")]);
    assert_eq!(object, json!({"a": {"b": {"c1": "1", "c2": "2"}}}));
}

#[test]
fn repeated_plain_names_keep_last_value() {
    let object = strings_only(&[("x", "1"), ("x", "2")]);
    assert_eq!(object, json!({"x": "2"}));
}

#[test]
fn blank_values_contribute_nothing() {
    let object = strings_only(&[("kept", "v"), ("dropped", "   "), ("empty", "")]);
    assert_eq!(object, json!({"kept": "v"}));
}

#[test]
fn values_are_trimmed() {
    let object = strings_only(&[("name", "  Alice ")]);
    assert_eq!(object, json!({"name": "Alice"}));
}

#[test]
fn blank_values_skip_every_coercion() {
    let form = FormData::from_pairs([("n", " "), ("l", " "), ("f", " ")]);
    let types = FieldTypes::builder()
        .number("n")
        .list("l")
        .flag("f")
        .build()
        .expect("valid names");
    let object = decode(&form, &types).expect("blank pairs never fail");
    assert_eq!(object, json!({}));
}

#[test]
fn leaf_then_deeper_path_is_a_conflict() {
    let form = FormData::from_pairs([("a", "scalar"), ("a.b", "deeper")]);
    let err = decode(&form, &FieldTypes::none()).expect_err("descending through a leaf");
    match err {
        DecodeError::PathConflict { field, segment } => {
            assert_eq!(field, "a.b");
            assert_eq!(segment, "a");
        }
        other => panic!("expected PathConflict, got {other:?}"),
    }
}

#[test]
fn container_then_leaf_overwrite_at_same_key_still_conflicts_later() {
    // The container at `a` survives a later scalar overwrite attempt only as
    // the scalar; a third pair descending through it must then fail.
    let form = FormData::from_pairs([("a.b", "1"), ("a", "scalar"), ("a.c", "2")]);
    let err = decode(&form, &FieldTypes::none()).expect_err("scalar shadows container");
    assert!(matches!(err, DecodeError::PathConflict { .. }));
}

#[test]
fn empty_input_decodes_to_empty_object() {
    let object = decode(&FormData::new(), &FieldTypes::none()).expect("empty decode");
    assert_eq!(object, json!({}));
}

#[test]
fn unregistered_names_pass_through_as_strings() {
    let object = strings_only(&[("anything", "stays a string"), ("n", "42")]);
    assert_eq!(object, json!({"anything": "stays a string", "n": "42"}));
}
