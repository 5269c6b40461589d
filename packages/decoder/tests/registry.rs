//! Registry construction tests

use formlit_decoder::{Coercion, DecodeError, FieldTypes};

#[test]
fn build_reports_the_offending_field() {
    let err = FieldTypes::builder()
        .number("age")
        .flag("user..active")
        .build()
        .expect_err("bad segment must fail the whole build");
    match err {
        DecodeError::InvalidRegistry { field, reason } => {
            assert_eq!(field, "user..active");
            assert!(reason.contains("empty path segment"));
        }
        other => panic!("expected InvalidRegistry, got {other:?}"),
    }
}

#[test]
fn lookup_is_by_full_dotted_name() {
    let types = FieldTypes::builder()
        .number("user.age")
        .build()
        .expect("valid names");
    assert!(matches!(types.get("user.age"), Some(Coercion::Numeric)));
    assert!(types.get("age").is_none());
    assert!(types.get("user").is_none());
}

#[test]
fn empty_registry_reports_empty() {
    let types = FieldTypes::none();
    assert!(types.is_empty());
    assert_eq!(types.len(), 0);
}

#[test]
fn debug_output_names_selectors_without_closures() {
    let types = FieldTypes::builder()
        .custom("x", |raw| Ok(raw.into()))
        .build()
        .expect("valid names");
    let rendered = format!("{:?}", types.get("x").expect("registered"));
    assert_eq!(rendered, "Custom(..)");
}
