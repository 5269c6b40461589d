//! Fluent API tests
//!
//! End-to-end coverage of the builder surface, mirroring how UI code
//! consumes a submitted form.

use formlit::{DecodeError, FormData, Forms, Value};
use serde::Deserialize;
use serde_json::json;

#[test]
fn end_to_end_typed_form() {
    env_logger::try_init().ok(); // Ignore error if already initialized

    let form = FormData::from_pairs([
        ("user.name", "  Alice "),
        ("user.age", "3,5"),
        ("user.active", "true"),
        ("tags", "x"),
        ("tags", "y"),
    ]);

    let object = Forms::decoder()
        .number("user.age")
        .flag("user.active")
        .list("tags")
        .debug()
        .build()
        .expect("valid field names")
        .decode(&form)
        .expect("decode");

    assert_eq!(
        object,
        json!({
            "user": {"name": "Alice", "age": 3.5, "active": true},
            "tags": ["x", "y"],
        })
    );
}

#[test]
fn decoder_is_reusable_across_forms() {
    let decoder = Forms::decoder().number("n").build().expect("valid");

    let first = decoder.decode_pairs([("n", "1")]).expect("decode");
    let second = decoder.decode_pairs([("n", "2")]).expect("decode");

    assert_eq!(first, json!({"n": 1}));
    assert_eq!(second, json!({"n": 2}));
}

#[test]
fn untyped_decoder_keeps_everything_as_strings() {
    let object = Forms::untyped()
        .decode_urlencoded("a.b=1&a.c=true")
        .expect("decode");
    assert_eq!(object, json!({"a": {"b": "1", "c": "true"}}));
}

#[test]
fn custom_coercions_compose_with_reserved_ones() {
    let object = Forms::decoder()
        .number("qty")
        .custom("sku", |raw| Ok(Value::String(raw.to_uppercase())))
        .build()
        .expect("valid")
        .decode_urlencoded("qty=7&sku=ab-123")
        .expect("decode");
    assert_eq!(object, json!({"qty": 7, "sku": "AB-123"}));
}

#[test]
fn invalid_registration_fails_before_decoding() {
    let err = Forms::decoder()
        .number("user..age")
        .build()
        .expect_err("bad registration");
    assert!(matches!(err, DecodeError::InvalidRegistry { .. }));
}

#[test]
fn decode_bytes_rejects_non_utf8_sources() {
    let decoder = Forms::untyped();
    let err = decoder
        .decode_bytes(&[b'a', b'=', 0xff])
        .expect_err("invalid UTF-8 body");
    assert!(matches!(err, DecodeError::InvalidSource(_)));
}

#[test]
fn decode_as_fills_a_typed_struct() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Profile {
        name: String,
        age: f64,
        active: bool,
        tags: Vec<String>,
    }

    let encoded = serde_urlencoded::to_string([
        ("name", "Alice"),
        ("age", "39,5"),
        ("active", "false"),
        ("tags", "a"),
        ("tags", "b"),
    ])
    .expect("serialize fixture");

    let profile: Profile = Forms::decoder()
        .number("age")
        .flag("active")
        .list("tags")
        .build()
        .expect("valid")
        .decode_as(&FormData::parse_urlencoded(&encoded))
        .expect("decode");

    assert_eq!(
        profile,
        Profile {
            name: "Alice".to_string(),
            age: 39.5,
            active: false,
            tags: vec!["a".to_string(), "b".to_string()],
        }
    );
}

#[test]
fn decode_as_reports_shape_mismatch_as_invalid_source() {
    #[derive(Debug, Deserialize)]
    struct Narrow {
        #[allow(dead_code)]
        count: i64,
    }

    let decoder = Forms::untyped();
    let err = decoder
        .decode_as::<Narrow>(&FormData::from_pairs([("count", "not-a-number")]))
        .expect_err("string cannot fill an i64 field");
    assert!(matches!(err, DecodeError::InvalidSource(_)));
}

#[test]
fn free_function_shorthands_match_the_entry_struct() {
    let via_struct = Forms::decoder().build().expect("valid");
    let via_free = formlit::decoder().build().expect("valid");
    assert!(via_struct.types().is_empty());
    assert!(via_free.types().is_empty());
}
