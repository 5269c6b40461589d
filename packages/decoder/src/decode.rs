//! Path-aware object builder
//!
//! Walks the flat pair sequence in submission order, expands dotted field
//! names into nested containers, and delegates each leaf write to the
//! coercion engine.

use serde_json::{Map, Value};

use crate::coerce;
use crate::error::{DecodeError, DecodeResult};
use crate::form::FormData;
use crate::registry::FieldTypes;

/// Decode a form into a nested literal object.
///
/// Pairs are processed in submission order. Blank values (after trimming)
/// contribute nothing; dotted names create intermediate containers on
/// demand; repeated names overwrite unless the field is list-coerced, in
/// which case values accumulate in order.
///
/// # Errors
///
/// - `DecodeError::InvalidBoolean` for a boolean-typed field whose value is
///   not exactly `"true"` or `"false"`
/// - `DecodeError::PathConflict` when a dotted name descends through a key
///   already holding a scalar
/// - any error a caller-supplied coercion function returns, unmodified
///
/// # Examples
/// ```
/// use formlit_decoder::{decode, FieldTypes, FormData};
/// use serde_json::json;
///
/// let mut form = FormData::new();
/// form.append("user.name", "Alice");
/// form.append("user.age", "39");
///
/// let types = FieldTypes::builder().number("user.age").build()?;
/// let object = decode(&form, &types)?;
/// assert_eq!(object, json!({"user": {"name": "Alice", "age": 39}}));
/// # Ok::<(), formlit_decoder::DecodeError>(())
/// ```
pub fn decode(form: &FormData, types: &FieldTypes) -> DecodeResult<Value> {
    let mut root = Map::new();

    for (name, raw) in form.pairs() {
        let value = raw.trim();
        if value.is_empty() {
            tracing::trace!(field = name, "blank value, pair skipped");
            continue;
        }
        write_field(&mut root, name, types, value)?;
    }

    Ok(Value::Object(root))
}

/// Expand `name` into path segments and write the coerced value at the leaf.
fn write_field(
    root: &mut Map<String, Value>,
    name: &str,
    types: &FieldTypes,
    value: &str,
) -> DecodeResult<()> {
    let coercion = types.get(name);
    let segments: Vec<&str> = name.split('.').collect();
    let last = segments.len() - 1;

    let mut container = root;
    for (i, segment) in segments.iter().copied().enumerate() {
        if i == last {
            coerce::apply(coercion, container, segment, name, value)?;
        } else {
            // Create the intermediate container if it does not already exist.
            let slot = container
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            container = match slot {
                Value::Object(map) => map,
                _ => {
                    return Err(DecodeError::PathConflict {
                        field: name.to_string(),
                        segment: segment.to_string(),
                    });
                }
            };
        }
    }
    Ok(())
}
