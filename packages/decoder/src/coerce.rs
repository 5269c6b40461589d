//! Coercion engine
//!
//! Turns a trimmed raw string into the leaf value stored in the output
//! object, and decides the write policy (overwrite vs. append) per selector.

use serde_json::{Map, Number, Value};

use crate::error::{DecodeError, DecodeResult};
use crate::registry::Coercion;

/// Apply `coercion` to `value` and write the result at `container[key]`.
///
/// `field` is the full dotted name, used only for diagnostics and errors.
/// A `None` coercion stores the trimmed string unchanged.
pub(crate) fn apply(
    coercion: Option<&Coercion>,
    container: &mut Map<String, Value>,
    key: &str,
    field: &str,
    value: &str,
) -> DecodeResult<()> {
    match coercion {
        Some(Coercion::Numeric) => {
            let normalized = value.replacen(',', ".", 1);
            match parse_number(&normalized) {
                Some(number) => {
                    container.insert(key.to_string(), Value::Number(number));
                }
                None => {
                    // Lenient: the field is left absent, not an error.
                    tracing::debug!(field, value, "unparseable numeric value, field skipped");
                }
            }
        }
        Some(Coercion::Listed) => match container.get_mut(key) {
            Some(Value::Array(items)) => items.push(Value::String(value.to_string())),
            _ => {
                container.insert(
                    key.to_string(),
                    Value::Array(vec![Value::String(value.to_string())]),
                );
            }
        },
        Some(Coercion::Flagged) => {
            let flag = match value {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(DecodeError::InvalidBoolean {
                        field: field.to_string(),
                        value: value.to_string(),
                    });
                }
            };
            container.insert(key.to_string(), Value::Bool(flag));
        }
        Some(Coercion::Custom(f)) => {
            let coerced = f(value)?;
            container.insert(key.to_string(), coerced);
        }
        None => {
            container.insert(key.to_string(), Value::String(value.to_string()));
        }
    }
    Ok(())
}

/// Parse a normalized numeric string, preferring integers.
///
/// Non-finite parses (`inf`, `NaN`) count as failures.
fn parse_number(s: &str) -> Option<Number> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::from(i));
    }
    let f = s.parse::<f64>().ok()?;
    Number::from_f64(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_stay_integral() {
        let n = parse_number("42").expect("integral parse");
        assert_eq!(n.as_i64(), Some(42));
    }

    #[test]
    fn decimals_parse_as_f64() {
        let n = parse_number("3.14").expect("decimal parse");
        assert_eq!(n.as_f64(), Some(3.14));
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(parse_number("inf").is_none());
        assert!(parse_number("NaN").is_none());
        assert!(parse_number("abc").is_none());
    }
}
