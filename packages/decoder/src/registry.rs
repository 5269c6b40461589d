//! Coercion registry
//!
//! Maps full (undotted) field names to the coercion applied at that field's
//! leaf. The selector set is closed: the three reserved behaviors, or a
//! caller-supplied function. A name with no entry decodes as a plain string.

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use serde_json::Value;

use crate::error::{BoxError, DecodeError, DecodeResult};

/// Type alias for caller-supplied coercion functions to reduce complexity.
pub type CoerceFn = Arc<dyn Fn(&str) -> Result<Value, BoxError> + Send + Sync + 'static>;

/// How a raw string value becomes the stored leaf value.
///
/// Chosen once per field when the registry is built; the decode pass only
/// ever dispatches on this closed set.
#[derive(Clone)]
pub enum Coercion {
    /// Parse as a number after replacing the first decimal comma with a dot.
    /// Unparseable values are skipped, leaving the field absent.
    Numeric,
    /// Accumulate repeated pairs into an array, in submission order.
    Listed,
    /// Accept exactly `"true"` or `"false"`; anything else fails the decode.
    Flagged,
    /// Caller-defined behavior: the function's return value is stored
    /// verbatim and its errors pass through unmodified.
    Custom(CoerceFn),
}

impl fmt::Debug for Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coercion::Numeric => f.write_str("Numeric"),
            Coercion::Listed => f.write_str("Listed"),
            Coercion::Flagged => f.write_str("Flagged"),
            Coercion::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Registry of per-field coercions, keyed by full dotted field name.
///
/// Build one through [`FieldTypes::builder`]; construction validates every
/// registered name before any form pair is ever consumed.
#[derive(Clone, Debug, Default)]
pub struct FieldTypes {
    entries: HashMap<String, Coercion>,
}

impl FieldTypes {
    /// Start building a registry.
    #[must_use]
    pub fn builder() -> FieldTypesBuilder {
        FieldTypesBuilder::new()
    }

    /// An empty registry: every field decodes as a plain string.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Look up the coercion registered for a full field name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Coercion> {
        self.entries.get(name)
    }

    /// Number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field has a registered coercion.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fluent builder for [`FieldTypes`].
///
/// # Examples
/// ```
/// use formlit_decoder::FieldTypes;
///
/// let types = FieldTypes::builder()
///     .number("user.age")
///     .flag("user.active")
///     .list("tags")
///     .build()
///     .expect("valid field names");
/// assert_eq!(types.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldTypesBuilder {
    entries: Vec<(String, Coercion)>,
}

impl FieldTypesBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field as numeric.
    #[must_use]
    pub fn number(self, name: impl Into<String>) -> Self {
        self.coerce(name, Coercion::Numeric)
    }

    /// Register a field as list-accumulating.
    #[must_use]
    pub fn list(self, name: impl Into<String>) -> Self {
        self.coerce(name, Coercion::Listed)
    }

    /// Register a field as strict boolean.
    #[must_use]
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.coerce(name, Coercion::Flagged)
    }

    /// Register a caller-supplied coercion function for a field.
    ///
    /// The function receives the trimmed raw value; whatever it returns is
    /// stored verbatim, and its errors abort the decode unmodified.
    #[must_use]
    pub fn custom<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.coerce(name, Coercion::Custom(Arc::new(f)))
    }

    /// Register an explicit [`Coercion`] for a field.
    ///
    /// Registering the same name twice keeps the later registration.
    #[must_use]
    pub fn coerce(mut self, name: impl Into<String>, coercion: Coercion) -> Self {
        self.entries.push((name.into(), coercion));
        self
    }

    /// Validate every registered name and produce the registry.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidRegistry` if a registered name is empty
    /// or contains an empty dotted segment (leading, trailing, or doubled
    /// dot). Validation is eager so a bad registration surfaces before any
    /// input pair is processed.
    pub fn build(self) -> DecodeResult<FieldTypes> {
        let mut entries = HashMap::with_capacity(self.entries.len());
        for (name, coercion) in self.entries {
            validate_field_name(&name)?;
            entries.insert(name, coercion);
        }
        Ok(FieldTypes { entries })
    }
}

fn validate_field_name(name: &str) -> DecodeResult<()> {
    if name.is_empty() {
        return Err(DecodeError::InvalidRegistry {
            field: name.to_string(),
            reason: "field name is empty".to_string(),
        });
    }
    if name.split('.').any(str::is_empty) {
        return Err(DecodeError::InvalidRegistry {
            field: name.to_string(),
            reason: "field name contains an empty path segment".to_string(),
        });
    }
    Ok(())
}
