//! Decode error types
//!
//! Core error types for form field decoding. Every failure path of a decode
//! call is one of these variants; lenient behaviors (blank values, unparseable
//! numeric input) are deliberately not errors.

/// Boxed error returned by caller-supplied coercion functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A Result alias where the Err case is `DecodeError`.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding form fields into a nested object.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The raw source could not be read as form data at all.
    #[error("form source is not valid form data: {0}")]
    InvalidSource(String),

    /// A field registration is unusable; raised when the registry is built,
    /// before any input pair is consumed.
    #[error("field registration '{field}' is not valid: {reason}")]
    InvalidRegistry {
        /// The offending registered field name
        field: String,
        /// Why the registration was rejected
        reason: String,
    },

    /// A boolean-typed field received something other than `"true"` or `"false"`.
    #[error("the field '{field}' has a boolean type but its value is not 'true' or 'false': {value}")]
    InvalidBoolean {
        /// Full dotted field name
        field: String,
        /// The offending raw value
        value: String,
    },

    /// A dotted path tried to descend through a key that already holds a
    /// scalar value written by an earlier pair.
    #[error("the field '{field}' cannot descend through '{segment}': a non-container value is already stored there")]
    PathConflict {
        /// Full dotted field name being written
        field: String,
        /// The intermediate segment that collided
        segment: String,
    },

    /// Error returned by a caller-supplied coercion function, passed through
    /// without added context.
    #[error(transparent)]
    Coercion(#[from] BoxError),
}
