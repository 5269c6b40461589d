//! Formlit Public API
//!
//! Converts flat form field pairs into nested literal objects with a fluent
//! builder pattern. Dotted field names expand into nested structures and a
//! per-field coercion registry turns untyped form strings into typed values.
//!
//! ```
//! use formlit::Forms;
//! use serde_json::json;
//!
//! let object = Forms::decoder()
//!     .number("user.age")
//!     .flag("user.active")
//!     .list("tags")
//!     .build()
//!     .expect("valid field names")
//!     .decode_urlencoded("user.name=Alice&user.age=3,5&user.active=true&tags=x&tags=y")
//!     .expect("decode");
//!
//! assert_eq!(
//!     object,
//!     json!({
//!         "user": {"name": "Alice", "age": 3.5, "active": true},
//!         "tags": ["x", "y"],
//!     })
//! );
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::{FormDecoder, FormDecoderBuilder};

// Re-export important types from the decoder package
pub use formlit_decoder::{
    BoxError, CoerceFn, Coercion, DecodeError, DecodeResult, FieldTypes, FormData,
};

// Output values come straight from serde_json
pub use serde_json::Value;

/// Main entry point providing static builder methods
pub struct Forms;

impl Forms {
    /// Start a fluent decoder builder
    ///
    /// Shorthand for `FormDecoderBuilder::new()`
    #[must_use]
    pub fn decoder() -> FormDecoderBuilder {
        FormDecoderBuilder::new()
    }

    /// A decoder with no registered fields
    ///
    /// Every value decodes as a trimmed string; dotted names still nest.
    #[must_use]
    pub fn untyped() -> FormDecoder {
        FormDecoder::untyped()
    }
}

/// Start a fluent decoder builder
///
/// Shorthand for `Forms::decoder()`
#[must_use]
pub fn decoder() -> FormDecoderBuilder {
    FormDecoderBuilder::new()
}

/// A decoder with no registered fields
///
/// Shorthand for `Forms::untyped()`
#[must_use]
pub fn untyped() -> FormDecoder {
    FormDecoder::untyped()
}
