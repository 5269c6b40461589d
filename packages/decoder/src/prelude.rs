//! Formlit Decoder Prelude
//!
//! The essential types needed to decode form fields. Only canonical public
//! API types belong here.

// Form source and decode entry point
pub use crate::decode::decode;
pub use crate::form::FormData;

// Coercion registry
pub use crate::registry::{CoerceFn, Coercion, FieldTypes, FieldTypesBuilder};

// Error types
pub use crate::error::{BoxError, DecodeError, DecodeResult};

// Output values come straight from serde_json
pub use serde_json::{Map, Value};
