//! # Formlit Decoder
//!
//! Decoding engine that turns a flat, ordered sequence of form field pairs
//! into a nested literal object (`serde_json::Value`), with per-field type
//! coercion and dotted-path expansion.
//!
//! ## How a decode works
//!
//! ```text
//! form pairs → [skip blanks] → [split dotted path] → [descend / create
//! containers] → [coercion engine] → leaf write on the output object
//! ```
//!
//! - Pairs are consumed in submission order, in one synchronous pass.
//! - A field name like `user.address.city` nests the value three levels
//!   deep; intermediate containers are created on demand and shared by
//!   every pair with the same prefix.
//! - The [`FieldTypes`] registry decides each leaf's coercion: numeric,
//!   list accumulation, strict boolean, a caller-supplied function, or
//!   (with no entry) plain string passthrough.
//!
//! ## Usage
//!
//! ```
//! use formlit_decoder::{decode, FieldTypes, FormData};
//! use serde_json::json;
//!
//! let form = FormData::parse_urlencoded("user.name=Alice&user.active=true&tags=x&tags=y");
//! let types = FieldTypes::builder()
//!     .flag("user.active")
//!     .list("tags")
//!     .build()?;
//!
//! let object = decode(&form, &types)?;
//! assert_eq!(
//!     object,
//!     json!({"user": {"name": "Alice", "active": true}, "tags": ["x", "y"]})
//! );
//! # Ok::<(), formlit_decoder::DecodeError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

mod coerce;
pub mod decode;
pub mod error;
pub mod form;
pub mod prelude;
pub mod registry;

pub use decode::decode;
pub use error::{BoxError, DecodeError, DecodeResult};
pub use form::FormData;
pub use registry::{CoerceFn, Coercion, FieldTypes, FieldTypesBuilder};
