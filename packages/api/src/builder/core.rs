//! Core `FormDecoderBuilder` structures and base functionality
//!
//! Contains the builder and decoder structs and their foundational methods;
//! field registration lives in [`super::types`], terminal decode methods in
//! [`super::decode`].

use std::fmt;

use formlit_decoder::{DecodeResult, FieldTypes, FieldTypesBuilder};

/// Fluent builder for a [`FormDecoder`].
///
/// Chain field registrations, then call [`build`](Self::build) to validate
/// them and obtain a reusable decoder.
///
/// # Examples
/// ```
/// use formlit::Forms;
///
/// let decoder = Forms::decoder()
///     .number("user.age")
///     .flag("user.active")
///     .list("tags")
///     .build()
///     .expect("valid field names");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormDecoderBuilder {
    pub(crate) types: FieldTypesBuilder,
    pub(crate) debug_enabled: bool,
}

impl FormDecoderBuilder {
    /// Start building a decoder with no registered fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable debug logging for decodes performed by the built decoder.
    ///
    /// When enabled, each decode logs its input size and outcome through the
    /// `log` facade.
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Validate the registered field names and produce a [`FormDecoder`].
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidRegistry` if any registered field name
    /// is empty or contains an empty dotted segment. Nothing is decoded
    /// until `build()` has succeeded.
    pub fn build(self) -> DecodeResult<FormDecoder> {
        Ok(FormDecoder {
            types: self.types.build()?,
            debug_enabled: self.debug_enabled,
        })
    }
}

/// A validated, reusable form decoder.
///
/// Cheap to clone and safe to share across threads; every decode call
/// builds and returns its own output object.
#[derive(Clone)]
pub struct FormDecoder {
    pub(crate) types: FieldTypes,
    pub(crate) debug_enabled: bool,
}

impl FormDecoder {
    /// A decoder with no registered fields: every value decodes as a
    /// trimmed string.
    #[must_use]
    pub fn untyped() -> Self {
        Self {
            types: FieldTypes::none(),
            debug_enabled: false,
        }
    }

    /// The validated coercion registry backing this decoder.
    #[must_use]
    pub fn types(&self) -> &FieldTypes {
        &self.types
    }
}

impl fmt::Debug for FormDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormDecoder")
            .field("types", &self.types)
            .field("debug_enabled", &self.debug_enabled)
            .finish()
    }
}
