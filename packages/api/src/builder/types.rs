//! Field registration methods
//!
//! The chainable per-field typing surface of [`FormDecoderBuilder`]. Each
//! method records a coercion for a full dotted field name; names are
//! validated together at `build()` time.

use formlit_decoder::{BoxError, Coercion};
use serde_json::Value;

use crate::builder::core::FormDecoderBuilder;

impl FormDecoderBuilder {
    /// Decode this field as a number.
    ///
    /// A single decimal comma is accepted in place of a dot (`"3,14"`
    /// decodes as `3.14`). A value that still does not parse leaves the
    /// field absent rather than failing the decode.
    ///
    /// # Returns
    /// `Self` for method chaining
    ///
    /// # Examples
    /// ```
    /// use formlit::Forms;
    ///
    /// let decoder = Forms::decoder().number("user.age").build().expect("valid");
    /// let object = decoder.decode_urlencoded("user.age=42").expect("decode");
    /// assert_eq!(object["user"]["age"], 42);
    /// ```
    #[must_use]
    pub fn number(mut self, name: impl Into<String>) -> Self {
        self.types = self.types.number(name);
        self
    }

    /// Accumulate repeated submissions of this field into an array, in
    /// submission order.
    ///
    /// # Returns
    /// `Self` for method chaining
    ///
    /// # Examples
    /// ```
    /// use formlit::Forms;
    /// use serde_json::json;
    ///
    /// let decoder = Forms::decoder().list("tags").build().expect("valid");
    /// let object = decoder.decode_urlencoded("tags=x&tags=y").expect("decode");
    /// assert_eq!(object["tags"], json!(["x", "y"]));
    /// ```
    #[must_use]
    pub fn list(mut self, name: impl Into<String>) -> Self {
        self.types = self.types.list(name);
        self
    }

    /// Decode this field as a strict boolean.
    ///
    /// Only the literals `"true"` and `"false"` are accepted; anything else
    /// fails the decode with `DecodeError::InvalidBoolean`.
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.types = self.types.flag(name);
        self
    }

    /// Decode this field with a caller-supplied function.
    ///
    /// The function receives the trimmed raw value and its result is stored
    /// verbatim; errors it returns abort the decode unmodified.
    ///
    /// # Returns
    /// `Self` for method chaining
    ///
    /// # Examples
    /// ```
    /// use formlit::Forms;
    /// use serde_json::Value;
    ///
    /// let decoder = Forms::decoder()
    ///     .custom("slug", |raw| Ok(Value::String(raw.to_lowercase())))
    ///     .build()
    ///     .expect("valid");
    /// let object = decoder.decode_urlencoded("slug=HELLO").expect("decode");
    /// assert_eq!(object["slug"], "hello");
    /// ```
    #[must_use]
    pub fn custom<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.types = self.types.custom(name, f);
        self
    }

    /// Register an explicit [`Coercion`] for a field.
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn coerce(mut self, name: impl Into<String>, coercion: Coercion) -> Self {
        self.types = self.types.coerce(name, coercion);
        self
    }
}
