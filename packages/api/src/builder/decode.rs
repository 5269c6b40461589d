//! Terminal decode methods
//!
//! The methods that consume a form source and produce the nested output
//! object, plus serde integration for decoding straight into typed structs.

use formlit_decoder::{decode, DecodeError, DecodeResult, FormData};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::builder::core::FormDecoder;

impl FormDecoder {
    /// Decode a [`FormData`] into a nested object.
    ///
    /// # Errors
    ///
    /// See [`formlit_decoder::decode`] for the failure cases; lenient
    /// behaviors (blank values, unparseable numeric input) never fail.
    pub fn decode(&self, form: &FormData) -> DecodeResult<Value> {
        if self.debug_enabled {
            log::debug!("Form decoder: decoding {} pairs", form.len());
        }

        let result = decode(form, &self.types);

        if self.debug_enabled {
            match &result {
                Ok(object) => log::debug!(
                    "Form decoder: decoded {} top-level fields",
                    object.as_object().map_or(0, |o| o.len())
                ),
                Err(error) => log::debug!("Form decoder: decode failed: {error}"),
            }
        }

        result
    }

    /// Decode any ordered pair sequence.
    ///
    /// # Errors
    ///
    /// Same failure cases as [`decode`](Self::decode).
    pub fn decode_pairs<I, N, V>(&self, pairs: I) -> DecodeResult<Value>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        self.decode(&FormData::from_pairs(pairs))
    }

    /// Parse `application/x-www-form-urlencoded` text and decode it.
    ///
    /// # Errors
    ///
    /// Same failure cases as [`decode`](Self::decode).
    pub fn decode_urlencoded(&self, input: &str) -> DecodeResult<Value> {
        self.decode(&FormData::parse_urlencoded(input))
    }

    /// Parse a raw URL-encoded body and decode it.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidSource` if the bytes are not valid
    /// UTF-8, plus the failure cases of [`decode`](Self::decode).
    pub fn decode_bytes(&self, input: &[u8]) -> DecodeResult<Value> {
        self.decode(&FormData::parse_bytes(input)?)
    }

    /// Decode a form straight into a deserializable type.
    ///
    /// The nested object is built first, then handed to serde; coercions
    /// registered on this decoder decide the intermediate value types, so a
    /// numeric field can land in an `f64` struct field and a list field in
    /// a `Vec<String>`.
    ///
    /// # Errors
    ///
    /// The failure cases of [`decode`](Self::decode), plus
    /// `DecodeError::InvalidSource` when the built object does not match
    /// `T`'s shape.
    ///
    /// # Examples
    /// ```
    /// use formlit::Forms;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Signup {
    ///     name: String,
    ///     age: f64,
    /// }
    ///
    /// let decoder = Forms::decoder().number("age").build().expect("valid");
    /// let form = formlit::FormData::parse_urlencoded("name=Alice&age=39");
    /// let signup: Signup = decoder.decode_as(&form).expect("decode");
    /// assert_eq!(signup.name, "Alice");
    /// ```
    pub fn decode_as<T: DeserializeOwned>(&self, form: &FormData) -> DecodeResult<T> {
        let object = self.decode(form)?;
        serde_json::from_value(object)
            .map_err(|e| DecodeError::InvalidSource(format!("decoded object does not fit target type: {e}")))
    }
}
