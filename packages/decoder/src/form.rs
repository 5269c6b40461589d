//! Form data source abstraction
//!
//! `FormData` is the ordered pair sequence a decode call consumes. It mirrors
//! the web form-data shape: pairs iterate in submission order and the same
//! name may appear any number of times.

use crate::error::{DecodeError, DecodeResult};

/// An ordered sequence of (name, value) string pairs, as produced by a form
/// submission.
///
/// Pairs are kept in submission order; repeated names are preserved, not
/// merged. Merging (overwrite vs. list accumulation) is decided later by the
/// per-field coercion during decoding.
///
/// # Examples
/// ```
/// use formlit_decoder::FormData;
///
/// let mut form = FormData::new();
/// form.append("user.name", "Alice");
/// form.append("tags", "a");
/// form.append("tags", "b");
/// assert_eq!(form.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a (name, value) pair, keeping submission order.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Build a form from any ordered pair sequence.
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }

    /// Parse `application/x-www-form-urlencoded` text into a form.
    ///
    /// Percent escapes and `+`-as-space are decoded; pair order is the order
    /// they appear in the input.
    ///
    /// # Examples
    /// ```
    /// use formlit_decoder::FormData;
    ///
    /// let form = FormData::parse_urlencoded("user.name=Alice+Smith&tags=x%20y");
    /// assert_eq!(form.pairs().next(), Some(("user.name", "Alice Smith")));
    /// ```
    #[must_use]
    pub fn parse_urlencoded(input: &str) -> Self {
        Self {
            pairs: url::form_urlencoded::parse(input.as_bytes())
                .map(|(name, value)| (name.into_owned(), value.into_owned()))
                .collect(),
        }
    }

    /// Parse a raw `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidSource` if the bytes are not valid UTF-8.
    pub fn parse_bytes(input: &[u8]) -> DecodeResult<Self> {
        let text = std::str::from_utf8(input)
            .map_err(|e| DecodeError::InvalidSource(format!("body is not valid UTF-8: {e}")))?;
        Ok(Self::parse_urlencoded(text))
    }

    /// Iterate pairs in submission order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of pairs in the form.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the form holds no pairs at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<N: Into<String>, V: Into<String>> Extend<(N, V)> for FormData {
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        self.pairs
            .extend(iter.into_iter().map(|(n, v)| (n.into(), v.into())));
    }
}
