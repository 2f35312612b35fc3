//! Options for sequence-typed extraction.

/// Configuration for sequence accessors: the segment delimiter and an
/// optional default sequence used when the payload is empty.
///
/// At most one default sequence applies per call; the delimiter defaults to
/// `","`.
///
/// # Examples
///
/// ```
/// use argview_core::{SliceOptions, Value};
///
/// let slice = Value::new("E-F-G-H")
///     .string_slice(SliceOptions::new().with_delimiter("-"))
///     .unwrap();
/// assert_eq!(slice, vec!["E", "F", "G", "H"]);
///
/// let slice = Value::new("")
///     .string_slice(SliceOptions::new().with_default(vec!["Z".into(), "Y".into()]))
///     .unwrap();
/// assert_eq!(slice, vec!["Z", "Y"]);
/// ```
#[derive(Debug, Clone)]
pub struct SliceOptions<T> {
    pub(crate) delimiter: String,
    pub(crate) default: Option<Vec<T>>,
}

impl<T> Default for SliceOptions<T> {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            default: None,
        }
    }
}

impl<T> SliceOptions<T> {
    /// Creates options with the default delimiter (`","`) and no default
    /// sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the segment delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets the sequence returned verbatim when the payload is empty.
    pub fn with_default(mut self, default: Vec<T>) -> Self {
        self.default = Some(default);
        self
    }
}
