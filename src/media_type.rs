//! The media type record and its read accessors.
//!
//! A [`MediaType`] describes one entry of the embedded catalog: its canonical
//! name, the file extensions conventionally associated with it, an optional
//! underlying format alias, and whether the type is registered with IANA.
//! Records are constructed only inside this crate; user code always works
//! with `'static` shared references handed out by the lookup functions.
//!
//! # Examples
//!
//! ```rust
//! let record = media_types::by_name("application/atom+xml").unwrap();
//! assert_eq!(record.name(), "application/atom+xml");
//! assert_eq!(record.format(), "text/xml");
//! assert_eq!(record.extensions(), ["atom", "xml"]);
//! assert!(record.is_registered());
//! ```

use core::fmt;

/// A single media type record from the embedded catalog.
///
/// All fields are `'static` string data compiled into the binary, so a
/// `MediaType` is `Copy` and cheap to pass around. Equality compares every
/// field, which in practice distinguishes records because canonical names
/// are unique in the catalog.
///
/// # Examples
///
/// ```rust
/// let records = media_types::by_extension("json");
/// for record in records {
///     println!("{} (registered: {})", record, record.is_registered());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaType {
    name: &'static str,
    format: &'static str,
    extensions: &'static [&'static str],
    registered: bool,
}

impl MediaType {
    pub(crate) const fn new(
        name: &'static str,
        format: &'static str,
        extensions: &'static [&'static str],
        registered: bool,
    ) -> Self {
        Self {
            name,
            format,
            extensions,
            registered,
        }
    }

    /// Returns the canonical media type name, such as `"text/plain"` or
    /// `"application/json"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let record = media_types::by_name("text/html").unwrap();
    /// assert_eq!(record.name(), "text/html");
    /// ```
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the underlying format of this media type, such as
    /// `"text/xml"` for `application/atom+xml`, or an empty string when the
    /// catalog records none.
    ///
    /// The value names another media type string; it is catalog data and is
    /// not guaranteed to resolve to an existing record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let record = media_types::by_name("application/atom+xml").unwrap();
    /// assert_eq!(record.format(), "text/xml");
    ///
    /// let record = media_types::by_name("application/json").unwrap();
    /// assert_eq!(record.format(), "");
    /// ```
    pub const fn format(&self) -> &'static str {
        self.format
    }

    /// Returns the file extensions associated with this media type, without
    /// leading dots and in catalog order. May be empty; the same extension
    /// may also appear on other records.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let record = media_types::by_name("image/gif").unwrap();
    /// assert_eq!(record.extensions(), ["gif"]);
    /// ```
    pub const fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    /// Returns `true` if this media type is registered with IANA.
    ///
    /// Unregistered records cover historically used types (`x-` prefixed and
    /// otherwise informal) that still circulate in the wild.
    ///
    /// # Examples
    ///
    /// ```rust
    /// assert!(media_types::by_name("application/json")
    ///     .unwrap()
    ///     .is_registered());
    /// assert!(!media_types::by_name("application/x-tar")
    ///     .unwrap()
    ///     .is_registered());
    /// ```
    pub const fn is_registered(&self) -> bool {
        self.registered
    }

    /// Parses the canonical name into a [`mime::Mime`].
    ///
    /// The catalog stores names as plain strings; this is the bridge into
    /// the `mime` ecosystem type for callers that need structured access to
    /// the type, subtype, or suffix. The parse error is propagated verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let record = media_types::by_name("application/json").unwrap();
    /// let mime = record.to_mime().unwrap();
    /// assert_eq!(mime.type_(), mime::APPLICATION);
    /// assert_eq!(mime.subtype(), mime::JSON);
    /// ```
    #[cfg(feature = "mime")]
    pub fn to_mime(&self) -> Result<mime::Mime, mime::FromStrError> {
        self.name.parse()
    }
}

/// Writes the canonical media type name.
///
/// # Examples
///
/// ```rust
/// let record = media_types::by_name("text/csv").unwrap();
/// assert_eq!(record.to_string(), "text/csv");
/// ```
impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MediaType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("MediaType", 4)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("format", self.format)?;
        state.serialize_field("extensions", self.extensions)?;
        state.serialize_field("registered", &self.registered)?;
        state.end()
    }
}
