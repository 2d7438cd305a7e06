//! Queries over the embedded catalog.
//!
//! All lookups are pure linear scans over the static table: nothing is
//! cached, nothing is mutated, and results always come back in catalog
//! order. Matching is exact and case-sensitive; callers that want
//! normalization (lowercasing, stripping a leading dot) do it themselves
//! before querying.
//!
//! # Examples
//!
//! ```rust
//! // A single extension can belong to several media types.
//! let names: Vec<_> = media_types::by_extension("xml")
//!     .iter()
//!     .map(|record| record.name())
//!     .collect();
//! assert!(names.contains(&"application/xml"));
//! assert!(names.contains(&"text/xml"));
//! ```

use alloc::vec::Vec;

use crate::db::MEDIA_TYPES;
use crate::MediaType;

/// Returns every media type associated with the given file extension.
///
/// The extension is compared by exact case-sensitive equality against each
/// record's extension list, with no normalization: `"GIF"` and `".gif"` do
/// not match `"gif"`. Matching records are returned in catalog order. Any
/// string is a legal query; an unknown or empty extension yields an empty
/// vector.
///
/// # Examples
///
/// ```rust
/// let records = media_types::by_extension("gif");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].name(), "image/gif");
///
/// assert!(media_types::by_extension("").is_empty());
/// assert!(media_types::by_extension("no-such-extension").is_empty());
/// ```
pub fn by_extension(extension: &str) -> Vec<&'static MediaType> {
    MEDIA_TYPES
        .iter()
        .filter(|record| record.extensions().iter().any(|ext| *ext == extension))
        .collect()
}

/// Returns the first media type with the given canonical name, or `None`.
///
/// Comparison is exact and case-sensitive. Canonical names are unique in
/// the catalog, so "first" is the only match in practice.
///
/// # Examples
///
/// ```rust
/// let record = media_types::by_name("application/json").unwrap();
/// assert_eq!(record.extensions(), ["json"]);
///
/// assert!(media_types::by_name("application/no-such-type").is_none());
/// ```
pub fn by_name(name: &str) -> Option<&'static MediaType> {
    MEDIA_TYPES.iter().find(|record| record.name() == name)
}

/// Returns the whole catalog in declaration order.
///
/// Useful for iterating every known media type, e.g. to build shell
/// completions or reverse mappings.
///
/// # Examples
///
/// ```rust
/// let catalog = media_types::all();
/// assert!(!catalog.is_empty());
/// assert!(catalog.iter().any(|record| record.name() == "text/plain"));
/// ```
pub fn all() -> &'static [MediaType] {
    MEDIA_TYPES
}
