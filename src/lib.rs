#![deny(unsafe_code)]
#![no_std]
#![warn(missing_docs, missing_debug_implementations)]
//! A compiled database of media types for Rust.
//!
//! This crate embeds a table of media type (MIME type) records mirroring the
//! IANA media types registry, together with the unregistered types that still
//! circulate in practice, and exposes pure lookup functions over it. The
//! table is compiled into the binary as `'static` data, so lookups never
//! touch the filesystem or the network and are trivially safe to share
//! across threads. It's designed to be no-std compatible with optional
//! standard library features.
//!
//! # Features
//!
//! - **Extension lookup** - Find every media type associated with a file extension
//! - **Name lookup** - Fetch a record by its canonical media type name
//! - **Full catalog access** - Iterate all records, e.g. to build reverse mappings
//! - **Registration data** - Each record carries its IANA registration status
//! - **Format aliases** - XML- and JSON-based types name their underlying format
//!
//! # Optional Features
//!
//! - `mime` - Conversion of records into the `mime` crate's `Mime` type (enabled by default)
//! - `serde` - `Serialize` implementation for records
//! - `std` - Enable standard library support (enabled by default)
//!
//! # Examples
//!
//! ## Lookup by extension
//!
//! ```rust
//! let records = media_types::by_extension("gif");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].name(), "image/gif");
//!
//! // Unknown extensions simply match nothing.
//! assert!(media_types::by_extension("unknown").is_empty());
//! ```
//!
//! ## Ambiguous extensions
//!
//! An extension may be claimed by several media types; all of them are
//! returned, in catalog order:
//!
//! ```rust
//! let names: Vec<_> = media_types::by_extension("xml")
//!     .iter()
//!     .map(|record| record.name())
//!     .collect();
//! assert_eq!(
//!     names,
//!     ["application/atom+xml", "application/rss+xml", "application/xml", "text/xml"],
//! );
//! ```
//!
//! ## Record attributes
//!
//! ```rust
//! let record = media_types::by_name("application/atom+xml").unwrap();
//! assert_eq!(record.to_string(), "application/atom+xml");
//! assert_eq!(record.format(), "text/xml");
//! assert_eq!(record.extensions(), ["atom", "xml"]);
//! assert!(record.is_registered());
//! ```
extern crate alloc;

mod db;

mod media_type;
pub use media_type::MediaType;

mod lookup;
pub use lookup::{all, by_extension, by_name};

#[cfg(feature = "mime")]
pub use mime;
