use media_types::{all, by_extension, by_name};

#[test]
fn test_by_extension_no_match() {
    // The empty string is a legal query, it just matches nothing.
    assert!(by_extension("").is_empty());
    assert!(by_extension("unknown").is_empty());

    // Matching is exact: no lowercasing, no leading-dot stripping.
    assert!(by_extension("GIF").is_empty());
    assert!(by_extension(".gif").is_empty());
    assert!(by_extension("gif ").is_empty());
}

#[test]
fn test_by_extension_single_match() {
    let records = by_extension("gif");
    assert_eq!(records.len(), 1);

    let record = records[0];
    assert_eq!(record.name(), "image/gif");
    assert_eq!(record.format(), "");
    assert_eq!(record.extensions(), ["gif"]);
    // The dataset carries image/gif as an unregistered type.
    assert!(!record.is_registered());
}

#[test]
fn test_by_extension_multiple_matches_in_catalog_order() {
    let records = by_extension("xml");
    let names: Vec<_> = records.iter().map(|record| record.name()).collect();
    assert_eq!(
        names,
        [
            "application/atom+xml",
            "application/rss+xml",
            "application/xml",
            "text/xml",
        ],
    );

    // Another ambiguous extension, claimed by two image types.
    let names: Vec<_> = by_extension("jpg")
        .iter()
        .map(|record| record.name())
        .collect();
    assert_eq!(names, ["image/jpeg", "image/pjpeg"]);
}

#[test]
fn test_by_extension_is_pure() {
    let first = by_extension("xml");
    let second = by_extension("xml");
    assert_eq!(first, second);

    // Results are shared references into the static table, so repeated
    // lookups observe identical records.
    for (a, b) in first.iter().zip(second.iter()) {
        assert!(core::ptr::eq(*a, *b));
    }
}

#[test]
fn test_record_accessors() {
    let record = by_name("application/atom+xml").unwrap();
    assert_eq!(record.name(), "application/atom+xml");
    assert_eq!(record.to_string(), "application/atom+xml");
    assert_eq!(record.format(), "text/xml");
    assert_eq!(record.extensions(), ["atom", "xml"]);
    assert!(record.is_registered());
}

#[test]
fn test_by_name() {
    let record = by_name("application/json").unwrap();
    assert_eq!(record.extensions(), ["json"]);
    assert!(record.is_registered());

    assert!(by_name("application/no-such-type").is_none());
    // Names are matched case-sensitively too.
    assert!(by_name("Application/Json").is_none());
}

#[test]
fn test_catalog_shape() {
    let catalog = all();
    assert_eq!(catalog.len(), 2670);

    // Catalog order is byte-wise sorted by canonical name.
    assert_eq!(catalog[0].name(), "application/1d-interleaved-parityfec");
    assert_eq!(catalog[catalog.len() - 1].name(), "xgl/movie");
    assert!(catalog
        .windows(2)
        .all(|pair| pair[0].name() < pair[1].name()));

    // Records without extensions are expected, not an anomaly.
    assert!(catalog.iter().any(|record| record.extensions().is_empty()));
}

#[test]
fn test_extension_lists_follow_the_record() {
    // An extension appearing on one record does not leak onto others that
    // share a prefix of it.
    for record in by_extension("html") {
        assert!(record.extensions().contains(&"html"));
    }
    for record in by_extension("htm") {
        assert!(record.extensions().contains(&"htm"));
    }
}

#[cfg(feature = "mime")]
#[test]
fn test_mime_conversion() {
    let record = by_name("application/json").unwrap();
    let mime = record.to_mime().unwrap();
    assert_eq!(mime.type_(), mime::APPLICATION);
    assert_eq!(mime.subtype(), mime::JSON);

    let record = by_name("application/atom+xml").unwrap();
    let mime = record.to_mime().unwrap();
    assert_eq!(mime.suffix(), Some(mime::XML));
}

#[cfg(feature = "serde")]
#[test]
fn test_serialize_record() {
    let record = by_name("application/atom+xml").unwrap();
    let value = serde_json::to_value(record).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "application/atom+xml",
            "format": "text/xml",
            "extensions": ["atom", "xml"],
            "registered": true,
        }),
    );
}
