//! Stable diagnostic codes.
//!
//! Codes are short snake_case discriminators. They appear in log fields, CI annotations and the
//! JSON output, so treat them as a public contract.

// Files
pub const CODE_UNREADABLE_FILE: &str = "unreadable_file";
pub const CODE_MALFORMED_XML: &str = "malformed_xml";

// Entries
pub const CODE_MALFORMED_REFERENCE: &str = "malformed_reference";
pub const CODE_MALFORMED_VERSION: &str = "malformed_version";
pub const CODE_DUPLICATE_VERSION: &str = "duplicate_version";

// Adapter selection
pub const CODE_MISSING_FORMAT_MARKER: &str = "missing_format_marker";
pub const CODE_UNSUPPORTED_FORMAT_MARKER: &str = "unsupported_format_marker";

/// Every code above, in declaration order.
pub const ALL_CODES: &[&str] = &[
    CODE_UNREADABLE_FILE,
    CODE_MALFORMED_XML,
    CODE_MALFORMED_REFERENCE,
    CODE_MALFORMED_VERSION,
    CODE_DUPLICATE_VERSION,
    CODE_MISSING_FORMAT_MARKER,
    CODE_UNSUPPORTED_FORMAT_MARKER,
];
