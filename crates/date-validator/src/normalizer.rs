//! Input normalization for date path segments

/// Canonical date layout, zero-padded
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Replace every whitespace character with a hyphen.
///
/// Callers sometimes separate the date parts with spaces (`2017 01 01`),
/// which arrive URL-decoded in the path.
pub fn normalize_separators(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}
