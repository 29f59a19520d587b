//! Codec for list columns stored as a single delimiter-joined string.
//!
//! Image paths of a lost-and-found record are persisted as one `TEXT` column,
//! e.g. `"uploads/a.png|uploads/b.png"`, and exposed by the API as a JSON array.

/// Separator between items of a joined list column.
pub const DELIMITER: char = '|';

/// Splits a joined column into its items, preserving order.
///
/// Segments are trimmed and empty ones dropped, so an empty column decodes to an
/// empty list and stray separators (`"a.png||b.png"`) do not yield blank items.
pub fn decode(joined: &str) -> Vec<String> {
    joined
        .split(DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
