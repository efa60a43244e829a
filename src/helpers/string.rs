//! String matching helpers shared by the explorer filters.

/// Case-insensitive substring test
///
/// `needle_lower` must already be lowercased; callers lowercase the search
/// term once per filter pass instead of once per row.
pub fn contains_lowercase(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Token count when splitting on every whitespace or hyphen character
///
/// Adjacent separators produce empty tokens that still count, so
/// `"Health - Tech"` has four tokens.
pub fn separator_token_count(s: &str) -> usize {
    s.split(|c: char| c.is_whitespace() || c == '-').count()
}

/// Length in UTF-16 code units, matching browser string length
///
/// Characters outside the Basic Multilingual Plane count twice.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
