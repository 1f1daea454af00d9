//! Player name canonicalization used for matching typed queries.

/// Generational suffixes that never distinguish one player from another.
const NAME_SUFFIXES: [&str; 6] = ["jr", "sr", "ii", "iii", "iv", "v"];

/// Canonical form of a player name.
///
/// Keeps ASCII letters, apostrophes and whitespace, lowercases, drops
/// generational suffixes and collapses whitespace to single spaces.
/// Garbage in yields an empty string.
///
/// ```rust
/// use draft_helper::core::names::normalize;
///
/// assert_eq!(normalize("Kenneth Walker III"), "kenneth walker");
/// assert_eq!(normalize("Ja'Marr  Chase"), "ja'marr chase");
/// assert_eq!(normalize("D.J. Moore"), "dj moore");
/// ```
pub fn normalize(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '\'' || c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    kept.split_whitespace()
        .filter(|token| !NAME_SUFFIXES.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical last name: the final token of [`normalize`], or empty.
pub fn last_token(raw: &str) -> String {
    normalize(raw)
        .split(' ')
        .last()
        .unwrap_or_default()
        .to_string()
}

/// Letters only, lowercased. This is what a bare surname query is compared with.
pub fn letters_only(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
