//! Term normalization for storage and comparison
//!
//! Terms are stored raw alongside their folded form; all matching happens
//! on the folded form. The fold must stay stable across runs (no locale
//! state), so stored `clean_term` values remain comparable between sessions.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a raw term into its comparable form
///
/// Lowercases, then decomposes (NFD) and drops combining marks, so accented
/// and differently-cased spellings compare equal. Pure and total: defined
/// for every string, including the empty one.
///
/// # Example
///
/// ```
/// use termdex_engine::normalizer::normalize;
///
/// assert_eq!(normalize("Café"), "cafe");
/// assert_eq!(normalize("NAÏVE"), "naive");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
