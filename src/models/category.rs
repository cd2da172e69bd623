//! Transaction categories
//!
//! Categories are plain strings on a transaction. New transactions must use
//! one of the fixed categories offered by the input form; stored records are
//! accepted with whatever category they carry.

/// The categories offered when recording a transaction, in display order
pub const CATEGORIES: [&str; 8] = [
    "Alimentação",
    "Transporte",
    "Moradia",
    "Salário",
    "Lazer",
    "Investimentos",
    "Saúde",
    "Outros",
];

/// Check whether a category belongs to the fixed set (exact, case-sensitive)
pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}

/// Find the canonical category for user input
///
/// Exact matches win. Otherwise a unique case-insensitive match is accepted so
/// that `moradia` on the command line resolves to `Moradia`.
pub fn resolve_category(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if let Some(exact) = CATEGORIES.iter().find(|c| **c == input) {
        return Some(exact);
    }

    let lowered = input.to_lowercase();
    let mut matches = CATEGORIES.iter().filter(|c| c.to_lowercase() == lowered);
    match (matches.next(), matches.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}
