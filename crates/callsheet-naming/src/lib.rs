//! Name and title key helpers for the callsheet entity registry.
//!
//! Every cross-entity relationship in the registry is a name-based join: a
//! film's director, a screening's assigned staffer, a photo shoot's subjects
//! are all free-text strings matched against entity names at read time. This
//! crate provides the one canonical folding those joins go through. It has no
//! dependencies and can be used by any other callsheet crate.

// ============================================================================
// Key Folding
// ============================================================================

/// Fold a human-entered name or title into its canonical join key.
///
/// Keys are compared for exact equality after trimming surrounding whitespace
/// and lowercasing. Interior whitespace and punctuation are preserved: the
/// registry joins on exact (case-insensitive) matches, not fuzzy ones.
///
/// # Examples
/// ```
/// use callsheet_naming::name_key;
///
/// assert_eq!(name_key("Sarah Johnson"), "sarah johnson");
/// assert_eq!(name_key("  All We Imagine as Light "), "all we imagine as light");
/// assert_eq!(name_key("Almodóvar"), "almodóvar");
/// ```
pub fn name_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether two free-text names or titles resolve to the same entity key.
///
/// # Examples
/// ```
/// use callsheet_naming::names_match;
///
/// assert!(names_match("PAYAL KAPADIA", "Payal Kapadia"));
/// assert!(names_match(" Rita", "rita"));
/// assert!(!names_match("Rita", "Rital"));
/// ```
pub fn names_match(a: &str, b: &str) -> bool {
    name_key(a) == name_key(b)
}

// ============================================================================
// Free-Text List Fields
// ============================================================================

/// Split a comma-separated free-text people field into individual names.
///
/// Empty segments (double commas, trailing commas) are dropped; segments are
/// trimmed but otherwise left as typed, so the caller can still render the
/// original spelling while joining on the folded key.
///
/// # Examples
/// ```
/// use callsheet_naming::split_name_list;
///
/// assert_eq!(
///     split_name_list("Paz Vega, Sarah Johnson,  Mark Chen"),
///     vec!["Paz Vega", "Sarah Johnson", "Mark Chen"]
/// );
/// assert_eq!(split_name_list(""), Vec::<String>::new());
/// assert_eq!(split_name_list("Solo Act,"), vec!["Solo Act"]);
/// ```
pub fn split_name_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a folded key appears in a comma-separated free-text people field.
///
/// # Examples
/// ```
/// use callsheet_naming::list_contains;
///
/// assert!(list_contains("Paz Vega, Sarah Johnson", "sarah johnson"));
/// assert!(!list_contains("Paz Vega, Sarah Johnson", "Sarah"));
/// ```
pub fn list_contains(raw_list: &str, name: &str) -> bool {
    split_name_list(raw_list).iter().any(|n| names_match(n, name))
}
