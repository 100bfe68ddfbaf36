//! Shared string utilities for page titles and headings.

// =============================================================================
// String Utilities
// =============================================================================

/// Title-case every alphabetic run in a string.
///
/// The first letter of each run of letters is upper-cased and the remaining
/// letters of the run are lower-cased. Everything else (digits, `_`, spaces,
/// arrows) is copied through and starts a new run, so `helpers_v2x` becomes
/// `Helpers_V2X`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Number of leading space or tab characters.
#[inline]
pub fn indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}
