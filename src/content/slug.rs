// src/content/slug.rs
//! Anchor slug derivation for headings.
//!
//! One shared function computes every anchor id in the system — the
//! normalizer and the outline extractor both call it, so the two can
//! never drift apart.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches each maximal run of characters outside the anchor alphabet.
static NON_ANCHOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^a-z0-9]+").expect("anchor pattern is valid"));

/// Derives an anchor slug from heading text.
///
/// Lower-cases the text, then replaces each run of non-`[a-z0-9]`
/// characters with a single hyphen. Leading and trailing hyphens are
/// kept, not trimmed: anchors published under the historical ids must
/// keep resolving, so callers wanting a cleaner slug post-process
/// explicitly. Empty text yields the empty slug.
pub fn heading_anchor(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ANCHOR_RUN.replace_all(&lowered, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercases_and_hyphenates_runs() {
        assert_eq!(heading_anchor("Getting Started"), "getting-started");
        assert_eq!(heading_anchor("Rust & WebAssembly!"), "rust-webassembly-");
        assert_eq!(heading_anchor("  spaced   out  "), "-spaced-out-");
    }

    #[test]
    fn collapses_each_run_to_one_hyphen() {
        assert_eq!(heading_anchor("a -- b"), "a-b");
        assert_eq!(heading_anchor("v2.0.1"), "v2-0-1");
    }

    #[test]
    fn keeps_leading_and_trailing_hyphens() {
        assert_eq!(heading_anchor("!important"), "-important");
        assert_eq!(heading_anchor("done?"), "done-");
    }

    #[test]
    fn empty_text_yields_empty_slug() {
        assert_eq!(heading_anchor(""), "");
    }

    #[test]
    fn non_ascii_letters_become_hyphens() {
        assert_eq!(heading_anchor("café menu"), "caf-menu");
    }

    #[test]
    fn output_alphabet_is_anchor_safe() {
        for text in ["Mixed CASE 123", "§§weird§§", "tabs\tand\nnewlines"] {
            let slug = heading_anchor(text);
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug {:?} escaped the anchor alphabet",
                slug
            );
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(heading_anchor("Same Input"), heading_anchor("Same Input"));
    }
}
