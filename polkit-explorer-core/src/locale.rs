//! Locale-fallback resolution of action descriptions.
//!
//! The matching rule is exact-tag only: `en-US` never falls back to `en`
//! or `en-GB`. When no tagged candidate matches, the untagged
//! `<description>` wins over the legacy `<_description>`.

use crate::document::DescriptionCandidate;
use crate::NO_DESCRIPTION;

/// Pick the description text for `locale` from an action's candidates.
///
/// Absence of a description is expected and common, so this never fails:
/// a missing or whitespace-only match yields the sentinel. The returned
/// text is trimmed of leading and trailing whitespace.
pub fn resolve(candidates: &[DescriptionCandidate], locale: &str) -> String {
    let chosen = candidates
        .iter()
        .find(|c| !c.legacy && c.lang.as_deref() == Some(locale))
        .or_else(|| candidates.iter().find(|c| !c.legacy && c.lang.is_none()))
        .or_else(|| candidates.iter().find(|c| c.legacy));

    match chosen {
        Some(c) => {
            let text = c.text.trim();
            if text.is_empty() {
                NO_DESCRIPTION.to_string()
            } else {
                text.to_string()
            }
        }
        None => NO_DESCRIPTION.to_string(),
    }
}

/// BCP-47-like tag for the host locale, derived from the usual POSIX
/// environment variables in precedence order.
///
/// `de_DE.UTF-8` becomes `de-DE`; `C`, `POSIX`, and unset variables are
/// skipped. Falls back to `en-US` when nothing usable is set.
pub fn system_locale() -> String {
    for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(raw) = std::env::var(var) {
            if let Some(tag) = normalize_tag(&raw) {
                return tag;
            }
        }
    }
    "en-US".to_string()
}

/// Strip encoding/modifier suffixes and swap `_` for `-`.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let base = raw.split(['.', '@']).next().unwrap_or("");
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(lang: &str, text: &str) -> DescriptionCandidate {
        DescriptionCandidate {
            lang: Some(lang.to_string()),
            legacy: false,
            text: text.to_string(),
        }
    }

    fn untagged(text: &str) -> DescriptionCandidate {
        DescriptionCandidate {
            lang: None,
            legacy: false,
            text: text.to_string(),
        }
    }

    fn legacy(text: &str) -> DescriptionCandidate {
        DescriptionCandidate {
            lang: None,
            legacy: true,
            text: text.to_string(),
        }
    }

    /// Exact locale tag wins; a non-matching locale falls back to the
    /// untagged description.
    #[test]
    fn exact_match_then_untagged_fallback() {
        let candidates = vec![tagged("en-US", "English text"), untagged("Default text")];
        assert_eq!(resolve(&candidates, "en-US"), "English text");
        assert_eq!(resolve(&candidates, "fr-FR"), "Default text");
    }

    /// No prefix matching across region variants: `en-GB` is not `en-US`.
    #[test]
    fn no_prefix_matching() {
        let candidates = vec![tagged("en-US", "US text")];
        assert_eq!(resolve(&candidates, "en-GB"), NO_DESCRIPTION);
        assert_eq!(resolve(&candidates, "en"), NO_DESCRIPTION);
    }

    /// Untagged `<description>` is preferred over `<_description>`, even
    /// when the legacy element comes first in the document.
    #[test]
    fn untagged_preferred_over_legacy() {
        let candidates = vec![legacy("Legacy text"), untagged("Modern text")];
        assert_eq!(resolve(&candidates, "xx-XX"), "Modern text");

        let only_legacy = vec![legacy("Legacy text")];
        assert_eq!(resolve(&only_legacy, "xx-XX"), "Legacy text");
    }

    /// No candidates at all resolves to the sentinel.
    #[test]
    fn empty_candidates_yield_sentinel() {
        assert_eq!(resolve(&[], "en-US"), NO_DESCRIPTION);
    }

    /// Whitespace-only text counts as absent; surrounding whitespace is
    /// trimmed, embedded whitespace preserved.
    #[test]
    fn trims_and_treats_blank_as_missing() {
        assert_eq!(resolve(&[untagged("   \n\t ")], "en-US"), NO_DESCRIPTION);
        assert_eq!(
            resolve(&[untagged("  two\nlines  ")], "en-US"),
            "two\nlines"
        );
    }

    /// First match in document order wins when tags repeat.
    #[test]
    fn first_exact_match_wins() {
        let candidates = vec![tagged("de-DE", "erste"), tagged("de-DE", "zweite")];
        assert_eq!(resolve(&candidates, "de-DE"), "erste");
    }

    /// POSIX locale strings normalize to BCP-47-like tags.
    #[test]
    fn normalizes_posix_locale_strings() {
        assert_eq!(normalize_tag("de_DE.UTF-8").as_deref(), Some("de-DE"));
        assert_eq!(normalize_tag("en_US").as_deref(), Some("en-US"));
        assert_eq!(normalize_tag("ca_ES@valencia").as_deref(), Some("ca-ES"));
        assert_eq!(normalize_tag("C"), None);
        assert_eq!(normalize_tag("POSIX"), None);
        assert_eq!(normalize_tag(""), None);
    }
}
