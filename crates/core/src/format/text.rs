//! Small text helpers for cards and avatars.

use std::borrow::Cow;

/// Truncate to at most `max_len` characters, ellipsizing with `"..."`.
///
/// Input that already fits is returned borrowed and unchanged. Counting is
/// by character, not byte, so multi-byte input never splits mid-codepoint.
///
/// ```
/// use kwatt_core::truncate;
///
/// assert_eq!(truncate("Appartement meublé", 10), "Apparte...");
/// assert_eq!(truncate("Studio", 10), "Studio");
/// ```
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_len {
        return Cow::Borrowed(text);
    }
    let keep = max_len.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    Cow::Owned(out)
}

/// Uppercase initials for an avatar placeholder.
///
/// Takes the first character of each non-empty name, uppercased; `"?"` when
/// neither name is present.
///
/// ```
/// use kwatt_core::initials;
///
/// assert_eq!(initials(Some("Jean"), Some("Dupont")), "JD");
/// assert_eq!(initials(Some("Jean"), None), "J");
/// assert_eq!(initials(None, None), "?");
/// ```
#[must_use]
pub fn initials(first: Option<&str>, last: Option<&str>) -> String {
    let mut out = String::new();
    for name in [first, last] {
        if let Some(ch) = name.and_then(|s| s.trim().chars().next()) {
            out.extend(ch.to_uppercase());
        }
    }
    if out.is_empty() { "?".to_owned() } else { out }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_input_is_borrowed() {
        let text = "Studio à Bonapriso";
        assert!(matches!(truncate(text, 50), Cow::Borrowed(_)));
        assert_eq!(truncate(text, 50), text);
    }

    #[test]
    fn test_truncate_exact_fit_is_unchanged() {
        assert_eq!(truncate("abcdef", 6), "abcdef");
    }

    #[test]
    fn test_truncate_long_input() {
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        // 10 characters, 12 bytes; must not split the accented chars.
        assert_eq!(truncate("éééééééééé", 8), "ééééé...");
    }

    #[test]
    fn test_truncate_tiny_max_len() {
        assert_eq!(truncate("abcdef", 2), "...");
    }

    #[test]
    fn test_initials_both_names() {
        assert_eq!(initials(Some("Jean"), Some("Dupont")), "JD");
        assert_eq!(initials(Some("aminatou"), Some("bello")), "AB");
    }

    #[test]
    fn test_initials_single_name() {
        assert_eq!(initials(Some("Jean"), None), "J");
        assert_eq!(initials(None, Some("Dupont")), "D");
        assert_eq!(initials(Some("Jean"), Some("")), "J");
    }

    #[test]
    fn test_initials_missing_or_blank() {
        assert_eq!(initials(None, None), "?");
        assert_eq!(initials(Some(""), Some("")), "?");
        assert_eq!(initials(Some("   "), None), "?");
    }

    #[test]
    fn test_initials_uppercases_accents() {
        assert_eq!(initials(Some("émile"), Some("nkoulou")), "ÉN");
    }
}
