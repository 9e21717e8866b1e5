//! Locale selection for localized fields

use std::sync::Arc;

/// Which language variants a read should return
///
/// There is no process-wide current locale: callers pass a selector
/// explicitly, usually [`CodecConfig::default_selector`](crate::CodecConfig::default_selector).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LocaleSelector {
    /// Only literals tagged with this language (ASCII case-insensitive)
    Locale(Arc<str>),
    /// Every language variant, returned as a sequence
    All,
}

impl LocaleSelector {
    /// Select a single language
    pub fn locale(tag: impl AsRef<str>) -> Self {
        LocaleSelector::Locale(Arc::from(tag.as_ref()))
    }

    /// Select every language
    pub fn all() -> Self {
        LocaleSelector::All
    }

    /// Parse a textual selector, mapping `all_token` to [`LocaleSelector::All`]
    pub fn parse(s: &str, all_token: &str) -> Self {
        let s = s.trim();
        if s == all_token {
            LocaleSelector::All
        } else {
            LocaleSelector::locale(s)
        }
    }

    /// Check for the "all locales" sentinel
    pub fn is_all(&self) -> bool {
        matches!(self, LocaleSelector::All)
    }

    /// The selected language, unless this is the sentinel
    pub fn as_locale(&self) -> Option<&str> {
        match self {
            LocaleSelector::Locale(tag) => Some(tag),
            LocaleSelector::All => None,
        }
    }

    /// Textual form, the inverse of [`parse`](Self::parse) for `all_token`
    pub fn to_token<'a>(&'a self, all_token: &'a str) -> &'a str {
        match self {
            LocaleSelector::Locale(tag) => tag,
            LocaleSelector::All => all_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(LocaleSelector::parse("*", "*"), LocaleSelector::All);
        assert_eq!(LocaleSelector::parse(" fr ", "*"), LocaleSelector::locale("fr"));
        assert_eq!(LocaleSelector::parse("all", "all"), LocaleSelector::All);
        assert_eq!(LocaleSelector::parse("*", "all"), LocaleSelector::locale("*"));
    }

    #[test]
    fn test_accessors() {
        assert!(LocaleSelector::all().is_all());
        assert_eq!(LocaleSelector::all().as_locale(), None);
        assert_eq!(LocaleSelector::locale("en").as_locale(), Some("en"));
    }

    #[test]
    fn test_to_token_uses_configured_sentinel() {
        assert_eq!(LocaleSelector::locale("en").to_token("all"), "en");
        assert_eq!(LocaleSelector::all().to_token("all"), "all");
        assert_eq!(LocaleSelector::all().to_token("*"), "*");

        let parsed = LocaleSelector::parse("every", "every");
        assert_eq!(LocaleSelector::parse(parsed.to_token("every"), "every"), parsed);
    }
}
