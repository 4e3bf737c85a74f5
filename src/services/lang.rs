//! Language preference resolution

/// Pick the locale for a request: query parameter, then cookie, then `default`.
///
/// Blank values count as absent at both levels.
pub fn resolve_lang(query: Option<&str>, cookie: Option<&str>, default: &str) -> String {
    query
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .or_else(|| cookie.map(str::trim).filter(|lang| !lang.is_empty()))
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_query_or_cookie() {
        assert_eq!(resolve_lang(None, None, "en"), "en");
    }

    #[test]
    fn test_cookie_used_without_query() {
        assert_eq!(resolve_lang(None, Some("fr"), "en"), "fr");
    }

    #[test]
    fn test_query_overrides_cookie() {
        assert_eq!(resolve_lang(Some("de"), Some("fr"), "en"), "de");
        assert_eq!(resolve_lang(Some("de"), None, "en"), "de");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        assert_eq!(resolve_lang(Some(""), Some("fr"), "en"), "fr");
        assert_eq!(resolve_lang(Some("  "), Some(""), "en"), "en");
    }
}
