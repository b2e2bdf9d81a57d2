//! `Cookie` header parsing.

/// Returns the value of cookie `name` from a `Cookie` header value.
///
/// Handles multiple cookies by splitting on semicolons and ignores
/// malformed pairs.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|cookie| {
        let mut parts = cookie.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(key), Some(value)) if key == name => Some(value),
            _ => None,
        }
    })
}

/// Returns the `Cookie` header value with cookie `name` removed.
///
/// Returns `None` when nothing is left.
pub fn without_cookie(header: &str, name: &str) -> Option<String> {
    let kept: Vec<&str> = header
        .split(';')
        .map(str::trim)
        .filter(|cookie| !cookie.is_empty())
        .filter(|cookie| cookie.split('=').next() != Some(name))
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_cookie_among_many() {
        let header = "theme=dark; editor_session=abc; session=xyz";

        assert_eq!(find_cookie(header, "editor_session"), Some("abc"));
        assert_eq!(find_cookie(header, "session"), Some("xyz"));
        assert_eq!(find_cookie(header, "missing"), None);
    }

    #[test]
    fn test_find_cookie_keeps_equals_in_value() {
        assert_eq!(find_cookie("token=a=b", "token"), Some("a=b"));
    }

    #[test]
    fn test_without_cookie_strips_only_named() {
        let header = "session=xyz; editor_session=abc; theme=dark";

        assert_eq!(
            without_cookie(header, "editor_session").as_deref(),
            Some("session=xyz; theme=dark")
        );
    }

    #[test]
    fn test_without_cookie_empty_result() {
        assert_eq!(without_cookie("editor_session=abc", "editor_session"), None);
        assert_eq!(without_cookie("", "editor_session"), None);
    }
}
