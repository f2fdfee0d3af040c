//! Acceptance rules for URLs that may be shortened.
//!
//! The stored string is never rewritten: fingerprints are byte-exact, so a
//! URL is either accepted as given or rejected.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetUrlError {
    #[error("URL contains a control character at byte {0}")]
    ControlCharacter(usize),

    #[error("URL is not absolute: {0}")]
    Malformed(#[from] url::ParseError),

    #[error("unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
}

/// Checks that `raw` is an absolute http(s) URL usable as a `Location` header.
///
/// Control characters are rejected up front because [`Url::parse`] silently
/// strips tabs and newlines, which would let an unrepresentable header
/// value through.
pub fn check_target_url(raw: &str) -> Result<Url, TargetUrlError> {
    if let Some(pos) = raw.bytes().position(|b| b.is_ascii_control()) {
        return Err(TargetUrlError::ControlCharacter(pos));
    }

    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(TargetUrlError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(check_target_url("https://www.baidu.com").is_ok());
        assert!(check_target_url("http://example.com/a?b=c#d").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        for raw in ["javascript:alert(1)", "ftp://example.com/x", "mailto:a@b.com"] {
            assert!(
                matches!(
                    check_target_url(raw),
                    Err(TargetUrlError::UnsupportedScheme(_))
                ),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_control_characters() {
        assert_eq!(
            check_target_url("https://example.com/a\nb"),
            Err(TargetUrlError::ControlCharacter(21))
        );
        assert!(check_target_url("https://example.com/\ta").is_err());
        assert!(check_target_url("https://example.com/\u{7f}").is_err());
    }

    #[test]
    fn test_rejects_relative_and_garbage() {
        assert!(matches!(
            check_target_url("not-a-url"),
            Err(TargetUrlError::Malformed(_))
        ));
        assert!(matches!(
            check_target_url("/relative/path"),
            Err(TargetUrlError::Malformed(_))
        ));
    }
}
