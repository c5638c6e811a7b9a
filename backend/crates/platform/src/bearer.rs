//! Authorization Header Parsing
//!
//! Extracts the bearer token from an `Authorization: Bearer <token>`
//! header value. The header must split into exactly two whitespace-
//! separated parts with the first literally `Bearer`; anything else is a
//! [`BearerError::Malformed`] value, never a panic.

use http::HeaderMap;
use http::header::AUTHORIZATION;
use thiserror::Error;

/// Authorization header failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    /// No `Authorization` header on the request
    #[error("missing authorization header")]
    Missing,
    /// Header present but not of the form `Bearer <token>`
    #[error("malformed authorization header")]
    Malformed,
}

/// Extract the bearer token from the request headers.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers.get(AUTHORIZATION).ok_or(BearerError::Missing)?;

    let value = value.to_str().map_err(|_| BearerError::Malformed)?;

    parse_bearer(value)
}

/// Parse a raw `Authorization` header value.
pub fn parse_bearer(value: &str) -> Result<&str, BearerError> {
    let mut parts = value.split_ascii_whitespace();

    let scheme = parts.next().ok_or(BearerError::Malformed)?;
    let token = parts.next().ok_or(BearerError::Malformed)?;

    // Exactly two parts, scheme literally `Bearer`
    if scheme != "Bearer" || parts.next().is_some() {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_parse_valid_bearer() {
        assert_eq!(parse_bearer("Bearer abc.def.ghi"), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_parse_wrong_scheme() {
        assert_eq!(parse_bearer("Basic abc"), Err(BearerError::Malformed));
        assert_eq!(parse_bearer("bearer abc"), Err(BearerError::Malformed));
    }

    #[test]
    fn test_parse_wrong_part_count() {
        assert_eq!(parse_bearer("Bearer"), Err(BearerError::Malformed));
        assert_eq!(parse_bearer(""), Err(BearerError::Malformed));
        assert_eq!(
            parse_bearer("Bearer abc extra"),
            Err(BearerError::Malformed)
        );
    }

    #[test]
    fn test_extract_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok123"));
        assert_eq!(extract_bearer(&headers), Ok("tok123"));
    }

    #[test]
    fn test_extract_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), Err(BearerError::Missing));
    }

    #[test]
    fn test_extract_non_utf8_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap(),
        );
        assert_eq!(extract_bearer(&headers), Err(BearerError::Malformed));
    }
}
