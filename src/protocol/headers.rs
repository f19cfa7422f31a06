//! Header construction and peer discovery.
//!
//! # Examples
//!
//! ```
//! use roam_backend_client::protocol::{default_headers, extract_peer};
//!
//! let headers = default_headers("secret").unwrap();
//! assert_eq!(headers["authorization"], "Bearer secret");
//! assert_eq!(headers["x-authorization"], "Bearer secret");
//!
//! let peer = extract_peer("https://peer-2.api.roamresearch.com:3004/api/graph/g/q");
//! assert_eq!(peer.as_deref(), Some("https://peer-2.api.roamresearch.com:3004"));
//! ```

use super::constants::{headers, JSON_CONTENT_TYPE};
use crate::error::Result;
use http::{HeaderMap, HeaderValue};
use regex::Regex;
use std::sync::LazyLock;

/// `scheme://host:port` of a `peer-N` backend, followed by a path.
static PEER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(https://peer-\d+.*?:\d+)/.*").expect("peer pattern is a valid regex")
});

/// Bearer authorization value for a token, marked sensitive.
///
/// # Errors
///
/// Returns [`RoamError::InvalidHeader`](crate::RoamError::InvalidHeader) if the
/// token contains characters not allowed in a header value.
pub fn bearer_value(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Headers sent with every backend request.
///
/// JSON content type, plus the bearer token under both `Authorization` and
/// `x-authorization`.
pub fn default_headers(token: &str) -> Result<HeaderMap> {
    let bearer = bearer_value(token)?;

    let mut map = HeaderMap::with_capacity(3);
    map.insert(
        headers::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    map.insert(headers::AUTHORIZATION, bearer.clone());
    map.insert(headers::X_AUTHORIZATION, bearer);
    Ok(map)
}

/// Extract a peer base URL from the final URL of a redirected response.
///
/// Matches `https://peer-<digits>...:<port>/...` and returns the
/// `https://peer-<digits>...:<port>` prefix. Returns `None` for any URL that
/// does not point at a peer, including plain `http` peers and URLs without a
/// path after the port.
pub fn extract_peer(url: &str) -> Option<String> {
    PEER_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let map = default_headers("tok").unwrap();
        assert_eq!(map[headers::CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(map[headers::AUTHORIZATION], "Bearer tok");
        assert_eq!(map[headers::X_AUTHORIZATION], "Bearer tok");
        assert!(map[headers::AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_bearer_rejects_newline() {
        assert!(bearer_value("bad\ntoken").is_err());
    }

    #[test]
    fn test_extract_peer() {
        assert_eq!(
            extract_peer("https://peer-2.api.roamresearch.com:3004/api/graph/g/q").as_deref(),
            Some("https://peer-2.api.roamresearch.com:3004")
        );
        assert_eq!(
            extract_peer("https://peer-17:443/x").as_deref(),
            Some("https://peer-17:443")
        );
    }

    #[test]
    fn test_extract_peer_no_match() {
        assert_eq!(extract_peer("https://api.roamresearch.com/api/graph/g/q"), None);
        assert_eq!(extract_peer("http://peer-2.api.roamresearch.com:3004/api"), None);
        assert_eq!(extract_peer("https://peer-2.api.roamresearch.com:3004"), None);
        assert_eq!(extract_peer("https://peer-x.api.roamresearch.com:3004/api"), None);
    }
}
