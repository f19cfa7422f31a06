//! Status classification for backend responses.
//!
//! | Status | Outcome |
//! |--------|---------|
//! | 200 | success |
//! | 400, 500 | [`RoamError::BadRequest`] with the body's `message` |
//! | 401 | [`RoamError::Unauthorized`] |
//! | 503 | [`RoamError::NotReady`] |
//! | other | [`RoamError::Http`] with the status text |

use crate::error::{Result, RoamError};
use crate::types::ApiResponse;
use serde_json::Value;

/// Whether a status carries a JSON error body with a `message` field.
#[inline]
pub fn has_error_message(status: u16) -> bool {
    matches!(status, 400 | 500)
}

/// Message for a 400/500 response.
///
/// Uses the body's `message` field, or `HTTP <status>` when the field is
/// absent or `null`. A body that is not valid JSON is an error in its own
/// right and is returned as such rather than replaced by the fallback.
pub fn error_message(response: &ApiResponse) -> Result<String> {
    let body: Value = response.json()?;
    let message = match body.get("message") {
        None | Some(Value::Null) => format!("HTTP {}", response.status),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    Ok(message)
}

/// Map a response to `Ok(())` for status 200 or to the matching [`RoamError`].
pub fn check_status(response: &ApiResponse) -> Result<()> {
    match response.status {
        200 => Ok(()),
        status if has_error_message(status) => Err(RoamError::BadRequest {
            status,
            message: error_message(response)?,
        }),
        401 => Err(RoamError::Unauthorized),
        503 => Err(RoamError::NotReady),
        status => Err(RoamError::Http {
            status,
            status_text: response.status_text.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok() {
        assert!(check_status(&ApiResponse::new(200, "")).is_ok());
    }

    #[test]
    fn test_other_2xx_is_not_success() {
        let err = check_status(&ApiResponse::new(204, "")).unwrap_err();
        assert_eq!(err.to_string(), "No Content");
    }

    #[test]
    fn test_message_from_body() {
        let resp = ApiResponse::new(500, r#"{"message": "boom"}"#);
        let err = check_status(&resp).unwrap_err();
        assert_eq!(err.to_string(), "Error: boom");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_message_fallback() {
        let resp = ApiResponse::new(400, r#"{"message": null}"#);
        assert_eq!(error_message(&resp).unwrap(), "HTTP 400");
    }

    #[test]
    fn test_non_string_message() {
        let resp = ApiResponse::new(400, r#"{"message": 42}"#);
        assert_eq!(error_message(&resp).unwrap(), "42");
    }

    #[test]
    fn test_unparseable_body_propagates() {
        let resp = ApiResponse::new(400, "<html>oops</html>");
        assert!(matches!(check_status(&resp), Err(RoamError::Json(_))));
    }

    #[test]
    fn test_401_ignores_body() {
        let resp = ApiResponse::new(401, r#"{"message": "ignored"}"#);
        assert!(matches!(check_status(&resp), Err(RoamError::Unauthorized)));
    }

    #[test]
    fn test_unclassified_uses_status_text() {
        let resp = ApiResponse::new(418, "").with_status_text("I'm a teapot");
        let err = check_status(&resp).unwrap_err();
        assert_eq!(err.to_string(), "I'm a teapot");
    }
}
