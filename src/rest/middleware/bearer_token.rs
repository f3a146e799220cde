use ntex::{
    http::Payload,
    web::{Error, FromRequest, HttpRequest},
};
use subtle::ConstantTimeEq;

use crate::config;
use crate::rest::errors;

/// Extractor proving the request carried the service bearer credential.
///
/// Handlers list it first so the gate runs before any controller logic.
pub struct BearerAuth;

fn extract_bearer_token(authorization_header: Option<&str>) -> Option<&str> {
    authorization_header?.strip_prefix("Bearer ")
}

/// Constant-time comparison; an empty configured token never matches.
fn token_is_valid(candidate: &str, expected: &str) -> bool {
    !expected.is_empty() && bool::from(candidate.as_bytes().ct_eq(expected.as_bytes()))
}

fn authorize_request(
    authorization_header: Option<&str>,
    expected_token: &str,
) -> Result<(), errors::ApiError> {
    match extract_bearer_token(authorization_header) {
        Some(token) if token_is_valid(token, expected_token) => Ok(()),
        _ => Err(errors::ApiError::Unauthorized),
    }
}

impl<Err> FromRequest<Err> for BearerAuth {
    type Error = Error;

    fn from_request(
        req: &HttpRequest,
        _: &mut Payload,
    ) -> impl std::future::Future<Output = Result<Self, Self::Error>> {
        let authorization_header = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok());

        let outcome = authorize_request(
            authorization_header,
            &config::APP_CONFIG.api_auth_token,
        )
        .map(|_| Self)
        .map_err(Into::into);

        futures::future::ready(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "test-token-123";

    #[test]
    fn test_missing_header_is_rejected() {
        assert!(authorize_request(None, EXPECTED).is_err());
    }

    #[test]
    fn test_non_bearer_scheme_is_rejected() {
        assert!(authorize_request(Some("Basic dXNlcjpwYXNz"), EXPECTED).is_err());
        assert!(authorize_request(Some("test-token-123"), EXPECTED).is_err());
    }

    #[test]
    fn test_wrong_token_is_rejected() {
        assert!(authorize_request(Some("Bearer nope"), EXPECTED).is_err());
        assert!(authorize_request(Some("Bearer test-token-12"), EXPECTED).is_err());
    }

    #[test]
    fn test_valid_token_is_accepted() {
        assert!(authorize_request(Some("Bearer test-token-123"), EXPECTED).is_ok());
    }

    #[test]
    fn test_empty_configured_token_rejects_everything() {
        assert!(authorize_request(Some("Bearer "), "").is_err());
        assert!(!token_is_valid("", ""));
    }
}
