use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};
use serde_json::json;

/// Failure taxonomy of the REST surface: validation maps to 400, not-found
/// to 404, a missing or invalid credential to 401, everything else to 500.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    Validation(#[error(not(source))] String),
    NotFound(#[error(not(source))] String),
    Unauthorized,
    Internal(#[error(not(source))] String),
}

impl web::error::WebResponseError for ApiError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{:#?}", self);

        let body = match self {
            // not-found responds under "message", everything else under "error"
            ApiError::NotFound(msg) => json!({ "message": msg }),
            ApiError::Unauthorized => json!({ "error": "a valid bearer token is required" }),
            ApiError::Validation(msg) | ApiError::Internal(msg) => json!({ "error": msg }),
        };

        web::HttpResponse::build(self.status_code()).json(&body)
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            ApiError::Validation(_) => http::StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => http::StatusCode::NOT_FOUND,
            ApiError::Unauthorized => http::StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntex::web::error::WebResponseError;

    #[test]
    fn test_status_codes_follow_the_error_taxonomy() {
        assert_eq!(
            ApiError::Validation("age is required".into()).status_code(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("Pet not found".into()).status_code(),
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Unauthorized.status_code(),
            http::StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Internal("pool closed".into()).status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
