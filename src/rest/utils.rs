use ntex::web;
use uuid::Uuid;

use super::errors;

/// Parses a document id path segment.
///
/// Malformed ids surface as store-level failures (500), not client errors,
/// the same way a bad id fails inside a managed document store.
pub fn parse_document_id(raw: &str) -> Result<Uuid, web::Error> {
    Uuid::parse_str(raw).map_err(|e| {
        errors::ApiError::Internal(format!("malformed document id '{raw}': {e}")).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_id_accepts_hyphenated_uuid() {
        assert!(parse_document_id("3fa85f64-5717-4562-b3fc-2c963f66afa6").is_ok());
    }

    #[test]
    fn test_parse_document_id_rejects_garbage() {
        assert!(parse_document_id("123").is_err());
        assert!(parse_document_id("").is_err());
    }
}
