//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::PizzaNotFound => StatusCode::NOT_FOUND,

            // 422 Unprocessable Entity (body did not match the schema)
            Self::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,

            // 503 Service Unavailable (store not connected, client can retry)
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request
            Self::InvalidRequest | Self::InvalidId => StatusCode::BAD_REQUEST,
        }
    }
}
