use serde::Serialize;

/// Standard JSON error body for all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Standard JSON body for responses that only carry a message.
#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub message: String,
}
