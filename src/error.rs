use crate::response::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No client id could be resolved from request parameters or
    /// configuration. Raised before any network call.
    #[error("authentication error: {message}")]
    Authentication { message: String },

    /// Failed HTTP response whose body is a recognized OAuth error
    /// (`{"error": <string>, "error_description": <string?>}`).
    /// Per RFC 6749 Section 5.2. The full response (status, raw body,
    /// parsed body, headers) is attached.
    #[error("OAuth error: {code}")]
    OAuth {
        code: String,
        description: Option<String>,
        response: ApiResponse,
    },

    /// Failed HTTP response whose body is not a recognized OAuth error
    /// shape (unparseable, or no string `error` field). Carries the
    /// original status and raw body; no structured code.
    #[error("API error (HTTP {status})")]
    Api { status: u16, body: String },

    /// Network / transport error from the HTTP client.
    #[error("HTTP request failed: {0}")]
    Http(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// A base URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A required field is missing from a response object.
    #[error("Missing or invalid field: {field}")]
    MissingField { field: &'static str },
}
