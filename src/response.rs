use crate::http::HttpResponse;

/// Structured wrapper over a raw HTTP response: parsed JSON body, status
/// code, raw body, and headers. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    data: serde_json::Value,
    http_status: u16,
    http_body: String,
    http_headers: Vec<(String, String)>,
}

/// Outcome of probing a failed response body for the OAuth error shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// The body carries a non-empty string `error` field, optionally with
    /// an `error_description`.
    OAuth {
        code: String,
        description: Option<String>,
    },
    /// The body parses as JSON but does not match the OAuth error shape.
    Unrecognized,
}

impl ApiResponse {
    /// Parse a raw response. Fails when the body is not valid JSON.
    pub fn from_http(response: &HttpResponse) -> Result<Self, serde_json::Error> {
        let http_body = String::from_utf8_lossy(&response.body).into_owned();
        let data = serde_json::from_str(&http_body)?;
        Ok(Self {
            data,
            http_status: response.status,
            http_body,
            http_headers: response.headers.clone(),
        })
    }

    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    pub fn http_body(&self) -> &str {
        &self.http_body
    }

    pub fn http_headers(&self) -> &[(String, String)] {
        &self.http_headers
    }

    /// Probe the parsed body for the OAuth error shape. A missing,
    /// non-string, or empty `error` field is `Unrecognized`.
    pub fn error_body(&self) -> ErrorBody {
        match self.data.get("error").and_then(|e| e.as_str()) {
            Some(code) if !code.is_empty() => ErrorBody::OAuth {
                code: code.to_string(),
                description: self
                    .data
                    .get("error_description")
                    .and_then(|d| d.as_str())
                    .map(String::from),
            },
            _ => ErrorBody::Unrecognized,
        }
    }
}
