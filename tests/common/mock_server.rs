use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock Connect server built on `wiremock`. Simulates the platform's
/// token and deauthorize endpoints with configurable behavior.
pub struct MockConnectServer {
    server: MockServer,
}

impl MockConnectServer {
    /// Start a new mock server on a random available port.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the mock server (e.g. "http://127.0.0.1:PORT").
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Mount a handler that returns a successful token response (HTTP 200)
    /// with the given JSON body at `POST /oauth/token`.
    pub async fn mock_token_success(&self, response: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response))
            .mount(&self.server)
            .await;
    }

    /// Mount a handler that returns an OAuth error response with standard
    /// error JSON at `POST /oauth/token`.
    pub async fn mock_token_oauth_error(&self, status: u16, error_code: &str, description: &str) {
        let body = serde_json::json!({
            "error": error_code,
            "error_description": description,
        });
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(status).set_body_json(&body))
            .mount(&self.server)
            .await;
    }

    /// Mount a handler that returns a failure with an arbitrary raw body
    /// at `POST /oauth/token` (non-JSON or non-OAuth-shaped payloads).
    pub async fn mock_token_raw_error(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a handler that returns a successful deauthorization receipt
    /// (HTTP 200) at `POST /oauth/deauthorize`.
    pub async fn mock_deauthorize_success(&self, response: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/oauth/deauthorize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response))
            .mount(&self.server)
            .await;
    }

    /// Drain all requests the server has received so far.
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}
