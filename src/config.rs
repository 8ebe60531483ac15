use std::env;

/// Default base URL for the general API.
pub const DEFAULT_API_BASE: &str = "https://api.payrail.com";

/// Default base URL for the Connect (OAuth) endpoints.
pub const DEFAULT_CONNECT_BASE: &str = "https://connect.payrail.com";

/// Process-level configuration, constructed once at startup and handed to
/// the client.
///
/// OAuth requests resolve their base URL to `connect_base` unless
/// overridden per request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Platform client id, consumed by the authorize-URL and deauthorize
    /// operations when the caller does not pass one explicitly.
    pub client_id: Option<String>,
    /// Secret API key, sent as a bearer token on requests.
    pub secret_key: Option<String>,
    pub api_base: String,
    pub connect_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: None,
            secret_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            connect_base: DEFAULT_CONNECT_BASE.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Recognized variables: `PAYRAIL_CLIENT_ID`, `PAYRAIL_SECRET_KEY`,
    /// `PAYRAIL_API_BASE`, `PAYRAIL_CONNECT_BASE`. Unset variables fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("PAYRAIL_CLIENT_ID").ok(),
            secret_key: env::var("PAYRAIL_SECRET_KEY").ok(),
            api_base: env::var("PAYRAIL_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            connect_base: env::var("PAYRAIL_CONNECT_BASE")
                .unwrap_or_else(|_| DEFAULT_CONNECT_BASE.to_string()),
        }
    }

    /// Configuration with credentials set and default base URLs.
    pub fn with_credentials(
        client_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            client_id: Some(client_id.into()),
            secret_key: Some(secret_key.into()),
            ..Self::default()
        }
    }
}
