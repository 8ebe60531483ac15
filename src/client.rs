use crate::config::Config;
use crate::error::Error;
use crate::http::{HttpClient, HttpResponse, Method};
use crate::request::build_request;
use crate::response::{ApiResponse, ErrorBody};

/// Client for the platform's OAuth (Connect) endpoints.
///
/// Owns a transport and a [`Config`] and is immutable after construction.
/// Requests resolve their base URL to the configured Connect base unless
/// an override is supplied per call.
pub struct OAuthClient<T> {
    transport: T,
    config: Config,
}

impl<T> OAuthClient<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Translate a failed HTTP response into a typed error.
    ///
    /// A body that parses as JSON with a string `error` field becomes
    /// [`Error::OAuth`]; an unparseable body or any other shape falls back
    /// to [`Error::Api`] with the original status and raw body, so
    /// malformed error payloads never masquerade as OAuth errors.
    pub fn translate_error(&self, raw: &HttpResponse) -> Error {
        let fallback = || Error::Api {
            status: raw.status,
            body: String::from_utf8_lossy(&raw.body).into_owned(),
        };

        let response = match ApiResponse::from_http(raw) {
            Ok(response) => response,
            Err(err) => {
                log::error!("unparseable error response (HTTP {}): {err}", raw.status);
                return fallback();
            }
        };

        match response.error_body() {
            ErrorBody::OAuth { code, description } => Error::OAuth {
                code,
                description,
                response,
            },
            ErrorBody::Unrecognized => fallback(),
        }
    }
}

impl<T: HttpClient> OAuthClient<T> {
    /// Execute a request against the OAuth endpoints.
    ///
    /// `api_base` defaults to the configured Connect base and `api_key` to
    /// the configured secret key. Non-2xx responses are translated into
    /// typed errors; transport failures propagate unchanged.
    pub async fn execute_request(
        &self,
        method: Method,
        path: &str,
        api_base: Option<&str>,
        api_key: Option<&str>,
        headers: &[(String, String)],
        params: &[(String, String)],
    ) -> Result<ApiResponse, Error> {
        let base = api_base.unwrap_or(&self.config.connect_base);
        let api_key = api_key.or(self.config.secret_key.as_deref());

        let request = build_request(method, base, path, params, api_key, headers);
        log::debug!("sending {:?} {}", method, request.url);

        let raw = self.transport.send(request).await?;

        if (200..300).contains(&raw.status) {
            ApiResponse::from_http(&raw).map_err(|_| Error::Api {
                status: raw.status,
                body: String::from_utf8_lossy(&raw.body).into_owned(),
            })
        } else {
            Err(self.translate_error(&raw))
        }
    }
}

/// Process-wide default client, lazily constructed on first call from
/// [`Config::from_env`] and the reqwest transport. Subsequent calls return
/// the same instance.
#[cfg(feature = "reqwest-client")]
pub fn default_client() -> &'static OAuthClient<crate::http::ReqwestClient> {
    use std::sync::OnceLock;

    static CLIENT: OnceLock<OAuthClient<crate::http::ReqwestClient>> = OnceLock::new();
    CLIENT.get_or_init(|| {
        OAuthClient::new(crate::http::ReqwestClient::new(), Config::from_env())
    })
}
