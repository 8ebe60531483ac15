use url::Url;

use crate::client::OAuthClient;
use crate::config::Config;
use crate::error::Error;
use crate::http::{HttpClient, Method};
use crate::object::ApiObject;
use crate::response::ApiResponse;

/// Request-scoped overrides for a single OAuth operation.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Override the base URL used for authorize-URL construction.
    pub connect_base: Option<String>,
    /// Override the base URL used for dispatched requests.
    pub api_base: Option<String>,
    /// Override the secret key for this request.
    pub api_key: Option<String>,
    /// Extra headers passed through to the HTTP layer.
    pub headers: Vec<(String, String)>,
}

/// Resolve the platform client id from the request parameters, falling
/// back to the configured one.
///
/// # Errors
///
/// Returns [`Error::Authentication`] when neither source carries a
/// client id.
pub fn get_client_id(params: &[(String, String)], config: &Config) -> Result<String, Error> {
    params
        .iter()
        .find(|(key, _)| key == "client_id")
        .map(|(_, value)| value.clone())
        .or_else(|| config.client_id.clone())
        .ok_or_else(|| Error::Authentication {
            message: "No client_id provided. Set `client_id` on your Config or pass \
                      client_id in the request parameters. Client ids are listed in \
                      the Payrail dashboard under Settings > Connect platform."
                .to_string(),
        })
}

/// Build the URL a platform account visits to authorize a connection.
///
/// The base comes from `opts.connect_base` or the configured Connect base.
/// The client id is resolved via [`get_client_id`] (may fail), and
/// `response_type` defaults to `"code"` unless the caller supplied one.
/// Every parameter is URL-encoded into the query in order. Pure URL
/// construction; no network call.
///
/// # Example
///
/// ```rust
/// use payrail_oauth::{Config, RequestOptions, authorize_url, generate_state};
///
/// let config = Config {
///     client_id: Some("ca_123".to_string()),
///     ..Config::default()
/// };
/// let params = vec![("state".to_string(), generate_state())];
///
/// let url = authorize_url(&config, &params, &RequestOptions::default()).unwrap();
/// assert!(url.as_str().starts_with("https://connect.payrail.com/oauth/authorize?"));
/// ```
pub fn authorize_url(
    config: &Config,
    params: &[(String, String)],
    opts: &RequestOptions,
) -> Result<Url, Error> {
    let base = opts.connect_base.as_deref().unwrap_or(&config.connect_base);
    let client_id = get_client_id(params, config)?;

    let mut url = Url::parse(&format!("{base}/oauth/authorize"))?;

    {
        let mut query = url.query_pairs_mut();
        query.extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        if !params.iter().any(|(key, _)| key == "client_id") {
            query.append_pair("client_id", &client_id);
        }
        if !params.iter().any(|(key, _)| key == "response_type") {
            query.append_pair("response_type", "code");
        }
    }

    Ok(url)
}

/// Dispatch a request through the OAuth client.
///
/// The base URL resolves to `opts.api_base`, else the client's Connect
/// base; `api_key` and `headers` come from `opts`. No retries are added
/// here.
pub async fn request<T: HttpClient>(
    client: &OAuthClient<T>,
    method: Method,
    path: &str,
    params: &[(String, String)],
    opts: &RequestOptions,
) -> Result<ApiResponse, Error> {
    let api_base = opts
        .api_base
        .as_deref()
        .unwrap_or(&client.config().connect_base);

    client
        .execute_request(
            method,
            path,
            Some(api_base),
            opts.api_key.as_deref(),
            &opts.headers,
            params,
        )
        .await
}

/// Exchange an authorization grant for tokens via `POST /oauth/token`.
///
/// Propagates any dispatch error unchanged (transport, API, or OAuth).
pub async fn token<T: HttpClient>(
    client: &OAuthClient<T>,
    params: &[(String, String)],
    opts: &RequestOptions,
) -> Result<ApiObject, Error> {
    let response = request(client, Method::Post, "/oauth/token", params, opts).await?;
    Ok(ApiObject::from_response(&response))
}

/// Disconnect an account from the platform via `POST /oauth/deauthorize`.
///
/// The client id is resolved via [`get_client_id`] before any network
/// call is attempted.
pub async fn deauthorize<T: HttpClient>(
    client: &OAuthClient<T>,
    params: &[(String, String)],
    opts: &RequestOptions,
) -> Result<ApiObject, Error> {
    let client_id = get_client_id(params, client.config())?;

    let mut params = params.to_vec();
    if !params.iter().any(|(key, _)| key == "client_id") {
        params.push(("client_id".to_string(), client_id));
    }

    let response = request(client, Method::Post, "/oauth/deauthorize", &params, opts).await?;
    Ok(ApiObject::from_response(&response))
}
