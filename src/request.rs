use crate::http::{HttpRequest, Method};

/// URL-encode an ordered list of parameters into a query string.
pub fn encode_query(params: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}

/// Encode a secret key as a bearer `Authorization` header value.
pub fn bearer_auth(secret_key: &str) -> String {
    format!("Bearer {secret_key}")
}

/// Build an API request.
///
/// POST parameters are form-encoded into the body; GET parameters go into
/// the query string. Sets `Content-Type` (POST only),
/// `Accept: application/json`, `User-Agent: payrail-oauth`, and
/// `Authorization` when a secret key is supplied. Caller headers are
/// appended last.
pub fn build_request(
    method: Method,
    base: &str,
    path: &str,
    params: &[(String, String)],
    secret_key: Option<&str>,
    extra_headers: &[(String, String)],
) -> HttpRequest {
    let query = encode_query(params);

    let (url, body) = match method {
        Method::Get => {
            let url = if query.is_empty() {
                format!("{base}{path}")
            } else {
                format!("{base}{path}?{query}")
            };
            (url, Vec::new())
        }
        Method::Post => (format!("{base}{path}"), query.into_bytes()),
    };

    let mut headers = Vec::new();

    if method == Method::Post {
        headers.push((
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        ));
    }

    headers.push(("Accept".to_string(), "application/json".to_string()));
    headers.push(("User-Agent".to_string(), "payrail-oauth".to_string()));

    if let Some(key) = secret_key {
        headers.push(("Authorization".to_string(), bearer_auth(key)));
    }

    headers.extend(extra_headers.iter().cloned());

    HttpRequest {
        method,
        url,
        headers,
        body,
    }
}
