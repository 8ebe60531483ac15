use crate::Error;
use crate::response::ApiResponse;

/// Generic typed object over a parsed API response body.
///
/// The OAuth endpoints return loosely-shaped JSON (token grants,
/// deauthorization receipts); this wrapper keeps the full body available
/// through [`data`](Self::data) and exposes typed accessors for the fields
/// the platform documents.
#[derive(Debug, Clone)]
pub struct ApiObject {
    data: serde_json::Value,
}

impl ApiObject {
    pub fn new(data: serde_json::Value) -> Self {
        Self { data }
    }

    /// Build an object from the parsed body of a response.
    pub fn from_response(response: &ApiResponse) -> Self {
        Self {
            data: response.data().clone(),
        }
    }

    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    /// Raw field access by key.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    pub fn access_token(&self) -> Result<&str, Error> {
        self.data["access_token"]
            .as_str()
            .ok_or(Error::MissingField {
                field: "access_token",
            })
    }

    pub fn token_type(&self) -> Result<&str, Error> {
        self.data["token_type"].as_str().ok_or(Error::MissingField {
            field: "token_type",
        })
    }

    pub fn has_refresh_token(&self) -> bool {
        self.data["refresh_token"].is_string()
    }

    pub fn refresh_token(&self) -> Result<&str, Error> {
        self.data["refresh_token"]
            .as_str()
            .ok_or(Error::MissingField {
                field: "refresh_token",
            })
    }

    pub fn has_scopes(&self) -> bool {
        self.data["scope"].is_string()
    }

    pub fn scopes(&self) -> Result<Vec<String>, Error> {
        let scope = self.data["scope"]
            .as_str()
            .ok_or(Error::MissingField { field: "scope" })?;
        Ok(scope.split(' ').map(String::from).collect())
    }

    /// Whether the grant was issued against live-mode keys.
    pub fn livemode(&self) -> Result<bool, Error> {
        self.data["livemode"]
            .as_bool()
            .ok_or(Error::MissingField { field: "livemode" })
    }

    /// The connected account the grant refers to.
    pub fn account_id(&self) -> Result<&str, Error> {
        self.data["account_id"].as_str().ok_or(Error::MissingField {
            field: "account_id",
        })
    }

    pub fn publishable_key(&self) -> Result<&str, Error> {
        self.data["publishable_key"]
            .as_str()
            .ok_or(Error::MissingField {
                field: "publishable_key",
            })
    }
}
