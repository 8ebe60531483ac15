//! OAuth helper for the Payrail Connect platform API.
//!
//! Builds authorization URLs, exchanges and deauthorizes OAuth tokens
//! against the Connect endpoints, and translates the platform's OAuth
//! error payloads into typed errors. Failed responses whose body does not
//! match the documented error shape surface as a generic API error with
//! the raw status and body preserved.
//!
//! # Example
//!
//! ```rust,no_run
//! use payrail_oauth::{
//!     Config, OAuthClient, RequestOptions, ReqwestClient, authorize_url, generate_state, token,
//! };
//!
//! # async fn example() -> Result<(), payrail_oauth::Error> {
//! let config = Config::with_credentials("ca_123", "sk_live_abc");
//! let client = OAuthClient::new(ReqwestClient::new(), config);
//!
//! // Step 1: send the account owner to the authorization page.
//! let params = vec![("state".to_string(), generate_state())];
//! let url = authorize_url(client.config(), &params, &RequestOptions::default())?;
//! println!("redirect to: {url}");
//!
//! // Step 2: exchange the grant code from the redirect for tokens.
//! let params = vec![
//!     ("grant_type".to_string(), "authorization_code".to_string()),
//!     ("code".to_string(), "ac_456".to_string()),
//! ];
//! let tokens = token(&client, &params, &RequestOptions::default()).await?;
//! println!("connected account: {}", tokens.account_id()?);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod http;
mod oauth;
mod object;
mod request;
mod response;
mod state;

// Core
pub use client::OAuthClient;
pub use config::{Config, DEFAULT_API_BASE, DEFAULT_CONNECT_BASE};
pub use error::Error;
pub use http::{HttpClient, HttpRequest, HttpResponse, Method};
pub use oauth::{RequestOptions, authorize_url, deauthorize, get_client_id, request, token};
pub use object::ApiObject;
pub use response::{ApiResponse, ErrorBody};

// Utilities
pub use state::generate_state;

// Default HTTP client (behind feature flag)
#[cfg(feature = "reqwest-client")]
pub use client::default_client;
#[cfg(feature = "reqwest-client")]
pub use http::ReqwestClient;
