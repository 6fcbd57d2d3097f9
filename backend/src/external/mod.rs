//! External API integrations
//!
//! Thin HTTP clients for the government data sources. They report every
//! failure as an `ExternalError`; deciding what to do about it is left to the
//! services layer.

pub mod agmarknet;
pub mod icar;
pub mod imd;

pub use agmarknet::AgmarknetClient;
pub use icar::IcarClient;
pub use imd::ImdClient;

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure talking to an upstream source
#[derive(Debug, Error)]
pub enum ExternalError {
    #[error("{upstream} endpoint is not a valid URL: {detail}")]
    InvalidUrl { upstream: &'static str, detail: String },

    #[error("{upstream} request failed: {error}")]
    Request {
        upstream: &'static str,
        #[source]
        error: reqwest::Error,
    },

    #[error("{upstream} API error: {status} - {body}")]
    Status {
        upstream: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to parse {upstream} response: {error}")]
    Decode {
        upstream: &'static str,
        #[source]
        error: reqwest::Error,
    },
}

/// Build the HTTP client shared by every upstream
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("agri-intel/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Append percent-encoded path segments to a base URL
pub(crate) fn endpoint(
    upstream: &'static str,
    base_url: &str,
    segments: &[&str],
) -> Result<Url, ExternalError> {
    let invalid = |detail: String| ExternalError::InvalidUrl { upstream, detail };

    let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid(format!("{} cannot be a base", base_url)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send a request and decode a 2xx JSON body
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    upstream: &'static str,
    request: RequestBuilder,
) -> Result<T, ExternalError> {
    let response = request
        .send()
        .await
        .map_err(|error| ExternalError::Request { upstream, error })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ExternalError::Status {
            upstream,
            status,
            body,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|error| ExternalError::Decode { upstream, error })
}
