//! HTTP client abstraction for fetching JWKS documents

use crate::error::FetchError;
use std::future::Future;
use std::pin::Pin;

/// Future returned by [`HttpClient::fetch`]
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>, FetchError>> + Send + 'a>>;

/// Fetches the raw body behind a URL
///
/// Implementations own timeouts, retries and TLS configuration. With the
/// `remote` feature enabled, `reqwest::Client` implements this trait.
pub trait HttpClient: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a>;
}

#[cfg(feature = "remote")]
impl HttpClient for reqwest::Client {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(async move {
            let response = self
                .get(url)
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            if !response.status().is_success() {
                return Err(FetchError::Status(response.status().as_u16()));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            Ok(bytes.to_vec())
        })
    }
}
