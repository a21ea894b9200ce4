//! Error taxonomy for the search flow.
//!
//! Every failure that can interrupt a search maps onto one variant of
//! [`SearchError`]. Handlers catch these at the request boundary and render
//! them into the error view; none of them terminate the process.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures that can occur between accepting a query and returning tracks.
///
/// An empty query is not represented here; it is rejected by validation
/// before any client call is made.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The token endpoint answered with a non-success status. Not retried;
    /// a single failed token fetch aborts the whole search.
    #[error("failed to obtain access token (status {0})")]
    Auth(StatusCode),

    /// The search endpoint answered with a non-success, non-rate-limit
    /// status.
    #[error("Spotify API request failed with status {0}")]
    Catalog(StatusCode),

    /// Every allowed attempt was answered with 429 Too Many Requests.
    #[error("rate limited on all {0} attempts, giving up")]
    RetryExhausted(u32),

    /// Transport failure or undecodable response body.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
