use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config::Config,
    error::SearchError,
    types::{SearchResponse, Track},
    warning,
};

/// Maximum number of attempts for a single search, rate-limited ones included.
pub const MAX_ATTEMPTS: u32 = 5;

/// Wait applied when a 429 response carries no usable `Retry-After` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 1;

/// Searches the Spotify catalog for tracks matching the assembled query.
///
/// Issues a `GET` against the `/search` endpoint with a fixed `type=track`
/// filter and a page size of 10, attaching the bearer token. The query
/// string is passed as a request parameter, so reqwest handles the URL
/// encoding of spaces and special characters.
///
/// # Arguments
///
/// * `config` - Application configuration carrying the API base URL
/// * `query` - Assembled, non-empty search query string
/// * `token` - Valid access token from [`fetch_token`](super::auth::fetch_token)
///
/// # Rate Limiting
///
/// A 429 Too Many Requests response does not fail the search. The function
/// reads the `Retry-After` header (defaulting to one second when it is
/// absent or unparseable), sleeps for that long and retries, up to
/// [`MAX_ATTEMPTS`] attempts total. When every attempt is rate-limited the
/// search fails with [`SearchError::RetryExhausted`].
///
/// # Errors
///
/// - [`SearchError::Catalog`] for any other non-success status, carrying
///   the status code.
/// - [`SearchError::RetryExhausted`] after [`MAX_ATTEMPTS`] rate-limited
///   attempts.
/// - [`SearchError::Http`] on transport failures or an undecodable body.
///
/// # Returns
///
/// The list of matching tracks on success. An absent or empty `tracks`
/// container in the response is a valid empty result, not an error.
pub async fn search_tracks(
    config: &Config,
    query: &str,
    token: &str,
) -> Result<Vec<Track>, SearchError> {
    let client = Client::new();
    let api_url = format!("{uri}/search", uri = &config.api_url);

    for attempt in 1..=MAX_ATTEMPTS {
        let response = client
            .get(&api_url)
            .query(&[("q", query), ("type", "track"), ("limit", "10")])
            .bearer_auth(token)
            .send()
            .await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            warning!(
                "Rate limited by Spotify, waiting {}s before retry (attempt {}/{})",
                retry_after,
                attempt,
                MAX_ATTEMPTS
            );
            sleep(Duration::from_secs(retry_after)).await;
            continue; // retry
        }

        if response.status() != StatusCode::OK {
            return Err(SearchError::Catalog(response.status()));
        }

        let res = response.json::<SearchResponse>().await?;
        return Ok(res.tracks.map(|tracks| tracks.items).unwrap_or_default());
    }

    Err(SearchError::RetryExhausted(MAX_ATTEMPTS))
}
