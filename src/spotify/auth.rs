use reqwest::Client;

use crate::{config::Config, error::SearchError, types::Token};

/// Obtains an access token via the OAuth 2.0 client-credentials grant.
///
/// Sends the client id/secret pair form-encoded to the configured token
/// endpoint and deserializes the token from the JSON response. The token is
/// short-lived and is not cached; callers fetch a fresh one per search.
///
/// # Arguments
///
/// * `config` - Application configuration carrying the credentials and the
///   token endpoint URL
///
/// # Errors
///
/// - [`SearchError::Auth`] when the endpoint answers with a non-200 status
///   (invalid credentials, endpoint outage). Never retried; a failed token
///   fetch aborts the whole search.
/// - [`SearchError::Http`] on transport failures or an undecodable body.
///
/// # Example
///
/// ```
/// let token = fetch_token(&config).await?;
/// let tracks = search_tracks(&config, "daft punk", &token.access_token).await?;
/// ```
pub async fn fetch_token(config: &Config) -> Result<Token, SearchError> {
    let client = Client::new();
    let response = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", &config.client_id),
            ("client_secret", &config.client_secret),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SearchError::Auth(response.status()));
    }

    let token = response.json::<Token>().await?;
    Ok(token)
}
