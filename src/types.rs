use serde::{Deserialize, Serialize};

/// Response body of the client-credentials token exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Envelope of the `/search` endpoint. The `tracks` container is absent
/// when the requested type yields nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<TracksContainer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksContainer {
    pub items: Vec<Track>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// A single track as returned by the search endpoint, reduced to the
/// fields the results page shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumImage {
    pub url: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}
