//! # Spotify Integration Module
//!
//! This module provides the outbound interface to the Spotify Web API. It
//! handles all HTTP communication with Spotify: the client-credentials
//! token exchange, the catalog search request, and rate-limit handling.
//!
//! ## Overview
//!
//! The module implements the two outbound calls the application makes, as
//! plain async functions that take the explicit [`Config`](crate::config::Config)
//! rather than reading ambient process state:
//!
//! ```text
//! Handler Layer (api::search)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials grant)
//!     └── Catalog Search (track search with retry)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements the OAuth 2.0 client-credentials grant: the client
//! id/secret pair is exchanged directly for a short-lived access token,
//! without end-user interaction. Tokens are not cached; every search
//! performs its own exchange, so there is no token state to refresh or
//! invalidate.
//!
//! ## Rate Limiting
//!
//! [`search`] handles 429 Too Many Requests responses by honoring the
//! `Retry-After` header (defaulting to one second when absent) and retrying
//! up to a fixed maximum of attempts. Exhausting the attempts surfaces as
//! [`SearchError::RetryExhausted`](crate::error::SearchError::RetryExhausted)
//! rather than silently returning nothing.
//!
//! ## Error Types
//!
//! All functions return [`SearchError`](crate::error::SearchError), which
//! separates authentication failures, catalog failures (with status code)
//! and transport errors.

pub mod auth;
pub mod search;
