//! # API Module
//!
//! This module provides the HTTP handlers for the Recify web surface. It
//! implements the inbound endpoints that drive the search flow and a health
//! check for monitoring.
//!
//! ## Endpoints
//!
//! ### Search Flow
//!
//! - [`index`] - Renders the search form with an empty results view.
//! - [`search`] - Accepts the submitted form, validates and assembles the
//!   query, drives the token fetch and catalog search, and renders the
//!   results or error page.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version information for
//!   monitoring systems and load balancers.
//!
//! ## Architecture
//!
//! Handlers are async functions wired into an [Axum](https://docs.rs/axum)
//! router by [`crate::server`]. The shared [`Config`](crate::config::Config)
//! is injected via an `Extension` layer. Every failure inside the search
//! flow is converted into a rendered error page at this boundary; handlers
//! never panic and never take the process down.

mod health;
mod index;
mod search;

pub use health::health;
pub use index::index;
pub use search::{SearchForm, search};
