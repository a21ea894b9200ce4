use std::sync::Arc;

use axum::{Extension, Form, response::Html};
use serde::Deserialize;

use crate::{
    config::Config,
    error::SearchError,
    spotify,
    types::Track,
    utils, view,
};

/// Message shown when every form field is empty or blank.
const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term, category, or language.";

/// The three optional free-text inputs of the search form.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub search: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
}

/// Handles the search form submission.
///
/// Assembles the query from the submitted fields and rejects it with a
/// validation message when nothing remains after trimming; no outbound call
/// is made in that case. Otherwise fetches a fresh access token, runs the
/// catalog search, and renders the result list. Any [`SearchError`] coming
/// out of the flow is rendered into the error view here; nothing propagates
/// past this handler.
pub async fn search(
    Extension(config): Extension<Arc<Config>>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    let Some(query) = utils::build_search_query(
        form.search.as_deref(),
        form.category.as_deref(),
        form.language.as_deref(),
    ) else {
        return Html(view::render_index(&[], Some(EMPTY_QUERY_MESSAGE)));
    };

    match run_search(&config, &query).await {
        Ok(tracks) => Html(view::render_index(&tracks, None)),
        Err(e) => Html(view::render_index(&[], Some(&format!("Error: {}", e)))),
    }
}

async fn run_search(config: &Config, query: &str) -> Result<Vec<Track>, SearchError> {
    let token = spotify::auth::fetch_token(config).await?;
    spotify::search::search_tracks(config, query, &token.access_token).await
}
