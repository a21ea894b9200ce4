use axum::response::Html;

use crate::view;

/// Serves the root page: the search form with an empty results view.
pub async fn index() -> Html<String> {
    Html(view::render_index(&[], None))
}
