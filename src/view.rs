//! HTML page rendering.
//!
//! Builds the results page served on `GET /` and `POST /search`. Pages are
//! assembled with plain string formatting; every user- or API-controlled
//! value passes through [`escape_html`] before it is embedded.

use crate::types::Track;

/// Escapes the five HTML-significant characters in a string.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the search page with an optional result list and error message.
///
/// `GET /` uses this with no tracks and no error; `POST /search` uses it
/// for results, the validation message and every rendered error path.
pub fn render_index(tracks: &[Track], error: Option<&str>) -> String {
    let mut body = String::new();

    if let Some(message) = error {
        body.push_str(&format!(
            "    <p class=\"error\">{}</p>\n",
            escape_html(message)
        ));
    }

    if !tracks.is_empty() {
        body.push_str("    <ul class=\"results\">\n");
        for track in tracks {
            body.push_str(&render_track(track));
        }
        body.push_str("    </ul>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Recify</title>
</head>
<body>
  <h1>Recify</h1>
  <form action="/search" method="post">
    <input type="text" name="search" placeholder="Search term">
    <input type="text" name="category" placeholder="Category">
    <input type="text" name="language" placeholder="Language">
    <button type="submit">Search</button>
  </form>
{body}</body>
</html>
"#
    )
}

fn render_track(track: &Track) -> String {
    let artists = track
        .artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let art = track
        .album
        .images
        .first()
        .map(|image| {
            format!(
                "<img src=\"{}\" alt=\"{}\" width=\"64\">",
                escape_html(&image.url),
                escape_html(&track.album.name)
            )
        })
        .unwrap_or_default();

    let title = match &track.external_urls.spotify {
        Some(url) => format!(
            "<a href=\"{}\">{}</a>",
            escape_html(url),
            escape_html(&track.name)
        ),
        None => escape_html(&track.name),
    };

    format!(
        "      <li>{art} {title} &mdash; {artists} ({album})</li>\n",
        artists = escape_html(&artists),
        album = escape_html(&track.album.name),
    )
}
