/// Assembles the search query string from the three optional form inputs.
///
/// Each input is trimmed; blank inputs are dropped and the remaining values
/// are joined with single spaces, so the result never carries leading or
/// trailing whitespace.
///
/// # Returns
///
/// `Some(query)` when at least one input is non-blank, `None` otherwise.
/// A `None` result means the search must be rejected before any network
/// call is made.
///
/// # Example
///
/// ```
/// let q = build_search_query(Some("daft punk"), None, Some("french"));
/// assert_eq!(q.as_deref(), Some("daft punk french"));
/// ```
pub fn build_search_query(
    term: Option<&str>,
    category: Option<&str>,
    language: Option<&str>,
) -> Option<String> {
    let joined = [term, category, language]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() { None } else { Some(joined) }
}
