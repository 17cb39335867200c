//! Request URL composition

use url::form_urlencoded;

/// Ordered query parameters; `None` and empty values are dropped
pub type QueryParams<'a> = [(&'a str, Option<String>)];

/// Build `base/segment?key=value&...`
///
/// - `path_segment` is appended verbatim when non-empty; one trailing `/`
///   on `base_path` is absorbed so the join never doubles the separator.
/// - Parameters keep their order and are form-URL-encoded.
/// - No parameter survives → no `?` at all.
///
/// ```
/// use gho_application::query::build_url;
///
/// let url = build_url(
///     "https://example.org/api",
///     "WHOSIS_000001",
///     &[("$filter", None), ("$top", Some("5".into()))],
/// );
/// assert_eq!(url, "https://example.org/api/WHOSIS_000001?%24top=5");
/// ```
pub fn build_url(base_path: &str, path_segment: &str, params: &QueryParams<'_>) -> String {
    let mut url = String::from(base_path);
    if !path_segment.is_empty() {
        if !url.ends_with('/') {
            url.push('/');
        }
        url.push_str(path_segment);
    }

    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut appended = 0usize;
    for (key, value) in params {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            query.append_pair(key, value);
            appended += 1;
        }
    }

    if appended > 0 {
        url.push('?');
        url.push_str(&query.finish());
    }
    url
}
