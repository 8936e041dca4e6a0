/// Path formatting: template + parameters + query + hash → path string
use crate::params::{QueryParams, RouteParams, UrlParams};
use crate::query::add_or_update_query_params;
use crate::route::pattern::{classify_segment, Segment};

/// Struct-shaped input of [`form_path`], carrying the pathname template with its parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPathParams {
    pub pathname: String,
    pub url_params: UrlParams,
    pub query: QueryParams,
    pub hash: String,
}

/// Renders a [`FormPathParams`]
///
/// # Examples
///
/// ```
/// use locale_router::{form_path, FormPathParams, ParamValue, QueryParams};
///
/// let path = form_path(&FormPathParams {
///     pathname: "/demo/:id".to_string(),
///     url_params: [("id".to_string(), ParamValue::from("1729"))].into_iter().collect(),
///     query: QueryParams::new().with("gari", 2).with("miri", 3),
///     hash: "#kj177795".to_string(),
/// });
/// assert_eq!(path, "/demo/1729?gari=2&miri=3#kj177795");
/// ```
pub fn form_path(params: &FormPathParams) -> String {
    render(&params.pathname, &params.url_params, &params.query, &params.hash)
}

/// Renders a path template with optional route parameters
///
/// - `:name` is replaced by its percent-encoded value
/// - `:name*` and `:...name` take their value unescaped, keeping internal `/`
/// - a token without a value is left in place
/// - query pairs are appended in order, empty values omitted
/// - a non-empty hash is appended after stripping a leading `#`
///
/// # Examples
///
/// ```
/// use locale_router::{format_path, RouteParams};
///
/// let params = RouteParams::new().with_url_param("path", "a/b").with_hash("#top");
/// assert_eq!(format_path("/files/:path*", Some(&params)), "/files/a/b#top");
/// assert_eq!(format_path("/demo/:id", None), "/demo/:id");
/// ```
pub fn format_path(template: &str, params: Option<&RouteParams>) -> String {
    match params {
        Some(p) => render(template, &p.url_params, &p.query, &p.hash),
        None => template.to_string(),
    }
}

fn render(template: &str, url_params: &UrlParams, query: &QueryParams, hash: &str) -> String {
    let path = fill_template(template, url_params);

    let with_query = if query.is_empty() {
        path
    } else {
        add_or_update_query_params(&path, query.iter().map(|(k, v)| (k, v.to_string())))
    };

    let hash = hash.strip_prefix('#').unwrap_or(hash);
    if hash.is_empty() {
        with_query
    } else {
        format!("{}#{}", with_query, hash)
    }
}

/// Substitutes url parameters into template tokens
fn fill_template(template: &str, url_params: &UrlParams) -> String {
    if url_params.is_empty() {
        return template.to_string();
    }

    template
        .split('/')
        .map(|piece| match classify_segment(piece) {
            Segment::Param(name) => url_params
                .get(&name)
                .map(|value| urlencoding::encode(&value.to_string()).into_owned())
                .unwrap_or_else(|| piece.to_string()),
            Segment::Wildcard(name) | Segment::CatchAll(name) => url_params
                .get(&name)
                .map(|value| value.to_string().trim_start_matches('/').to_string())
                .unwrap_or_else(|| piece.to_string()),
            Segment::Static(_) => piece.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_named_param_is_encoded() {
        let params = RouteParams::new().with_url_param("id", "a b/c");
        assert_eq!(format_path("/demo/:id", Some(&params)), "/demo/a%20b%2Fc");
    }

    #[test]
    fn test_number_param() {
        let params = RouteParams::new().with_url_param("id", 23);
        assert_eq!(format_path("/d/:id", Some(&params)), "/d/23");
    }

    #[test]
    fn test_catch_all_keeps_slashes() {
        let params = RouteParams::new().with_url_param("slug", "/guides/intro");
        assert_eq!(format_path("/docs/:...slug", Some(&params)), "/docs/guides/intro");
    }

    #[test]
    fn test_missing_param_passes_through() {
        let params = RouteParams::new().with_url_param("other", "x");
        assert_eq!(format_path("/demo/:id", Some(&params)), "/demo/:id");
    }

    #[test]
    fn test_unreferenced_params_ignored() {
        let params = RouteParams::new()
            .with_url_param("id", "7")
            .with_url_param("unused", "x");
        assert_eq!(format_path("/demo/:id", Some(&params)), "/demo/7");
    }

    #[test]
    fn test_query_order_and_empty_values() {
        let params = RouteParams::new()
            .with_query("b", "2")
            .with_query("skip", "")
            .with_query("a", 1);
        assert_eq!(format_path("/settings", Some(&params)), "/settings?b=2&a=1");
    }

    #[test]
    fn test_hash_without_marker() {
        let params = RouteParams::new().with_hash("abc");
        assert_eq!(format_path("/", Some(&params)), "/#abc");
    }

    #[test]
    fn test_empty_params_keep_template() {
        assert_eq!(format_path("/demo/:id", Some(&RouteParams::new())), "/demo/:id");
    }
}
