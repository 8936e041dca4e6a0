/// Query-string helpers
///
/// Mutation helpers work on the raw `key=value` pairs of a URL and keep the
/// `#fragment` untouched. Parsing turns a search string into ordered
/// [`QueryParams`] with numeric coercion.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::params::{ParamValue, QueryParams};

/// Values that are read back as numbers: `10`, `-3.5`, `0.25` but not `001` or `1e3`
static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?(0|[1-9]\d*)(\.\d+)?$").unwrap());

/// A URL split into base, raw query pairs and fragment (with its `#`)
struct UrlParts<'a> {
    base: &'a str,
    pairs: Vec<String>,
    fragment: &'a str,
}

impl<'a> UrlParts<'a> {
    fn split(url: &'a str) -> Self {
        let (rest, fragment) = match url.find('#') {
            Some(idx) => (&url[..idx], &url[idx..]),
            None => (url, ""),
        };

        let (base, query) = match rest.split_once('?') {
            Some((base, query)) => (base, query),
            None => (rest, ""),
        };

        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            base,
            pairs,
            fragment,
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.pairs
            .iter()
            .position(|pair| pair_key(pair).eq_ignore_ascii_case(key))
    }

    fn join(self) -> String {
        if self.pairs.is_empty() {
            format!("{}{}", self.base, self.fragment)
        } else {
            format!("{}?{}{}", self.base, self.pairs.join("&"), self.fragment)
        }
    }
}

/// Decoded key of a raw `key=value` pair
fn pair_key(pair: &str) -> String {
    let raw = pair.split_once('=').map_or(pair, |(key, _)| key);
    decode_component(raw)
}

/// Form-url-decodes one component: `+` is a space, invalid escapes stay raw
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// Adds, replaces or removes a single query parameter
///
/// - absent key: `key=value` is appended
/// - present key (ASCII case-insensitive): the first occurrence is replaced in place
/// - empty value: every occurrence is removed, and `?` with it when nothing remains
///
/// The fragment is preserved.
///
/// # Examples
///
/// ```
/// use locale_router::query::add_or_update_query_param;
///
/// assert_eq!(add_or_update_query_param("/x", "a", "1"), "/x?a=1");
/// assert_eq!(add_or_update_query_param("/x?a=1&b=2", "a", "9"), "/x?a=9&b=2");
/// assert_eq!(add_or_update_query_param("/x?a=1&b=2", "a", ""), "/x?b=2");
/// assert_eq!(add_or_update_query_param("/x?a=1#h", "b", "2"), "/x?a=1&b=2#h");
/// ```
pub fn add_or_update_query_param(url: &str, key: &str, value: &str) -> String {
    let mut parts = UrlParts::split(url);

    if value.is_empty() {
        parts
            .pairs
            .retain(|pair| !pair_key(pair).eq_ignore_ascii_case(key));
        return parts.join();
    }

    let pair = format!(
        "{}={}",
        urlencoding::encode(key),
        urlencoding::encode(value)
    );
    match parts.position(key) {
        Some(idx) => parts.pairs[idx] = pair,
        None => parts.pairs.push(pair),
    }
    parts.join()
}

/// Applies [`add_or_update_query_param`] for every pair, in order
pub fn add_or_update_query_params<I, K, V>(url: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    params.into_iter().fold(url.to_string(), |acc, (key, value)| {
        add_or_update_query_param(&acc, key.as_ref(), value.as_ref())
    })
}

/// Removes every listed key, keeping the remaining pairs and the fragment
///
/// # Examples
///
/// ```
/// use locale_router::query::remove_query_params;
///
/// assert_eq!(remove_query_params("/x?a=1&b=2&c=3#h", &["a", "c"]), "/x?b=2#h");
/// assert_eq!(remove_query_params("/x?a=1", &["a"]), "/x");
/// ```
pub fn remove_query_params(url: &str, keys: &[&str]) -> String {
    let mut parts = UrlParts::split(url);
    parts
        .pairs
        .retain(|pair| !keys.contains(&pair_key(pair).as_str()));
    parts.join()
}

/// Parses a search string into ordered query parameters
///
/// The leading `?` is optional. Values matching the numeric grammar become
/// [`ParamValue::Number`]; anything else, including `001` and the empty
/// string, stays text. A repeated key keeps the last value at the position
/// of its first occurrence.
///
/// # Examples
///
/// ```
/// use locale_router::query::search_params_to_record;
/// use locale_router::ParamValue;
///
/// let query = search_params_to_record("?page=10&q=hello+world&code=001");
/// assert_eq!(query.get("page"), Some(&ParamValue::Number(10.0)));
/// assert_eq!(query.get("q"), Some(&ParamValue::Text("hello world".into())));
/// assert_eq!(query.get("code"), Some(&ParamValue::Text("001".into())));
/// ```
pub fn search_params_to_record(search: &str) -> QueryParams {
    let search = search.strip_prefix('?').unwrap_or(search);

    search
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), coerce_value(decode_component(value)))
        })
        .collect()
}

/// Numeric coercion of a decoded query value
pub fn coerce_value(value: String) -> ParamValue {
    if NUMERIC.is_match(&value) {
        if let Ok(number) = value.parse::<f64>() {
            return ParamValue::Number(number);
        }
    }
    ParamValue::Text(value)
}
