/// Route parameter values: url params, ordered query and hash
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A string-or-number parameter value
///
/// Numbers render without a trailing `.0` for integral values, so `10.0`
/// formats as `10` in URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }

    /// Whether the value renders as an empty string
    pub fn is_empty(&self) -> bool {
        matches!(self, ParamValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            // -0 renders as 0
            ParamValue::Number(n) if *n == 0.0 => f.write_str("0"),
            ParamValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(f64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Number(f64::from(value))
    }
}

/// Named path parameters (`:id` → value)
pub type UrlParams = HashMap<String, ParamValue>;

/// Query parameters in insertion order
///
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(Vec<(String, ParamValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    /// Builder form of [`QueryParams::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |acc, (k, v)| acc.with(k, v))
    }
}

/// Parameters used to render a localized path
///
/// # Examples
///
/// ```
/// use locale_router::RouteParams;
///
/// let params = RouteParams::new()
///     .with_url_param("id", "42")
///     .with_query("tab", "billing")
///     .with_hash("top");
///
/// assert_eq!(params.query.get("tab").unwrap().to_string(), "billing");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams {
    pub url_params: UrlParams,
    pub query: QueryParams,
    pub hash: String,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.url_params.insert(name.into(), value.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.query.insert(key, value);
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.url_params.is_empty() && self.query.is_empty() && self.hash.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_number_display() {
        assert_eq!(ParamValue::from(10).to_string(), "10");
        assert_eq!(ParamValue::from(10.0).to_string(), "10");
        assert_eq!(ParamValue::from(-3.5).to_string(), "-3.5");
        assert_eq!(ParamValue::from(-0.0).to_string(), "0");
        assert_eq!(ParamValue::from(129978).to_string(), "129978");
    }

    #[test]
    fn test_query_insert_keeps_position() {
        let mut query = QueryParams::new().with("a", "1").with("b", "2");
        query.insert("a", "3");

        let pairs: Vec<(String, String)> = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "3".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_empty_value() {
        assert!(ParamValue::from("").is_empty());
        assert!(!ParamValue::from(0).is_empty());
    }
}
