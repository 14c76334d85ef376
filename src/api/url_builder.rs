//! URL construction for service endpoints

use std::fmt;
use std::str::FromStr;

/// A primitive query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(s) => f.write_str(s),
            QueryValue::Integer(n) => write!(f, "{}", n),
            QueryValue::Float(n) => write_float(f, *n),
        }
    }
}

/// Numbers render the way JavaScript's `String(number)` does, so services
/// see `Infinity`, `NaN` and `1e+21` rather than Rust's spellings.
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => f.write_str(&exp),
        }
    } else {
        write!(f, "{}", n)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Integer(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Integer(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Integer(value.into())
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

/// Ordered query parameters. Insertion order is preserved on serialization
/// and duplicate keys are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize as `application/x-www-form-urlencoded` without the leading `?`.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            serializer.append_pair(key, &value.to_string());
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}

/// A single `key=value` pair as typed on the command line.
///
/// The value is kept as typed (`id=007` sends `007`). It may be empty
/// (`flag=`), the key may not.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPair {
    pub key: String,
    pub value: QueryValue,
}

impl FromStr for QueryPair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| format!("Invalid query parameter '{}': expected key=value", s))?;
        if key.is_empty() {
            return Err(format!("Invalid query parameter '{}': empty key", s));
        }
        Ok(QueryPair {
            key: key.to_string(),
            value: QueryValue::Text(value.to_string()),
        })
    }
}

impl FromIterator<QueryPair> for QueryParams {
    fn from_iter<I: IntoIterator<Item = QueryPair>>(iter: I) -> Self {
        iter.into_iter().map(|p| (p.key, p.value)).collect()
    }
}

/// Join `base` and `path` with exactly one slash and append the query string
/// when `query` is non-empty.
///
/// # Examples
///
/// ```
/// use hookdash::api::{build_api_url, QueryParams};
///
/// let url = build_api_url(
///     "http://localhost:8000/",
///     "status/activity",
///     &QueryParams::new().with("limit", 5),
/// );
/// assert_eq!(url, "http://localhost:8000/status/activity?limit=5");
/// ```
pub fn build_api_url(base: &str, path: &str, query: &QueryParams) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    let mut url = if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    };

    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.encode());
    }

    url
}
