use std::fmt::Display;

use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

/* application/x-www-form-urlencoded, spaces are patched to '+' afterwards */
const FORM: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Key that is always supplied positionally by the link base.
pub const PAGE_KEY: &str = "page";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Display for QueryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(true) => f.write_str("1"),
            Self::Bool(false) => f.write_str("0"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Extra parameters carried over into every generated link, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(IndexMap<String, QueryValue>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces an existing value in place, so the original position is kept.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.0.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn form_encode(s: &str) -> String {
    utf8_percent_encode(s, FORM).to_string().replace("%20", "+")
}

/// Builds the suffix appended to every page link: `""` or `"&k1=v1&k2=v2"`.
///
/// The `page` key is dropped unconditionally.
pub fn encode_params(params: &QueryParams) -> String {
    params
        .iter()
        .filter(|(key, _)| *key != PAGE_KEY)
        .fold(String::new(), |mut query, (key, value)| {
            query.push('&');
            query.push_str(&form_encode(key));
            query.push('=');
            query.push_str(&form_encode(&value.to_string()));
            query
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_map_is_empty_suffix() {
        assert_eq!(encode_params(&QueryParams::new()), "");
    }

    #[test]
    fn page_only_is_empty_suffix() {
        let params = QueryParams::new().with("page", 4);
        assert_eq!(encode_params(&params), "");
    }

    #[test]
    fn page_is_removed_and_order_kept() {
        let params = QueryParams::new()
            .with("sort", "name")
            .with("page", 7)
            .with("dir", "desc")
            .with("active", true);

        assert_eq!(encode_params(&params), "&sort=name&dir=desc&active=1");
    }

    #[test]
    fn values_are_form_encoded() {
        let params = QueryParams::new()
            .with("q", "rust & maud")
            .with("path", "a/b?c=d")
            .with("plus", "1+1")
            .with("name", "José");

        assert_eq!(
            encode_params(&params),
            "&q=rust+%26+maud&path=a%2Fb%3Fc%3Dd&plus=1%2B1&name=Jos%C3%A9"
        );
    }

    #[test]
    fn keys_are_encoded_and_unreserved_kept() {
        let params = QueryParams::new().with("my key", "file-name_v1.2");
        assert_eq!(encode_params(&params), "&my+key=file-name_v1.2");
    }

    #[test]
    fn scalars_render_like_form_values() {
        let params = QueryParams::new()
            .with("n", -3)
            .with("ratio", 0.5)
            .with("off", false);

        assert_eq!(encode_params(&params), "&n=-3&ratio=0.5&off=0");
    }

    #[test]
    fn reinserting_keeps_position() {
        let mut params = QueryParams::new().with("a", 1).with("b", 2);
        params.insert("a", 3);

        assert_eq!(encode_params(&params), "&a=3&b=2");
    }

    #[test]
    fn deserializes_scalars_in_order() {
        let params: QueryParams =
            serde_json::from_str(r#"{ "z": "last", "page": 2, "a": 1.5, "b": true }"#).unwrap();

        assert_eq!(params.get("b"), Some(&QueryValue::Bool(true)));
        assert_eq!(encode_params(&params), "&z=last&a=1.5&b=1");
    }
}
