//! Querystring parsing with support for repeated keys without `[]` syntax.
//!
//! Solr expects `fq=a&fq=b`, not `fq[]=a&fq[]=b`, so the usual form parsers
//! that either overwrite or demand brackets don't fit here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParamValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            ParamValue::Single(s) => Some(s.as_str()),
            ParamValue::Multiple(_) => None,
        }
    }

    /// First value, whether scalar or repeated.
    pub fn first(&self) -> Option<&str> {
        match self {
            ParamValue::Single(s) => Some(s.as_str()),
            ParamValue::Multiple(v) => v.first().map(|s| s.as_str()),
        }
    }

    /// All values, with a scalar promoted to a one element list.
    pub fn values(&self) -> Vec<&str> {
        match self {
            ParamValue::Single(s) => vec![s.as_str()],
            ParamValue::Multiple(v) => v.iter().map(|s| s.as_str()).collect(),
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, ParamValue::Multiple(_))
    }

    fn push(&mut self, value: String) {
        match self {
            ParamValue::Multiple(v) => v.push(value),
            ParamValue::Single(existing) => {
                let existing = std::mem::take(existing);
                *self = ParamValue::Multiple(vec![existing, value]);
            }
        }
    }
}

/// Raw (not decoded) querystring parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryParams {
    params: BTreeMap<String, ParamValue>,
}

impl QueryParams {
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.params.iter()
    }

    /// Adds a value, turning an existing scalar into a sequence.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.params.get_mut(key) {
            Some(existing) => existing.push(value),
            None => {
                self.params.insert(key.to_string(), ParamValue::Single(value));
            }
        }
    }
}

/// Splits on `&`, then each pair on the first `=`. Keys and values are kept
/// encoded; a pair without `=` keeps its key with an empty value.
pub fn parse_query_string(raw: &str) -> QueryParams {
    let mut params = QueryParams::default();
    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.insert(name, value);
    }
    params
}

/// Form-style decoding of a querystring value: `+` is a
/// space and `%XX` sequences are bytes. Invalid UTF-8 is replaced.
pub fn url_decode(value: &str) -> String {
    let value = value.replace('+', " ");
    let bytes = urlencoding::decode_binary(value.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
