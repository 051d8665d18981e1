//! Structured Solr select query, built per request from the querystring.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::search_const::{
    DEFAULT_FACET_LIMIT, DEFAULT_FACET_SORT, DEFAULT_HIGHLIGHT_FIELD, DEFAULT_QUERY, DEFAULT_ROWS,
    DEFAULT_SORT_FIELD, DEFAULT_START, HIGHLIGHT_SIMPLE_POSTFIX, HIGHLIGHT_SIMPLE_PREFIX,
};


#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("`{key}` is not a valid integer: {value:?}")]
    InvalidInteger { key: String, value: String },
    #[error("`{key}` must be greater than zero: {value:?}")]
    NotPositive { key: String, value: String },
    #[error("`{key}` is not a valid boolean: {value:?}")]
    InvalidBoolean { key: String, value: String },
    #[error("sort {0:?} has no direction, expected `<field>=<asc|desc>`")]
    MissingSortDirection(String),
    #[error("unknown sort direction {0:?}")]
    InvalidSortDirection(String),
    #[error("filter query {0:?} is not of the form `<field>:<value>`")]
    MalformedFilterQuery(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ParamError::InvalidSortDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    pub field: String,
    pub direction: SortDirection,
}

impl Default for SortField {
    fn default() -> Self {
        SortField {
            field: DEFAULT_SORT_FIELD.to_string(),
            direction: SortDirection::Desc,
        }
    }
}

impl FromStr for SortField {
    type Err = ParamError;

    /// Parses the app's `<field>=<direction>` form, already URL-decoded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((field, direction)) = s.split_once('=') else {
            return Err(ParamError::MissingSortDirection(s.to_string()));
        };
        Ok(SortField {
            field: field.to_string(),
            direction: direction.parse()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    pub field: String,
    pub simple_prefix: String,
    pub simple_postfix: String,
    pub use_phrase_highlighter: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            field: DEFAULT_HIGHLIGHT_FIELD.to_string(),
            simple_prefix: HIGHLIGHT_SIMPLE_PREFIX.to_string(),
            simple_postfix: HIGHLIGHT_SIMPLE_POSTFIX.to_string(),
            use_phrase_highlighter: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSetConfig {
    pub limit: i64,
    pub sort: String,
    pub fields: Vec<String>,
}

impl Default for FacetSetConfig {
    fn default() -> Self {
        FacetSetConfig {
            limit: DEFAULT_FACET_LIMIT,
            sort: DEFAULT_FACET_SORT.to_string(),
            fields: Vec::new(),
        }
    }
}

/// A named filter query: `key` is `<field>=<value>`, `query` is `<field>:<value>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub key: String,
    pub query: String,
}

impl FromStr for FilterQuery {
    type Err = ParamError;

    /// Parses an already URL-decoded `<field>:<value>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((field, value)) = s.split_once(':') else {
            return Err(ParamError::MalformedFilterQuery(s.to_string()));
        };
        Ok(FilterQuery {
            key: format!("{field}={value}"),
            query: s.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectRequest {
    pub query: String,
    pub start: u64,
    pub rows: u64,
    pub sort: SortField,
    pub highlighting: HighlightConfig,
    pub facet_set: FacetSetConfig,
    pub filter_queries: Vec<FilterQuery>,
}

impl Default for SelectRequest {
    fn default() -> Self {
        SelectRequest {
            query: DEFAULT_QUERY.to_string(),
            start: DEFAULT_START,
            rows: DEFAULT_ROWS,
            sort: SortField::default(),
            highlighting: HighlightConfig::default(),
            facet_set: FacetSetConfig::default(),
            filter_queries: Vec::new(),
        }
    }
}
