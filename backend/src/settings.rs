//! Proxy configuration, read once from the environment at startup.

use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;
use common::{
    search_app_settings::SearchAppSettings,
    search_const::{
        DEFAULT_CACHE_MAX_AGE, DEFAULT_NO_RESULTS_TEXT, DEFAULT_PAGE_BUTTONS, DEFAULT_ROWS,
        DEFAULT_SEARCH_APP_PATH, DEFAULT_SEARCH_PROMPT_TEXT,
    },
};

use crate::server_extra::PROXY_ROUTE;


/// Connection details of the Solr server backing the search index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConnectorConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub core: String,
}

impl Default for ServerConnectorConfig {
    fn default() -> Self {
        ServerConnectorConfig {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 8983,
            path: "/solr".to_string(),
            core: String::new(),
        }
    }
}

impl ServerConnectorConfig {
    /// `scheme://host:port[path][/core]/select`
    pub fn select_url(&self) -> String {
        let mut url = format!("{}://{}:{}", self.scheme, self.host, self.port);
        url.push_str(&self.path);
        if !self.core.is_empty() {
            url.push('/');
            url.push_str(&self.core);
        }
        url.push_str("/select");
        url
    }
}

#[derive(Debug, Clone)]
pub struct ProxySettings {
    pub index_id: String,
    pub server_id: String,
    pub server_label: String,
    pub server_url: String,
    pub timeout: Duration,
    /// Browser and shared cache max-age, `None` when not configured.
    pub cache_max_age: Option<u64>,
    pub bind_addr: SocketAddr,
    pub search_app: SearchAppSettings,
}

impl ProxySettings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or(default.to_string());

        let connector = ServerConnectorConfig {
            scheme: var("SOLR_SCHEME", "http"),
            host: var("SOLR_HOST", "localhost"),
            port: parse_var(&lookup, "SOLR_PORT")?.unwrap_or(8983),
            path: var("SOLR_PATH", "/solr"),
            core: var("SOLR_CORE", ""),
        };
        let server_url = lookup("SOLR_SERVER_URL").unwrap_or_else(|| connector.select_url());
        let server_id = var("SOLR_SERVER_ID", "solr");
        let server_label = lookup("SOLR_SERVER_LABEL").unwrap_or(server_id.clone());
        let index_id = var("SEARCH_INDEX_ID", "federated_search_index");

        let search_app = SearchAppSettings {
            path: var("SEARCH_APP_PATH", DEFAULT_SEARCH_APP_PATH),
            index_id: index_id.clone(),
            has_site_name_property: parse_var(&lookup, "SEARCH_APP_HAS_SITE_NAME_PROPERTY")?.unwrap_or(false),
            set_search_site: parse_var(&lookup, "SEARCH_APP_SET_SEARCH_SITE")?.unwrap_or(false),
            no_results_text: var("SEARCH_APP_NO_RESULTS_TEXT", DEFAULT_NO_RESULTS_TEXT),
            search_prompt_text: var("SEARCH_APP_SEARCH_PROMPT_TEXT", DEFAULT_SEARCH_PROMPT_TEXT),
            rows: parse_var(&lookup, "SEARCH_APP_ROWS")?.unwrap_or(DEFAULT_ROWS),
            page_buttons: parse_var(&lookup, "SEARCH_APP_PAGE_BUTTONS")?.unwrap_or(DEFAULT_PAGE_BUTTONS),
            server_url: server_url.clone(),
            proxy_url: PROXY_ROUTE.to_string(),
        };

        Ok(ProxySettings {
            index_id,
            server_id,
            server_label,
            server_url,
            timeout: Duration::from_secs(parse_var(&lookup, "SOLR_TIMEOUT_SECS")?.unwrap_or(10)),
            cache_max_age: parse_var(&lookup, "CACHE_PAGE_MAX_AGE")?,
            bind_addr: parse_var(&lookup, "BIND_ADDR")?.unwrap_or(SocketAddr::from(([127, 0, 0, 1], 8080))),
            search_app,
        })
    }

    /// Honors the configured max age, defaulting to one hour to keep load
    /// down for autocomplete queries.
    pub fn max_age(&self) -> u64 {
        self.cache_max_age.unwrap_or(DEFAULT_CACHE_MAX_AGE)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{} has an invalid value: {:?}", key, value)),
    }
}
