//! Select query proxy: querystring in, Solr JSON with cache metadata out.

use common::query_params::parse_query_string;
use serde_json::{Map, Value, json};

use crate::{
    api::search::select_query::build_select_request,
    db_utils::solr_utils::SolrConnector,
    settings::ProxySettings,
};

pub const CACHE_METADATA_KEY: &str = "#cache";


#[derive(Debug, Clone, PartialEq)]
pub struct ProxyResponse {
    /// The Solr JSON response writer payload plus the `#cache` key, or just
    /// the `#cache` key when the query failed.
    pub data: Value,
    pub max_age: u64,
}

#[derive(Debug, Clone)]
pub struct SolrProxy {
    settings: ProxySettings,
    connector: SolrConnector,
}

impl SolrProxy {
    pub fn new(settings: ProxySettings) -> anyhow::Result<Self> {
        let connector = SolrConnector::new(settings.server_url.clone(), settings.server_label.clone(), settings.timeout)?;
        Ok(SolrProxy { settings, connector })
    }

    pub fn settings(&self) -> &ProxySettings {
        &self.settings
    }

    /// Runs the select query described by `raw_query`. Backend failures are
    /// logged and degrade to an empty payload; this never returns an error.
    pub async fn get_results_json(&self, raw_query: &str) -> ProxyResponse {
        let params = parse_query_string(raw_query);
        let request = build_select_request(&params);

        let mut data = match self.connector.execute(&request).await {
            Ok(Value::Object(data)) => data,
            Ok(other) => {
                tracing::error!(
                    "solr proxy: unexpected response from {} (index {}) for query {:?}: {}",
                    self.connector.label(),
                    self.settings.index_id,
                    raw_query,
                    other
                );
                Map::new()
            }
            Err(e) => {
                tracing::error!(
                    "solr proxy: query failed on {} (index {}) for query {:?}: {:#}",
                    self.connector.label(),
                    self.settings.index_id,
                    raw_query,
                    e
                );
                Map::new()
            }
        };

        let max_age = self.settings.max_age();
        data.insert(CACHE_METADATA_KEY.to_string(), cache_metadata(max_age));
        ProxyResponse {
            data: Value::Object(data),
            max_age,
        }
    }
}

/// Vary by the entire url, path plus query args.
fn cache_metadata(max_age: u64) -> Value {
    json!({
        "contexts": ["url"],
        "max-age": max_age,
    })
}
