//! Solr select handler client.

use std::time::Duration;

use anyhow::Context;
use common::select_request::SelectRequest;

use crate::api::search::select_query::solr_request_params;


/// Executes select queries against one Solr core. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SolrConnector {
    client: reqwest::Client,
    select_url: String,
    label: String,
}

impl SolrConnector {
    pub fn new(select_url: impl Into<String>, label: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build solr http client")?;
        Ok(SolrConnector {
            client,
            select_url: select_url.into(),
            label: label.into(),
        })
    }

    pub fn select_url(&self) -> &str {
        &self.select_url
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sends one select query and returns the JSON response writer payload.
    /// Never retries.
    pub async fn execute(&self, request: &SelectRequest) -> anyhow::Result<serde_json::Value> {
        let t0 = std::time::Instant::now();
        let params = solr_request_params(request);

        let response = self
            .client
            .get(&self.select_url)
            .query(&params)
            .send()
            .await
            .with_context(|| format!("Failed to reach solr server {}", self.label))?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        let dt_ms = t0.elapsed().as_millis();
        tracing::debug!("SOLR RESPONSE: server = {}, len = {}, took {}ms", self.label, response_txt.len(), dt_ms);

        let data: serde_json::Value =
            serde_json::from_str(&response_txt).context("Solr response is not valid JSON")?;
        if !data.is_object() {
            anyhow::bail!("Solr response is not a JSON object: {}", response_txt);
        }
        Ok(data)
    }
}
