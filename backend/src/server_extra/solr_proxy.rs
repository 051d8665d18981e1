use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::RawQuery,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::search::SolrProxy;


pub fn cache_control_value(max_age: u64) -> String {
    format!("max-age={max_age}, public, s-maxage={max_age}")
}

/// Always 200: a failed Solr query still answers with an empty payload
/// and the usual cache headers.
pub async fn get_results_json(
    Extension(proxy): Extension<Arc<SolrProxy>>,
    RawQuery(query): RawQuery,
) -> Response {
    let response = proxy.get_results_json(query.as_deref().unwrap_or("")).await;
    let headers = [(header::CACHE_CONTROL, cache_control_value(response.max_age))];
    (StatusCode::OK, headers, Json(response.data)).into_response()
}

pub async fn get_search_app_settings(Extension(proxy): Extension<Arc<SolrProxy>>) -> Response {
    let headers = [(header::CACHE_CONTROL, "no-cache".to_string())];
    (StatusCode::OK, headers, Json(proxy.settings().search_app.clone())).into_response()
}
