//! HTTP router for the proxy and the search app settings.

use std::sync::Arc;

use axum::{
    Extension, Router,
    extract::Request,
    middleware::Next,
    response::Response,
    routing::get,
};

use crate::api::search::SolrProxy;

pub mod solr_proxy;

pub const PROXY_ROUTE: &str = "/search-api-federated-solr/search";
pub const SETTINGS_ROUTE: &str = "/search-api-federated-solr/search-app/settings";


pub fn router(proxy: Arc<SolrProxy>) -> Router {
    Router::new()
        .route(PROXY_ROUTE, get(solr_proxy::get_results_json))
        .route(SETTINGS_ROUTE, get(solr_proxy::get_search_app_settings))
        .layer(axum::middleware::from_fn(log_request))
        .layer(Extension(proxy))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    tracing::debug!("{} {} -> {}", method, path, response.status());
    response
}
