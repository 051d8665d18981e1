//! Search API: select query building and the Solr proxy.

pub mod select_query;

mod solr_proxy;
pub use solr_proxy::{CACHE_METADATA_KEY, ProxyResponse, SolrProxy};
