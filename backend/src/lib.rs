//! Federated search proxy backed by Solr.
//!
//! - **`api`**: querystring to select query translation and the proxy itself.
//! - **`db_utils`**: the Solr HTTP connector.
//! - **`server_extra`**: axum router and handlers.
//! - **`settings`**: configuration read from the environment.

pub mod api;
pub mod db_utils;
pub mod server_extra;
pub mod settings;
