//! Common library exports shared between the proxy and its clients.

extern crate serde;


pub mod query_params;
pub mod select_request;
pub mod search_app_settings;
pub mod search_const;
pub mod document_remap;
