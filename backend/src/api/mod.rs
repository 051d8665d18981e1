//! Proxy API exports.

pub mod search;
