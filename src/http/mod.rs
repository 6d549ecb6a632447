//! HTTP transport module
//!
//! A thin wrapper over `reqwest` implementing the transport contract the
//! rest of the crate depends on: `request(method, url, query, headers,
//! body) -> (status, headers, body)`. Retry and backoff policy belong to
//! the caller's transport stack, not here; each call maps to exactly one
//! wire request.

mod client;

pub use client::{ApiResponse, HttpTransport, TransportConfig};

#[cfg(test)]
mod tests;
