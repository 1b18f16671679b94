//! HTTP networking module
//!
//! Defines the transport seam and the reqwest-backed client behind it.

mod client;
mod transport;
mod user_agent;

pub use client::HttpClient;
pub use transport::{HttpTransport, SearchResponse};
pub use user_agent::user_agent;
