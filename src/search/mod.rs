//! Search execution module
//!
//! Sends a built query through a transport and checks the response status.

mod executor;

pub use executor::SearchExecutor;
