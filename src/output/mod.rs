//! Output module
//!
//! Console listing of results and the on-disk copy of the raw response.

pub mod printer;
mod saver;

pub use printer::{write_result, write_results};
pub use saver::ResponseSaver;
