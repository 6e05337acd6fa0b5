//! HTTP protocol layer module
//!
//! Response builders for the two outcomes a request can have.

pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_json_response};
