//! Request handler module
//!
//! Maps a request path onto a file under the root directory and serves it if it is JSON.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
