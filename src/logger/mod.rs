//! Logger module
//!
//! Provides logging utilities for the server:
//! - Server lifecycle logging
//! - Error and warning logging
//! - File-based logging support
//!
//! Requests are not logged.

pub mod writer;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.level,
        config.logging.info_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write warning to error log
fn write_warning(message: &str) {
    match writer::get() {
        Some(w) => w.write_warning(message),
        None => eprintln!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Announce the bound listener. The first line is the startup line.
pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info(&format!("Server running on port {}", addr.port()));
    write_info(&format!("[CONFIG] Listening on: http://{addr}"));
    write_info(&format!(
        "[CONFIG] Serving *.json from: {}",
        config.files.root_dir.display()
    ));
    match config.server.workers {
        Some(workers) => write_info(&format!("[CONFIG] Worker threads: {workers}")),
        None => write_info("[CONFIG] Worker threads: default (CPU cores)"),
    }
}

pub fn log_shutdown(signal: &str) {
    write_info(&format!("[SIGNAL] {signal} received, shutting down"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_warning(&format!("[WARN] {message}"));
}
