//! Logger module
//!
//! Provides logging utilities for the server including:
//! - Server lifecycle logging
//! - Access logging in combined/common format
//! - Error logging, with uncaught faults going to the daily error log

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup. Uncaught faults are only
/// written to `app.log_dir` when errors are not shown to the client.
pub fn init(config: &Config) -> std::io::Result<()> {
    let error_log_dir = (!config.app.show_errors).then_some(config.app.log_dir.as_str());
    writer::init(config.logging.access_log_file.as_deref(), error_log_dir)
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Front controller started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Views: {}", config.app.views_dir));
    write_info(&format!("Public assets: {}", config.app.public_dir));
    if config.app.show_errors {
        write_info("Errors: shown in responses");
    } else {
        write_info(&format!("Errors: logged to {}/", config.app.log_dir));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_route_registered(template: &str, controller: Option<&str>, action: Option<&str>) {
    write_info(&format!(
        "[Route] '{template}' -> {}::{}",
        controller.unwrap_or("{controller}"),
        action.unwrap_or("{action}")
    ));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_info(message: &str) {
    write_info(message);
}

/// Record an uncaught fault in the error log
pub fn log_uncaught(entry: &str) {
    write_error(entry);
}

pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}
