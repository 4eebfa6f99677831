//! Front-controller web skeleton
//!
//! A regex URL router dispatching to controller actions wrapped in
//! before/after filters, Tera views, and an error boundary that turns every
//! fault into a 404 or 500 page.

pub mod app;
pub mod boundary;
pub mod config;
pub mod controller;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
pub mod state;
pub mod view;

pub use error::{AppError, Fault};
