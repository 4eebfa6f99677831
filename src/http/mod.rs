//! HTTP protocol layer module
//!
//! Response builders, decoupled from routing and controllers.

pub mod response;

pub use response::{build_500_response, build_page_response};
