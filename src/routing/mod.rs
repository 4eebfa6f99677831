//! Routing module
//!
//! Regex-based URL routing:
//! - Route templates with `{name}` and `{name:regex}` placeholders
//! - Ordered route table, first match wins
//! - Dispatch to controller actions by name

mod inflect;
mod params;
mod pattern;
mod router;
mod table;
pub mod url;

pub use inflect::{to_camel_case, to_studly_caps};
pub use params::Params;
pub use pattern::RoutePattern;
pub use router::Router;
pub use table::{Route, RouteTable};
