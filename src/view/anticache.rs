//! `anticache` template function
//!
//! Appends the asset's modification time (unix seconds) as a query string so
//! browsers refetch it after a change. Unknown assets are returned unchanged.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::routing::url::trim_leading_slash;

/// Cache-busting URL for `url`, resolved relative to `public_dir`
pub fn anticache(url: &str, public_dir: &Path) -> String {
    let path = public_dir.join(trim_leading_slash(url));

    match fs::metadata(&path).and_then(|meta| meta.modified()) {
        Ok(modified) => {
            let stamp = DateTime::<Utc>::from(modified).timestamp();
            format!("{url}?{stamp}")
        }
        Err(_) => url.to_string(),
    }
}

/// Tera function wrapper: `{{ anticache(url="/css/app.css") }}`
pub struct Anticache {
    public_dir: PathBuf,
}

impl Anticache {
    pub const fn new(public_dir: PathBuf) -> Self {
        Self { public_dir }
    }
}

impl tera::Function for Anticache {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let url = args
            .get("url")
            .and_then(Value::as_str)
            .ok_or_else(|| tera::Error::msg("anticache expects a string `url` argument"))?;
        Ok(Value::String(anticache(url, &self.public_dir)))
    }

    fn is_safe(&self) -> bool {
        true
    }
}
