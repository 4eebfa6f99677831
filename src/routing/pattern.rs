//! Route template compilation
//!
//! Turns a template such as `posts/{id:\d+}/{slug}` into an anchored,
//! case-insensitive regular expression with one named group per placeholder.
//!
//! Templates are not validated. A malformed template simply produces a
//! pattern that never matches or matches too much; only a pattern the regex
//! engine refuses outright is reported, as `AppError::InvalidRoute`.

use regex::{Captures, Regex, RegexBuilder};
use std::sync::LazyLock;

use crate::error::AppError;

/// `{name}`
static BARE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z-]+)\}").unwrap());

/// `{name:regex}`
static CONSTRAINED_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z-]+):([^\}]+)\}").unwrap());

/// What a bare placeholder accepts
const DEFAULT_SEGMENT: &str = "[a-z-]+";

/// A compiled route template
#[derive(Debug, Clone)]
pub struct RoutePattern {
    template: String,
    regex: Regex,
}

impl RoutePattern {
    /// Compile a route template
    ///
    /// Steps, in order:
    /// 1. path separators stay literal (`/` is not special to the engine)
    /// 2. `{name}` becomes a named group matching `[a-z-]+`
    /// 3. `{name:regex}` becomes a named group matching `regex` verbatim
    /// 4. the whole pattern is anchored and made case-insensitive
    pub fn compile(template: &str) -> Result<Self, AppError> {
        let source = BARE_PLACEHOLDER.replace_all(template, |caps: &Captures| {
            format!("(?P<{}>{DEFAULT_SEGMENT})", group_name(&caps[1]))
        });
        let source = CONSTRAINED_PLACEHOLDER.replace_all(&source, |caps: &Captures| {
            format!("(?P<{}>{})", group_name(&caps[1]), &caps[2])
        });

        let regex = RegexBuilder::new(&format!("^{source}$"))
            .case_insensitive(true)
            .build()
            .map_err(|source| AppError::InvalidRoute {
                template: template.to_string(),
                source,
            })?;

        Ok(Self {
            template: template.to_string(),
            regex,
        })
    }

    /// The template this pattern was compiled from
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The compiled regular expression source
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Match a whole path, returning `(parameter, value)` for every named
    /// group that took part in the match
    pub fn captures(&self, path: &str) -> Option<Vec<(String, String)>> {
        let caps = self.regex.captures(path)?;
        let values = self
            .regex
            .capture_names()
            .flatten()
            .filter_map(|name| {
                caps.name(name)
                    .map(|m| (param_name(name), m.as_str().to_string()))
            })
            .collect();
        Some(values)
    }
}

/// Group names may not contain `-`; placeholder names never contain `_`,
/// so the mapping is reversible.
fn group_name(placeholder: &str) -> String {
    placeholder.replace('-', "_")
}

fn param_name(group: &str) -> String {
    group.replace('_', "-")
}
