//! View module
//!
//! Thin wrapper around a Tera environment. Templates are loaded once from the
//! views directory; the environment is built at startup and shared by
//! reference, never re-created per request.

mod anticache;

pub use anticache::{anticache, Anticache};

use std::path::{Path, PathBuf};
use tera::{Context, Tera};

use crate::error::AppError;

pub struct View {
    tera: Tera,
    public_dir: PathBuf,
}

impl View {
    /// Load every template under `views_dir` and register `anticache`
    /// against `public_dir`
    pub fn new(views_dir: impl AsRef<Path>, public_dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let glob = format!("{}/**/*", views_dir.as_ref().display());
        let tera = Tera::new(&glob)?;
        Ok(Self::with_engine(tera, public_dir.into()))
    }

    /// Build a view from in-memory `(name, source)` templates
    pub fn from_raw_templates(
        templates: &[(&str, &str)],
        public_dir: impl Into<PathBuf>,
    ) -> Result<Self, AppError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.iter().copied())?;
        Ok(Self::with_engine(tera, public_dir.into()))
    }

    fn with_engine(mut tera: Tera, public_dir: PathBuf) -> Self {
        tera.register_function("anticache", Anticache::new(public_dir.clone()));
        Self { tera, public_dir }
    }

    /// Render a template with the given data
    pub fn render(&self, template: &str, context: &Context) -> Result<String, AppError> {
        Ok(self.tera.render(template, context)?)
    }

    pub fn has_template(&self, template: &str) -> bool {
        self.tera.get_template_names().any(|name| name == template)
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }
}
