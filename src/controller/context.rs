//! Per-dispatch output buffer shared by filters and handlers

use tera::Context;

use crate::error::AppError;
use crate::view::View;

/// What an action sees while it runs: the view and the response body so far
pub struct ActionContext<'a> {
    view: &'a View,
    body: String,
}

impl<'a> ActionContext<'a> {
    pub const fn new(view: &'a View) -> Self {
        Self {
            view,
            body: String::new(),
        }
    }

    /// Render `template` and append it to the response body
    pub fn display(&mut self, template: &str, context: &Context) -> Result<(), AppError> {
        let html = self.view.render(template, context)?;
        self.body.push_str(&html);
        Ok(())
    }

    /// Append raw text to the response body
    pub fn write(&mut self, text: &str) {
        self.body.push_str(text);
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }
}
