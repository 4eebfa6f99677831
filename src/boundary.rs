//! Error boundary
//!
//! Last stop for every fault raised while handling a request. The status is
//! 404 for an unmatched route and 500 for anything else. With `show_errors`
//! the page is a developer diagnostic; otherwise the fault is written to the
//! error log and the `<status>.html` template is rendered.

use tera::{Context, Tera};

use crate::error::Fault;
use crate::logger;
use crate::view::View;

/// Status and body of a finished request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub const fn ok(body: String) -> Self {
        Self { status: 200, body }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ErrorBoundary {
    show_errors: bool,
}

impl ErrorBoundary {
    pub const fn new(show_errors: bool) -> Self {
        Self { show_errors }
    }

    /// Turn a fault into the page sent to the client
    pub fn handle(&self, fault: &Fault, view: &View) -> Page {
        let status = fault.status_code();

        if self.show_errors {
            return Page {
                status,
                body: diagnostic_html(fault),
            };
        }

        logger::log_uncaught(&log_entry(fault));
        Page {
            status,
            body: status_page(status, view),
        }
    }
}

const DIAGNOSTIC_TEMPLATE: &str = "<h1>Fatal error</h1>\
<p>Uncaught exception: '{{ kind }}'</p>\
<p>Message: '{{ message }}'</p>\
<p>Stack trace:<pre>{{ trace }}</pre></p>\
<p>Thrown in '{{ file }}' on line {{ line }}</p>";

/// Developer-facing HTML description of a fault
pub fn diagnostic_html(fault: &Fault) -> String {
    let location = fault.location();
    let mut context = Context::new();
    context.insert("kind", fault.error().kind());
    context.insert("message", &fault.to_string());
    context.insert("trace", &fault.backtrace().to_string());
    context.insert("file", location.file());
    context.insert("line", &location.line());

    Tera::one_off(DIAGNOSTIC_TEMPLATE, &context, true).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to render diagnostic: {e}"));
        format!(
            "<h1>Fatal error</h1><pre>{}</pre>",
            tera::escape_html(&fault.to_string())
        )
    })
}

/// One error log entry for a fault
pub fn log_entry(fault: &Fault) -> String {
    let location = fault.location();
    [
        format!(
            "Uncaught exception: '{}' with message '{}'",
            fault.error().kind(),
            fault
        ),
        format!("Stack trace: {}", fault.backtrace()),
        format!(
            "Thrown in '{}' on line {}",
            location.file(),
            location.line()
        ),
    ]
    .join("\n")
}

/// Render `<status>.html`, falling back to plain text
fn status_page(status: u16, view: &View) -> String {
    let template = format!("{status}.html");
    if !view.has_template(&template) {
        return fallback_text(status).to_string();
    }
    let mut context = Context::new();
    context.insert("status_code", &status);

    view.render(&template, &context).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to render {template}: {e}"));
        fallback_text(status).to_string()
    })
}

const fn fallback_text(status: u16) -> &'static str {
    match status {
        404 => "404 Not Found",
        _ => "500 Internal Server Error",
    }
}
