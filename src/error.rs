//! Error types for routing, dispatch and rendering.
//!
//! `AppError` names what went wrong. `Fault` wraps it with the place it was
//! raised and a captured backtrace, which is what the error boundary reports.

use std::any::Any;
use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;

/// Everything that can abort a request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No route table entry matches the effective path.
    #[error("No route matched for '{path}'")]
    RouteNotFound { path: String },

    /// The resolved controller is not registered.
    #[error("Controller class {controller} not found")]
    ControllerNotFound { controller: String },

    /// The route named an action by its internal, suffixed name.
    #[error(
        "Method {action} in controller {controller} cannot be called directly - remove the Action suffix to call this method"
    )]
    DirectActionCallForbidden { action: String, controller: String },

    /// The controller has no handler with the computed internal name.
    #[error("Method {handler} not found in controller {controller}")]
    HandlerNotFound { handler: String, controller: String },

    /// A route template compiled to something the regex engine rejects.
    #[error("Invalid route '{template}': {source}")]
    InvalidRoute {
        template: String,
        #[source]
        source: regex::Error,
    },

    /// Template lookup or rendering failure.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A handler panicked; carries the panic message.
    #[error("Panicked: {0}")]
    Panic(String),
}

impl AppError {
    /// Status code handed to the error boundary: 404 for an unmatched route,
    /// 500 for everything else.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::RouteNotFound { .. } => 404,
            _ => 500,
        }
    }

    /// Short name of the error kind, used in diagnostics and the error log.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RouteNotFound { .. } => "RouteNotFound",
            Self::ControllerNotFound { .. } => "ControllerNotFound",
            Self::DirectActionCallForbidden { .. } => "DirectActionCallForbidden",
            Self::HandlerNotFound { .. } => "HandlerNotFound",
            Self::InvalidRoute { .. } => "InvalidRoute",
            Self::Template(_) => "Template",
            Self::Io(_) => "Io",
            Self::Panic(_) => "Panic",
        }
    }
}

/// An `AppError` together with where it was raised.
///
/// Built through `From`, so `?` records the location of the `?` itself. The
/// backtrace is always captured, whatever `RUST_BACKTRACE` says.
pub struct Fault {
    error: AppError,
    location: &'static Location<'static>,
    backtrace: Backtrace,
}

impl Fault {
    pub const fn error(&self) -> &AppError {
        &self.error
    }

    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub const fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub const fn status_code(&self) -> u16 {
        self.error.status_code()
    }

    /// Fault for a panic caught with `catch_unwind`
    #[track_caller]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self::from(AppError::Panic(message))
    }
}

impl From<AppError> for Fault {
    #[track_caller]
    fn from(error: AppError) -> Self {
        Self {
            error,
            location: Location::caller(),
            backtrace: Backtrace::force_capture(),
        }
    }
}

impl From<tera::Error> for Fault {
    #[track_caller]
    fn from(error: tera::Error) -> Self {
        Self::from(AppError::from(error))
    }
}

impl From<std::io::Error> for Fault {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        Self::from(AppError::from(error))
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("error", &self.error)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::backtrace::BacktraceStatus;

    #[test]
    fn test_status_code_normalization() {
        let not_found = AppError::RouteNotFound {
            path: "missing".to_string(),
        };
        assert_eq!(not_found.status_code(), 404);

        let others = [
            AppError::ControllerNotFound {
                controller: "App\\Controllers\\Nope".to_string(),
            },
            AppError::DirectActionCallForbidden {
                action: "indexAction".to_string(),
                controller: "App\\Controllers\\Home".to_string(),
            },
            AppError::HandlerNotFound {
                handler: "missingAction".to_string(),
                controller: "App\\Controllers\\Home".to_string(),
            },
            AppError::Io(std::io::Error::other("disk")),
            AppError::Panic("boom".to_string()),
        ];
        for error in others {
            assert_eq!(error.status_code(), 500, "{}", error.kind());
        }
    }

    #[test]
    fn test_handler_not_found_message() {
        let error = AppError::HandlerNotFound {
            handler: "editAction".to_string(),
            controller: "App\\Controllers\\Posts".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Method editAction not found in controller App\\Controllers\\Posts"
        );
    }

    #[test]
    fn test_fault_records_location() {
        let line = line!() + 1;
        let fault = Fault::from(AppError::RouteNotFound { path: String::new() });
        assert!(fault.location().file().ends_with("error.rs"));
        assert_eq!(fault.location().line(), line);
        assert_eq!(fault.status_code(), 404);
        assert_eq!(fault.error().kind(), "RouteNotFound");
    }

    #[test]
    fn test_backtrace_always_captured() {
        let fault = Fault::from(AppError::RouteNotFound { path: String::new() });
        assert_ne!(fault.backtrace().status(), BacktraceStatus::Disabled);
    }

    #[test]
    fn test_fault_from_panic_payload() {
        let payload = std::panic::catch_unwind(|| panic!("index {} out of range", 3)).unwrap_err();
        let fault = Fault::from_panic(&*payload);
        assert_eq!(fault.status_code(), 500);
        assert_eq!(fault.to_string(), "Panicked: index 3 out of range");

        let payload = std::panic::catch_unwind(|| panic!("static message")).unwrap_err();
        assert_eq!(Fault::from_panic(&*payload).to_string(), "Panicked: static message");
    }

    #[test]
    fn test_question_mark_records_call_site() {
        fn fails() -> Result<(), Fault> {
            Err::<(), _>(AppError::ControllerNotFound {
                controller: "X".to_string(),
            })?;
            Ok(())
        }

        let fault = fails().unwrap_err();
        assert!(fault.location().file().ends_with("error.rs"));
        assert_eq!(fault.error().kind(), "ControllerNotFound");
    }
}
