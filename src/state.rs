// Application state module
// Everything a request needs, built once at startup

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};

use crate::app;
use crate::boundary::{ErrorBoundary, Page};
use crate::config::Config;
use crate::controller::{ActionContext, ControllerRegistry};
use crate::error::{AppError, Fault};
use crate::routing::Router;
use crate::view::View;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Held for one synchronous dispatch at a time
    router: Mutex<Router>,
    controllers: ControllerRegistry,
    view: View,
    boundary: ErrorBoundary,
}

impl AppState {
    /// Build the view, controllers and routes described by `config`
    pub fn new(config: Config) -> Result<Self, AppError> {
        let view = View::new(&config.app.views_dir, &config.app.public_dir)?;
        Self::with_view(config, view)
    }

    /// Same as `new` with an already built view
    pub fn with_view(config: Config, view: View) -> Result<Self, AppError> {
        let mut controllers = ControllerRegistry::new();
        app::register_controllers(&mut controllers);

        let mut router = Router::new();
        app::register_routes(&mut router, &config.routes)?;

        Ok(Self {
            boundary: ErrorBoundary::new(config.app.show_errors),
            config,
            router: Mutex::new(router),
            controllers,
            view,
        })
    }

    /// Route one request target and produce its page
    ///
    /// A panic in a filter or handler becomes a 500 fault like any other.
    pub fn serve(&self, url: &str) -> Page {
        let mut ctx = ActionContext::new(&self.view);
        let outcome = {
            let mut router = self.router.lock().unwrap_or_else(PoisonError::into_inner);
            panic::catch_unwind(AssertUnwindSafe(|| {
                router.dispatch(url, &self.controllers, &mut ctx)
            }))
            .unwrap_or_else(|payload| Err(Fault::from_panic(&*payload)))
        };

        match outcome {
            Ok(()) => Page::ok(ctx.into_body()),
            Err(fault) => self.boundary.handle(&fault, &self.view),
        }
    }
}
