//! Router
//!
//! Owns the route table, remembers the parameters of the last match and
//! dispatches a request URL to a controller action.

use super::inflect::{to_camel_case, to_studly_caps};
use super::params::Params;
use super::table::RouteTable;
use super::url::effective_path;
use crate::controller::{ActionContext, ControllerRegistry, ACTION_SUFFIX, CONTROLLER_NAMESPACE};
use crate::error::{AppError, Fault};

#[derive(Debug, Default)]
pub struct Router {
    routes: RouteTable,
    params: Params,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route to the routing table
    ///
    /// `defaults` normally carries `controller` and `action`; either may also
    /// come from a placeholder of the same name.
    pub fn add(&mut self, template: &str, defaults: Params) -> Result<(), AppError> {
        self.routes.add(template, defaults)
    }

    pub const fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Parameters stored by the last successful `match_url`
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Match `url` against the table in registration order
    ///
    /// Stores the merged parameters of the first matching route and returns
    /// true; on no match the stored parameters are cleared.
    pub fn match_url(&mut self, url: &str) -> bool {
        match self.routes.find(url) {
            Some((_, params)) => {
                self.params = params;
                true
            }
            None => {
                self.params.clear();
                false
            }
        }
    }

    /// Route `url` to a controller action
    ///
    /// `url` is the raw request target (path plus optional query).
    pub fn dispatch(
        &mut self,
        url: &str,
        controllers: &ControllerRegistry,
        ctx: &mut ActionContext<'_>,
    ) -> Result<(), Fault> {
        let path = effective_path(url);

        if !self.match_url(&path) {
            return Err(Fault::from(AppError::RouteNotFound {
                path: path.into_owned(),
            }));
        }

        let controller = self.controller_name();
        let Some(mut instance) = controllers.create(&controller, self.params.clone()) else {
            return Err(Fault::from(AppError::ControllerNotFound { controller }));
        };

        let action = to_camel_case(self.params.get("action").unwrap_or_default());
        if has_action_suffix(&action) {
            return Err(Fault::from(AppError::DirectActionCallForbidden {
                action,
                controller,
            }));
        }

        instance.invoke_action(&action, ctx)
    }

    /// Qualified controller name from the matched parameters, including the
    /// optional `namespace` segment
    fn controller_name(&self) -> String {
        let controller = to_studly_caps(self.params.get("controller").unwrap_or_default());
        match self.params.get("namespace") {
            Some(namespace) => format!("{CONTROLLER_NAMESPACE}{namespace}\\{controller}"),
            None => format!("{CONTROLLER_NAMESPACE}{controller}"),
        }
    }
}

/// True when `action` ends in `action`, ignoring case
fn has_action_suffix(action: &str) -> bool {
    action
        .len()
        .checked_sub(ACTION_SUFFIX.len())
        .and_then(|start| action.get(start..))
        .is_some_and(|tail| tail.eq_ignore_ascii_case(ACTION_SUFFIX))
}
