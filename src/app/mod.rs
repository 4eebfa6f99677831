//! The application behind the front controller: its controllers and routes

pub mod controllers;

use crate::config::RouteConfig;
use crate::controller::ControllerRegistry;
use crate::error::AppError;
use crate::logger;
use crate::routing::{Params, Router};

/// Register every application controller
pub fn register_controllers(registry: &mut ControllerRegistry) {
    registry
        .register::<controllers::Home>()
        .register::<controllers::Posts>();
}

/// Register the home route, then the configured routes in order
pub fn register_routes(router: &mut Router, routes: &[RouteConfig]) -> Result<(), AppError> {
    let home: Params = [("controller", "Home"), ("action", "index")]
        .into_iter()
        .collect();
    add_route(router, "", home)?;

    for route in routes {
        add_route(router, &route.path, route.params.clone())?;
    }
    Ok(())
}

fn add_route(router: &mut Router, template: &str, params: Params) -> Result<(), AppError> {
    logger::log_route_registered(template, params.get("controller"), params.get("action"));
    router.add(template, params)
}
