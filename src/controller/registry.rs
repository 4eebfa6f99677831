//! Controller registry
//!
//! Maps fully qualified controller names to constructors. Lookups ignore
//! ASCII case, so `App\Controllers\posts` finds `App\Controllers\Posts`.

use std::collections::HashMap;

use super::{qualified_name, Controller, Dispatch};
use crate::routing::Params;

type Factory = fn(Params) -> Box<dyn Dispatch>;

/// Registered controller types, keyed by lowercased qualified name
#[derive(Default)]
pub struct ControllerRegistry {
    factories: HashMap<String, (String, Factory)>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register controller type `C` under `App\Controllers\<C::NAME>`
    pub fn register<C: Controller>(&mut self) -> &mut Self {
        let name = qualified_name(C::NAME);
        self.factories
            .insert(name.to_ascii_lowercase(), (name, construct::<C>));
        self
    }

    /// Instantiate the controller registered as `name`
    pub fn create(&self, name: &str, params: Params) -> Option<Box<dyn Dispatch>> {
        self.factories
            .get(&name.to_ascii_lowercase())
            .map(|(_, factory)| factory(params))
    }

}

fn construct<C: Controller>(params: Params) -> Box<dyn Dispatch> {
    Box::new(C::new(params))
}
