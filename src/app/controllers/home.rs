use tera::Context;

use crate::controller::{ActionContext, Controller, Handler};
use crate::error::Fault;
use crate::routing::Params;

/// Landing page
pub struct Home {
    params: Params,
}

impl Controller for Home {
    const NAME: &'static str = "Home";

    const ACTIONS: &'static [(&'static str, Handler<Self>)] = &[("indexAction", Self::index_action)];

    fn new(params: Params) -> Self {
        Self { params }
    }

    fn params(&self) -> &Params {
        &self.params
    }
}

impl Home {
    fn index_action(&mut self, ctx: &mut ActionContext<'_>) -> Result<(), Fault> {
        let mut context = Context::new();
        context.insert("title", "Home");
        ctx.display("Home/index.html", &context)?;
        Ok(())
    }
}
