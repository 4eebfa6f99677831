//! Controller dispatch contract
//!
//! A controller declares a fixed table of action handlers, named with the
//! `Action` suffix (`indexAction`, `showAction`, ...). Actions are invoked by
//! their bare name through `Dispatch::invoke_action`, which resolves the
//! handler and wraps it in the `before` / `after` filters.

mod context;
mod registry;

pub use context::ActionContext;
pub use registry::ControllerRegistry;

use crate::error::{AppError, Fault};
use crate::routing::Params;

/// Namespace every controller name is resolved under
pub const CONTROLLER_NAMESPACE: &str = "App\\Controllers\\";

/// Suffix appended to an action name to find its handler
pub const ACTION_SUFFIX: &str = "Action";

/// Outcome of a `before` filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Run the handler and the `after` filter
    Continue,
    /// Skip the handler and the `after` filter
    Abort,
}

/// Action handler signature
pub type Handler<C> = fn(&mut C, &mut ActionContext<'_>) -> Result<(), Fault>;

/// Implemented by every concrete controller
pub trait Controller: Sized + 'static {
    /// Name under `CONTROLLER_NAMESPACE`, e.g. `Home` or `Admin\Users`
    const NAME: &'static str;

    /// Build the controller for one dispatch
    fn new(params: Params) -> Self;

    /// Parameters of the route that selected this controller
    fn params(&self) -> &Params;

    /// Handler table: internal name (with `Action` suffix) to handler
    const ACTIONS: &'static [(&'static str, Handler<Self>)];

    /// Runs before every action; `Filter::Abort` skips the action
    fn before(&mut self, _ctx: &mut ActionContext<'_>) -> Result<Filter, Fault> {
        Ok(Filter::Continue)
    }

    /// Runs after every action that was not aborted
    fn after(&mut self, _ctx: &mut ActionContext<'_>) -> Result<(), Fault> {
        Ok(())
    }
}

/// Object-safe face of a controller, used by the router
pub trait Dispatch {
    /// Fully qualified controller name
    fn controller_name(&self) -> String;

    /// Invoke action `name` as `before`, `<name>Action`, `after`
    fn invoke_action(&mut self, name: &str, ctx: &mut ActionContext<'_>) -> Result<(), Fault>;
}

impl<C: Controller> Dispatch for C {
    fn controller_name(&self) -> String {
        qualified_name(C::NAME)
    }

    fn invoke_action(&mut self, name: &str, ctx: &mut ActionContext<'_>) -> Result<(), Fault> {
        let method = format!("{name}{ACTION_SUFFIX}");

        // Method names resolve case-insensitively, like the class lookup
        let Some(handler) = C::ACTIONS
            .iter()
            .find(|(action, _)| action.eq_ignore_ascii_case(&method))
            .map(|&(_, handler)| handler)
        else {
            return Err(Fault::from(AppError::HandlerNotFound {
                handler: method,
                controller: self.controller_name(),
            }));
        };

        if self.before(ctx)? == Filter::Abort {
            return Ok(());
        }
        handler(self, ctx)?;
        self.after(ctx)
    }
}

/// `Home` => `App\Controllers\Home`
pub fn qualified_name(name: &str) -> String {
    format!("{CONTROLLER_NAMESPACE}{name}")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::view::View;

    /// Records the order in which hooks and handlers ran
    pub struct Recorder {
        params: Params,
        pub calls: Vec<&'static str>,
        abort: bool,
    }

    impl Controller for Recorder {
        const NAME: &'static str = "Recorder";

        fn new(params: Params) -> Self {
            let abort = params.get("abort").is_some();
            Self {
                params,
                calls: Vec::new(),
                abort,
            }
        }

        fn params(&self) -> &Params {
            &self.params
        }

        const ACTIONS: &'static [(&'static str, Handler<Self>)] = &[
            ("indexAction", Self::index_action),
            ("failAction", Self::fail_action),
        ];

        fn before(&mut self, ctx: &mut ActionContext<'_>) -> Result<Filter, Fault> {
            self.calls.push("before");
            ctx.write("[before]");
            Ok(if self.abort { Filter::Abort } else { Filter::Continue })
        }

        fn after(&mut self, ctx: &mut ActionContext<'_>) -> Result<(), Fault> {
            self.calls.push("after");
            ctx.write("[after]");
            Ok(())
        }
    }

    impl Recorder {
        fn index_action(&mut self, ctx: &mut ActionContext<'_>) -> Result<(), Fault> {
            self.calls.push("index");
            ctx.write("[index]");
            Ok(())
        }

        fn fail_action(&mut self, _ctx: &mut ActionContext<'_>) -> Result<(), Fault> {
            self.calls.push("fail");
            Err(Fault::from(AppError::Io(std::io::Error::other("boom"))))
        }
    }

    fn empty_view() -> View {
        View::from_raw_templates(&[], "public").unwrap()
    }

    #[test]
    fn test_invoke_runs_before_handler_after() {
        let view = empty_view();
        let mut ctx = ActionContext::new(&view);
        let mut controller = Recorder::new(Params::new());

        controller.invoke_action("index", &mut ctx).unwrap();

        assert_eq!(controller.calls, vec!["before", "index", "after"]);
        assert_eq!(ctx.body(), "[before][index][after]");
    }

    #[test]
    fn test_before_abort_skips_handler_and_after() {
        let view = empty_view();
        let mut ctx = ActionContext::new(&view);
        let params: Params = [("abort", "yes")].into_iter().collect();
        let mut controller = Recorder::new(params);

        controller.invoke_action("index", &mut ctx).unwrap();

        assert_eq!(controller.calls, vec!["before"]);
        assert_eq!(ctx.body(), "[before]");
    }

    #[test]
    fn test_unknown_action_names_handler_and_controller() {
        let view = empty_view();
        let mut ctx = ActionContext::new(&view);
        let mut controller = Recorder::new(Params::new());

        let fault = controller.invoke_action("edit", &mut ctx).unwrap_err();

        match fault.error() {
            AppError::HandlerNotFound {
                handler,
                controller: name,
            } => {
                assert_eq!(handler, "editAction");
                assert_eq!(name, "App\\Controllers\\Recorder");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(controller.calls.is_empty());
    }

    #[test]
    fn test_handler_lookup_ignores_case() {
        let view = empty_view();
        let mut ctx = ActionContext::new(&view);
        let mut controller = Recorder::new(Params::new());

        controller.invoke_action("INDEX", &mut ctx).unwrap();
        assert_eq!(controller.calls, vec!["before", "index", "after"]);
    }

    #[test]
    fn test_handler_failure_skips_after() {
        let view = empty_view();
        let mut ctx = ActionContext::new(&view);
        let mut controller = Recorder::new(Params::new());

        let fault = controller.invoke_action("fail", &mut ctx).unwrap_err();
        assert_eq!(fault.status_code(), 500);
        assert_eq!(controller.calls, vec!["before", "fail"]);
    }
}
