use serde::Serialize;
use tera::Context;

use crate::controller::{ActionContext, Controller, Handler};
use crate::error::{AppError, Fault};
use crate::routing::Params;

#[derive(Debug, Serialize)]
struct Post {
    id: u32,
    title: &'static str,
}

const POSTS: &[Post] = &[
    Post {
        id: 1,
        title: "Hello world",
    },
    Post {
        id: 2,
        title: "Routing in practice",
    },
];

/// Blog posts
pub struct Posts {
    params: Params,
}

impl Controller for Posts {
    const NAME: &'static str = "Posts";

    const ACTIONS: &'static [(&'static str, Handler<Self>)] = &[
        ("indexAction", Self::index_action),
        ("showAction", Self::show_action),
        ("addNewAction", Self::add_new_action),
    ];

    fn new(params: Params) -> Self {
        Self { params }
    }

    fn params(&self) -> &Params {
        &self.params
    }
}

impl Posts {
    fn index_action(&mut self, ctx: &mut ActionContext<'_>) -> Result<(), Fault> {
        let mut context = Context::new();
        context.insert("posts", POSTS);
        ctx.display("Posts/index.html", &context)?;
        Ok(())
    }

    fn show_action(&mut self, ctx: &mut ActionContext<'_>) -> Result<(), Fault> {
        let id = self.params().get("id").unwrap_or_default();
        let Some(post) = POSTS.iter().find(|post| post.id.to_string() == id) else {
            return Err(Fault::from(AppError::RouteNotFound {
                path: format!("posts/{id}"),
            }));
        };

        let mut context = Context::new();
        context.insert("post", post);
        ctx.display("Posts/show.html", &context)?;
        Ok(())
    }

    fn add_new_action(&mut self, ctx: &mut ActionContext<'_>) -> Result<(), Fault> {
        ctx.display("Posts/new.html", &Context::new())?;
        Ok(())
    }
}
