//! A small template engine exposing the `paginationplus` block tag.
//!
//! Templates support `{{ dotted.path }}` variables, `{% if %}` blocks, and
//!
//! ```text
//! {% paginationplus page route arg key=value %}...{% endpaginationplus %}
//! {% paginationplus page route arg key=value with "template.html" %}
//! ```
//!
//! which renders its body, or the named template, once for every page link
//! with the link bound to `paginationplus`.

use {
  self::{
    lexer::{split_contents, tokenize, Token},
    node::{Argument, Body, Expression, Node, PaginationplusNode},
    parser::TemplateParser,
  },
  super::*,
  anyhow::Context as _,
  std::fmt::Write,
};

pub use {
  context::{Context, Value},
  loader::Loader,
};

mod context;
mod lexer;
mod loader;
mod node;
mod parser;

const MAX_INCLUDE_DEPTH: usize = 16;

/// Raised for malformed template syntax and for tag arguments that cannot
/// be used, such as a page argument that is not a page.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct TemplateSyntaxError(pub String);

#[derive(Debug)]
pub struct Template {
  nodes: Vec<Node>,
}

impl FromStr for Template {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self {
      nodes: TemplateParser::new(tokenize(s)?).parse()?,
    })
  }
}

impl Template {
  pub fn render(&self, engine: &Engine, context: &mut Context) -> Result<String> {
    let mut output = String::new();
    node::render_all(&self.nodes, engine, context, &mut output)?;
    Ok(output)
  }
}

pub struct Engine {
  window: Window,
  routes: Routes,
  loader: Loader,
}

impl Engine {
  pub fn new(window: Window, routes: Routes, loader: Loader) -> Self {
    Self {
      window,
      routes,
      loader,
    }
  }

  pub fn window(&self) -> Window {
    self.window
  }

  pub fn routes(&self) -> &Routes {
    &self.routes
  }

  pub fn template(&self, name: &str) -> Result<Template> {
    self
      .loader
      .source(name)?
      .parse()
      .with_context(|| format!("failed to parse template `{name}`"))
  }

  pub fn render(&self, name: &str, context: serde_json::Value) -> Result<String> {
    log::debug!("rendering template `{name}`");
    self.template(name)?.render(self, &mut Context::try_from(context)?)
  }

  pub fn render_str(&self, source: &str, context: serde_json::Value) -> Result<String> {
    source
      .parse::<Template>()?
      .render(self, &mut Context::try_from(context)?)
  }
}
