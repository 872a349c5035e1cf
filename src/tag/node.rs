use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expression {
  Literal(serde_json::Value),
  Variable(Vec<String>),
}

impl Expression {
  pub(crate) fn evaluate(&self, context: &Context) -> Option<Value> {
    match self {
      Self::Literal(value) => Some(Value::Json(value.clone())),
      Self::Variable(path) => context.resolve(path.as_slice()),
    }
  }
}

impl FromStr for Expression {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    lazy_static! {
      static ref VARIABLE: Regex =
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z0-9_]+)*$").unwrap();
      static ref INTEGER: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    }

    if let Some(literal) = unquote(s) {
      return Ok(Self::Literal(literal.into()));
    }

    if INTEGER.is_match(s) {
      let n = s
        .parse::<i64>()
        .map_err(|_| TemplateSyntaxError(format!("Integer literal out of range: '{s}'")))?;
      return Ok(Self::Literal(n.into()));
    }

    match s {
      "true" | "True" => return Ok(Self::Literal(true.into())),
      "false" | "False" => return Ok(Self::Literal(false.into())),
      "null" | "None" => return Ok(Self::Literal(serde_json::Value::Null)),
      _ => {}
    }

    if VARIABLE.is_match(s) {
      return Ok(Self::Variable(s.split('.').map(str::to_string).collect()));
    }

    Err(TemplateSyntaxError(format!("Could not parse the remainder: '{s}'")).into())
  }
}

impl Display for Expression {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Literal(value) => write!(f, "{value}"),
      Self::Variable(path) => write!(f, "{}", path.join(".")),
    }
  }
}

/// Strips matching quotes and backslash escapes from a string literal.
pub(crate) fn unquote(s: &str) -> Option<String> {
  let quote = s.chars().next().filter(|c| *c == '"' || *c == '\'')?;

  let inner = s.strip_prefix(quote)?.strip_suffix(quote)?;

  let mut unquoted = String::new();
  let mut chars = inner.chars();

  while let Some(c) = chars.next() {
    if c == '\\' {
      if let Some(escaped) = chars.next() {
        unquoted.push(escaped);
      }
    } else {
      unquoted.push(c);
    }
  }

  Some(unquoted)
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Argument {
  pub(crate) name: Option<String>,
  pub(crate) value: Expression,
}

impl Argument {
  /// Parses the route argument at `position`. The first argument after the
  /// route is numbered 2.
  pub(crate) fn parse(position: usize, s: &str) -> Result<Self> {
    if unquote(s).is_some() {
      return Ok(Self {
        name: None,
        value: s.parse()?,
      });
    }

    match s.split('=').collect::<Vec<&str>>().as_slice() {
      [value] => Ok(Self {
        name: None,
        value: value.parse()?,
      }),
      [name, value] if !name.is_empty() && !value.is_empty() => Ok(Self {
        name: Some(name.to_string()),
        value: value.parse()?,
      }),
      _ => Err(TemplateSyntaxError(format!("Could not parse argument {position}: '{s}'")).into()),
    }
  }
}

#[derive(Debug)]
pub(crate) enum Body {
  Nodes(Vec<Node>),
  Include(Expression),
}

#[derive(Debug)]
pub(crate) struct PaginationplusNode {
  pub(crate) page: Expression,
  pub(crate) route: String,
  pub(crate) arguments: Vec<Argument>,
  pub(crate) body: Body,
}

impl PaginationplusNode {
  fn partial_url(&self, context: &Context) -> Result<PartialUrl> {
    let mut partial = PartialUrl::new(self.route.clone());

    for argument in &self.arguments {
      let value = argument
        .value
        .evaluate(context)
        .with_context(|| format!("variable `{}` does not exist", argument.value))?
        .to_text();

      match &argument.name {
        Some(name) => {
          partial.kwargs.insert(name.clone(), value);
        }
        None => partial.args.push(value),
      }
    }

    Ok(partial)
  }

  fn render(&self, engine: &Engine, context: &mut Context, output: &mut String) -> Result {
    let page = self
      .page
      .evaluate(context)
      .and_then(|value| value.page())
      .ok_or_else(|| TemplateSyntaxError(format!("'{}' is not a valid Page object", self.page)))?;

    let entries = page.entries(engine.window()).map_err(|err| {
      TemplateSyntaxError(format!("'{}' is not a valid Page object: {err}", self.page))
    })?;

    let partial = self.partial_url(context)?;

    let included;

    let nodes = match &self.body {
      Body::Nodes(nodes) => nodes,
      Body::Include(expression) => {
        ensure!(
          context.depth() < MAX_INCLUDE_DEPTH,
          "template includes nested more than {MAX_INCLUDE_DEPTH} levels deep",
        );

        let name = match expression.evaluate(context) {
          Some(Value::Json(serde_json::Value::String(name))) => name,
          _ => {
            return Err(
              TemplateSyntaxError(format!("'{expression}' is not a template name")).into(),
            )
          }
        };

        included = engine.template(&name)?;

        &included.nodes
      }
    };

    let target = BoundUrl {
      routes: engine.routes(),
      partial: &partial,
    };

    log::trace!(
      "rendering {} page links for route `{}`",
      entries.len(),
      self.route
    );

    for entry in entries {
      let link = PageLink::new(entry, &target)?;

      context.push();
      context.insert("paginationplus", Value::Link(link));

      let result = match self.body {
        Body::Nodes(_) => render_all(nodes, engine, context, output),
        Body::Include(_) => {
          context.enter();
          let result = render_all(nodes, engine, context, output);
          context.exit();
          result
        }
      };

      context.pop();

      result?;
    }

    Ok(())
  }
}

#[derive(Debug)]
pub(crate) enum Node {
  Text(String),
  Variable(Expression),
  If {
    negate: bool,
    condition: Expression,
    then: Vec<Node>,
    otherwise: Vec<Node>,
  },
  Paginationplus(PaginationplusNode),
}

impl Node {
  fn render(&self, engine: &Engine, context: &mut Context, output: &mut String) -> Result {
    match self {
      Self::Text(text) => output.push_str(text),
      Self::Variable(expression) => {
        if let Some(value) = expression.evaluate(context) {
          write!(output, "{value}")?;
        }
      }
      Self::If {
        negate,
        condition,
        then,
        otherwise,
      } => {
        let truthy = condition
          .evaluate(context)
          .map(|value| value.is_truthy())
          .unwrap_or_default();

        render_all(
          if truthy != *negate { then } else { otherwise },
          engine,
          context,
          output,
        )?;
      }
      Self::Paginationplus(node) => node.render(engine, context, output)?,
    }

    Ok(())
  }
}

pub(crate) fn render_all(
  nodes: &[Node],
  engine: &Engine,
  context: &mut Context,
  output: &mut String,
) -> Result {
  for node in nodes {
    node.render(engine, context, output)?;
  }

  Ok(())
}
