use super::*;

pub(crate) struct TemplateParser {
  tokens: std::vec::IntoIter<Token>,
}

impl TemplateParser {
  pub(crate) fn new(tokens: Vec<Token>) -> Self {
    Self {
      tokens: tokens.into_iter(),
    }
  }

  pub(crate) fn parse(mut self) -> Result<Vec<Node>> {
    let (nodes, _) = self.parse_until("", &[])?;
    Ok(nodes)
  }

  /// Parses nodes up to one of the `ends` block tags, returning the nodes
  /// and the name of the tag that ended them.
  fn parse_until(&mut self, opener: &str, ends: &[&str]) -> Result<(Vec<Node>, String)> {
    let mut nodes = Vec::new();

    while let Some(token) = self.tokens.next() {
      match token {
        Token::Text(text) => nodes.push(Node::Text(text)),
        Token::Variable(variable) => nodes.push(Node::Variable(variable.parse()?)),
        Token::Block(block) => {
          let contents = split_contents(&block);

          let Some(name) = contents.first() else {
            bail!(TemplateSyntaxError("Empty block tag".into()));
          };

          if ends.contains(&name.as_str()) {
            return Ok((nodes, name.clone()));
          }

          match name.as_str() {
            "if" => nodes.push(self.parse_if(&contents)?),
            "paginationplus" => nodes.push(self.parse_paginationplus(&contents)?),
            _ => bail!(TemplateSyntaxError(format!("Invalid block tag: '{name}'"))),
          }
        }
      }
    }

    if ends.is_empty() {
      return Ok((nodes, String::new()));
    }

    Err(
      TemplateSyntaxError(format!(
        "Unclosed tag '{opener}'. Looking for one of: {}",
        ends.join(", ")
      ))
      .into(),
    )
  }

  fn parse_if(&mut self, contents: &[String]) -> Result<Node> {
    let (negate, condition) = match contents {
      [_, condition] => (false, condition),
      [_, not, condition] if not == "not" => (true, condition),
      _ => bail!(TemplateSyntaxError(format!(
        "Unsupported if condition: '{}'",
        contents[1..].join(" ")
      ))),
    };

    let condition = condition.parse()?;

    let (then, end) = self.parse_until("if", &["else", "endif"])?;

    let otherwise = if end == "else" {
      self.parse_until("if", &["endif"])?.0
    } else {
      Vec::new()
    };

    Ok(Node::If {
      negate,
      condition,
      then,
      otherwise,
    })
  }

  fn parse_paginationplus(&mut self, contents: &[String]) -> Result<Node> {
    let tag = &contents[0];

    let [_, page, route, rest @ ..] = contents else {
      bail!(TemplateSyntaxError(format!(
        "'{tag}' tag expects at least 2 arguments"
      )));
    };

    let (arguments, include) = match rest {
      [arguments @ .., with, template] if with == "with" => (arguments, Some(template)),
      [.., with] if with == "with" => bail!(TemplateSyntaxError(format!(
        "'with' in '{tag}' tag requires a template"
      ))),
      _ => (rest, None),
    };

    let arguments = arguments
      .iter()
      .enumerate()
      .map(|(index, argument)| Argument::parse(index + 2, argument))
      .collect::<Result<Vec<Argument>>>()?;

    let body = match include {
      Some(template) => Body::Include(template.parse()?),
      None => Body::Nodes(self.parse_until(tag, &["endpaginationplus"])?.0),
    };

    Ok(Node::Paginationplus(PaginationplusNode {
      page: page.parse()?,
      route: node::unquote(route).unwrap_or_else(|| route.clone()),
      arguments,
      body,
    }))
  }
}
