use super::*;

#[derive(Debug, PartialEq)]
pub(crate) enum Token {
  Text(String),
  Variable(String),
  Block(String),
}

pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>> {
  lazy_static! {
    static ref TAG: Regex = Regex::new(r"(?s)\{\{(.*?)\}\}|\{%(.*?)%\}|\{#.*?#\}").unwrap();
  }

  let mut tokens = Vec::new();
  let mut last = 0;

  for captures in TAG.captures_iter(source) {
    let Some(tag) = captures.get(0) else {
      continue;
    };

    if tag.start() > last {
      tokens.push(Token::Text(source[last..tag.start()].into()));
    }

    if let Some(variable) = captures.get(1) {
      let variable = variable.as_str().trim();
      ensure!(
        !variable.is_empty(),
        TemplateSyntaxError("Empty variable tag".into())
      );
      tokens.push(Token::Variable(variable.into()));
    } else if let Some(block) = captures.get(2) {
      let block = block.as_str().trim();
      ensure!(
        !block.is_empty(),
        TemplateSyntaxError("Empty block tag".into())
      );
      tokens.push(Token::Block(block.into()));
    }

    last = tag.end();
  }

  if last < source.len() {
    tokens.push(Token::Text(source[last..].into()));
  }

  Ok(tokens)
}

/// Splits tag contents on whitespace, keeping quoted strings together.
pub(crate) fn split_contents(contents: &str) -> Vec<String> {
  lazy_static! {
    static ref BIT: Regex = Regex::new(
      r#"(?x)
      (?:
        [^\s'"]*
        (?:
          (?:
            "(?:[^"\\]|\\.)*"
            |
            '(?:[^'\\]|\\.)*'
          )
          [^\s'"]*
        )+
      )
      |
      \S+
      "#
    )
    .unwrap();
  }

  BIT
    .find_iter(contents)
    .map(|bit| bit.as_str().to_string())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tokens() {
    assert_eq!(
      tokenize("a {{ b }} c {% d e %}{# f #}g").unwrap(),
      [
        Token::Text("a ".into()),
        Token::Variable("b".into()),
        Token::Text(" c ".into()),
        Token::Block("d e".into()),
        Token::Text("g".into()),
      ],
    );
  }

  #[test]
  fn multiline_tags() {
    assert_eq!(
      tokenize("{% paginationplus\n  page\n  'items' %}").unwrap(),
      [Token::Block("paginationplus\n  page\n  'items'".into())],
    );
  }

  #[test]
  fn unterminated_tags_are_text() {
    assert_eq!(
      tokenize("{{ a").unwrap(),
      [Token::Text("{{ a".into())],
    );
  }

  #[test]
  fn empty_tags() {
    assert_eq!(
      tokenize("{{ }}").unwrap_err().to_string(),
      "Empty variable tag"
    );
    assert_eq!(
      tokenize("{%%}").unwrap_err().to_string(),
      "Empty block tag"
    );
  }

  #[test]
  fn split() {
    assert_eq!(
      split_contents(r#"paginationplus page_obj 'list' slug="a b" x='c\'d' with "t.html""#),
      [
        "paginationplus",
        "page_obj",
        "'list'",
        r#"slug="a b""#,
        r"x='c\'d'",
        "with",
        r#""t.html""#,
      ],
    );
  }
}
