use super::*;

/// A value visible to templates.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Json(serde_json::Value),
  Link(PageLink),
}

impl Value {
  fn get(&self, key: &str) -> Option<Value> {
    match self {
      Self::Json(serde_json::Value::Object(map)) => map.get(key).cloned().map(Self::Json),
      Self::Json(serde_json::Value::Array(array)) => key
        .parse::<usize>()
        .ok()
        .and_then(|index| array.get(index))
        .cloned()
        .map(Self::Json),
      Self::Json(_) => None,
      Self::Link(link) => link.field(key).map(Self::Json),
    }
  }

  pub(crate) fn is_truthy(&self) -> bool {
    match self {
      Self::Json(serde_json::Value::Null) => false,
      Self::Json(serde_json::Value::Bool(b)) => *b,
      Self::Json(serde_json::Value::Number(n)) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
      Self::Json(serde_json::Value::String(s)) => !s.is_empty(),
      Self::Json(serde_json::Value::Array(array)) => !array.is_empty(),
      Self::Json(serde_json::Value::Object(map)) => !map.is_empty(),
      Self::Link(_) => true,
    }
  }

  pub(crate) fn page(&self) -> Option<Page> {
    match self {
      Self::Json(value) => serde_json::from_value(value.clone()).ok(),
      Self::Link(_) => None,
    }
  }

  /// Unescaped text used when the value is a URL argument.
  pub(crate) fn to_text(&self) -> String {
    match self {
      Self::Json(serde_json::Value::Null) => String::new(),
      Self::Json(serde_json::Value::String(s)) => s.clone(),
      Self::Json(value) => value.to_string(),
      Self::Link(link) => link.number().map(|n| n.to_string()).unwrap_or_default(),
    }
  }
}

impl Display for Value {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Json(serde_json::Value::Null) => Ok(()),
      Self::Json(serde_json::Value::String(s)) => s.escape(f, false),
      Self::Json(value) => value.to_string().escape(f, false),
      Self::Link(link) => write!(f, "{link}"),
    }
  }
}

/// A stack of variable scopes.
#[derive(Debug, Default)]
pub struct Context {
  scopes: Vec<BTreeMap<String, Value>>,
  depth: usize,
}

impl Context {
  pub fn new() -> Self {
    Self {
      scopes: vec![BTreeMap::new()],
      depth: 0,
    }
  }

  pub fn push(&mut self) {
    self.scopes.push(BTreeMap::new());
  }

  pub fn pop(&mut self) {
    if self.scopes.len() > 1 {
      self.scopes.pop();
    }
  }

  pub fn insert(&mut self, key: &str, value: Value) {
    if self.scopes.is_empty() {
      self.push();
    }

    if let Some(scope) = self.scopes.last_mut() {
      scope.insert(key.into(), value);
    }
  }

  pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Option<Value> {
    let (first, rest) = path.split_first()?;

    let mut value = self
      .scopes
      .iter()
      .rev()
      .find_map(|scope| scope.get(first.as_ref()))?
      .clone();

    for key in rest {
      value = value.get(key.as_ref())?;
    }

    Some(value)
  }

  pub(crate) fn depth(&self) -> usize {
    self.depth
  }

  pub(crate) fn enter(&mut self) {
    self.depth += 1;
  }

  pub(crate) fn exit(&mut self) {
    self.depth = self.depth.saturating_sub(1);
  }
}

impl TryFrom<serde_json::Value> for Context {
  type Error = Error;

  fn try_from(value: serde_json::Value) -> Result<Self> {
    let mut context = Self::new();

    match value {
      serde_json::Value::Null => {}
      serde_json::Value::Object(map) => {
        for (key, value) in map {
          context.insert(&key, Value::Json(value));
        }
      }
      _ => bail!("template context must be a JSON object"),
    }

    Ok(context)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn context(value: serde_json::Value) -> Context {
    Context::try_from(value).unwrap()
  }

  #[test]
  fn resolve() {
    let context = context(json!({ "a": { "b": [10, { "c": "d" }] } }));

    assert_eq!(
      context.resolve(&["a", "b", "1", "c"]),
      Some(Value::Json(json!("d")))
    );
    assert_eq!(
      context.resolve(&["a", "b", "0"]),
      Some(Value::Json(json!(10)))
    );
    assert_eq!(context.resolve(&["a", "x"]), None);
    assert_eq!(context.resolve(&["z"]), None);
    assert_eq!(context.resolve::<&str>(&[]), None);
  }

  #[test]
  fn scopes_shadow_and_restore() {
    let mut context = context(json!({ "x": 1 }));

    context.push();
    context.insert("x", Value::Json(json!(2)));
    assert_eq!(context.resolve(&["x"]), Some(Value::Json(json!(2))));

    context.pop();
    assert_eq!(context.resolve(&["x"]), Some(Value::Json(json!(1))));

    context.pop();
    assert_eq!(context.resolve(&["x"]), Some(Value::Json(json!(1))));
  }

  #[test]
  fn link_fields() {
    let mut context = Context::new();

    context.insert(
      "paginationplus",
      Value::Link(PageLink::new(PageEntry::page(2, 2), &QueryString).unwrap()),
    );

    assert_eq!(
      context.resolve(&["paginationplus", "url"]),
      Some(Value::Json(json!("?page=2")))
    );
    assert_eq!(
      context.resolve(&["paginationplus", "is_current"]),
      Some(Value::Json(json!(true)))
    );
  }

  #[test]
  fn truthiness() {
    for falsy in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
      assert!(!Value::Json(falsy).is_truthy());
    }

    for truthy in [json!(true), json!(1), json!("a"), json!([0]), json!({ "a": 0 })] {
      assert!(Value::Json(truthy).is_truthy());
    }
  }

  #[test]
  fn display() {
    assert_eq!(Value::Json(json!("<i>")).to_string(), "&lt;i&gt;");
    assert_eq!(Value::Json(json!(null)).to_string(), "");
    assert_eq!(Value::Json(json!(3)).to_string(), "3");
    assert_eq!(Value::Json(json!(false)).to_string(), "false");
  }

  #[test]
  fn text() {
    assert_eq!(Value::Json(json!("a b")).to_text(), "a b");
    assert_eq!(Value::Json(json!(7)).to_text(), "7");
    assert_eq!(Value::Json(json!(null)).to_text(), "");
  }
}
