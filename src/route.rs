use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
  Literal(String),
  Parameter(String),
}

/// A URL pattern such as `/category/:slug/:page`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
  segments: Vec<Segment>,
}

impl Route {
  pub fn parameters(&self) -> impl Iterator<Item = &str> {
    self.segments.iter().filter_map(|segment| match segment {
      Segment::Parameter(name) => Some(name.as_str()),
      Segment::Literal(_) => None,
    })
  }

  pub fn reverse(&self, args: &[String], kwargs: &BTreeMap<String, String>) -> Result<String> {
    let mut args = args.iter();
    let mut used = 0;
    let mut url = String::new();

    for segment in &self.segments {
      url.push('/');

      match segment {
        Segment::Literal(literal) => url.push_str(literal),
        Segment::Parameter(name) => {
          let value = match kwargs.get(name) {
            Some(value) => {
              used += 1;
              value
            }
            None => args
              .next()
              .with_context(|| format!("missing value for parameter `{name}`"))?,
          };

          ensure!(!value.is_empty(), "empty value for parameter `{name}`");

          url.push_str(&urlencoding::encode(value));
        }
      }
    }

    ensure!(
      args.next().is_none(),
      "too many positional arguments for {} parameters",
      self.parameters().count(),
    );

    if used < kwargs.len() {
      let unknown = kwargs
        .keys()
        .filter(|key| !self.parameters().any(|name| name == key.as_str()))
        .map(|key| format!("`{key}`"))
        .collect::<Vec<String>>()
        .join(", ");

      bail!("unknown keyword arguments: {unknown}");
    }

    if url.is_empty() {
      url.push('/');
    }

    Ok(url)
  }
}

impl FromStr for Route {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    lazy_static! {
      static ref PARAMETER: Regex = Regex::new(r"^:([A-Za-z_][A-Za-z0-9_]*)$").unwrap();
    }

    let Some(path) = s.strip_prefix('/') else {
      bail!("route pattern `{s}` must start with `/`");
    };

    let mut segments = Vec::new();

    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
      if let Some(captures) = PARAMETER.captures(segment) {
        let name = captures[1].to_string();

        ensure!(
          !segments.contains(&Segment::Parameter(name.clone())),
          "duplicate parameter `{name}` in route pattern `{s}`"
        );

        segments.push(Segment::Parameter(name));
      } else if segment.starts_with(':') {
        bail!("invalid parameter `{segment}` in route pattern `{s}`");
      } else {
        segments.push(Segment::Literal(segment.into()));
      }
    }

    Ok(Self { segments })
  }
}

/// Named routes that page links are resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Routes {
  routes: BTreeMap<String, Route>,
}

impl Routes {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, name: &str, pattern: &str) -> Result {
    let route = pattern
      .parse::<Route>()
      .with_context(|| format!("invalid route `{name}`"))?;

    self.routes.insert(name.into(), route);

    Ok(())
  }

  pub fn with(mut self, name: &str, pattern: &str) -> Result<Self> {
    self.insert(name, pattern)?;
    Ok(self)
  }

  pub fn get(&self, name: &str) -> Option<&Route> {
    self.routes.get(name)
  }

  pub fn reverse(
    &self,
    name: &str,
    args: &[String],
    kwargs: &BTreeMap<String, String>,
  ) -> Result<String> {
    self
      .get(name)
      .with_context(|| format!("no route named `{name}`"))?
      .reverse(args, kwargs)
      .with_context(|| format!("failed to reverse route `{name}`"))
  }
}

impl FromStr for Routes {
  type Err = Error;

  /// Parses comma-separated `NAME=PATTERN` definitions.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut routes = Routes::new();

    for definition in s.split(',').map(str::trim).filter(|s| !s.is_empty()) {
      let (name, pattern) = definition
        .split_once('=')
        .with_context(|| format!("route definition `{definition}` is not of the form NAME=PATTERN"))?;

      routes.insert(name.trim(), pattern.trim())?;
    }

    Ok(routes)
  }
}

/// A route with every argument bound except the page number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartialUrl {
  pub route: String,
  pub args: Vec<String>,
  pub kwargs: BTreeMap<String, String>,
}

impl PartialUrl {
  pub fn new(route: impl Into<String>) -> Self {
    Self {
      route: route.into(),
      ..Self::default()
    }
  }

  pub fn url_for_page(&self, routes: &Routes, page: u32) -> Result<String> {
    let mut kwargs = self.kwargs.clone();
    kwargs.insert("page".into(), page.to_string());
    routes.reverse(&self.route, &self.args, &kwargs)
  }
}
