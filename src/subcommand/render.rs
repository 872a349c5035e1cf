use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Render {
  #[arg(help = "Render <TEMPLATE>. Included templates are looked up next to it.")]
  template: PathBuf,
  #[arg(long, help = "Read template variables from JSON object in <CONTEXT>.")]
  context: Option<PathBuf>,
  #[arg(
    long = "route",
    value_parser = parse_route,
    help = "Register <ROUTE> of the form NAME=PATTERN, e.g. `items=/items/:page`."
  )]
  routes: Vec<(String, String)>,
}

fn parse_route(s: &str) -> Result<(String, String)> {
  let (name, pattern) = s
    .split_once('=')
    .with_context(|| format!("route `{s}` is not of the form NAME=PATTERN"))?;

  let (name, pattern) = (name.trim(), pattern.trim());

  pattern.parse::<Route>()?;

  Ok((name.into(), pattern.into()))
}

impl Render {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let mut routes = Routes::new();

    for (name, pattern) in &self.routes {
      routes.insert(name, pattern)?;
    }

    let context = match &self.context {
      Some(path) => serde_json::from_reader(
        File::open(path)
          .with_context(|| format!("failed to open context file `{}`", path.display()))?,
      )
      .with_context(|| format!("failed to parse context file `{}`", path.display()))?,
      None => serde_json::Value::Null,
    };

    let name = self
      .template
      .file_name()
      .and_then(|name| name.to_str())
      .ok_or_else(|| anyhow!("invalid template path `{}`", self.template.display()))?;

    let root = match self.template.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent.to_owned(),
      _ => PathBuf::from("."),
    };

    log::debug!("rendering `{name}` from `{}`", root.display());

    let engine = Engine::new(settings.window(), routes, Loader::directory(root));

    print!("{}", engine.render(name, context)?);

    Ok(None)
  }
}
