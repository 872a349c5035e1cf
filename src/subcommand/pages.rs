use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Pages {
  #[arg(long, help = "Paginate <TOTAL> pages.")]
  total: u32,
  #[arg(long, help = "Show links as seen from page <CURRENT>.")]
  current: u32,
  #[arg(
    long,
    help = "Link pages with route <PATTERN>, e.g. `/items/:page`. Links use `?page=N` when omitted."
  )]
  pattern: Option<String>,
  #[arg(long = "arg", requires = "pattern", help = "Pass positional <ARG> to the route.")]
  args: Vec<String>,
  #[arg(
    long = "kwarg",
    requires = "pattern",
    value_parser = parse_kwarg,
    help = "Pass <KWARG> of the form NAME=VALUE to the route."
  )]
  kwargs: Vec<(String, String)>,
}

fn parse_kwarg(s: &str) -> Result<(String, String)> {
  let (name, value) = s
    .split_once('=')
    .with_context(|| format!("keyword argument `{s}` is not of the form NAME=VALUE"))?;

  ensure!(!name.is_empty(), "keyword argument `{s}` has an empty name");

  Ok((name.into(), value.into()))
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Output {
  pub max_distance: u32,
  pub contiguous: bool,
  pub links: Vec<PageLink>,
}

impl Pages {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let window = settings.window();

    let entries = window.entries(self.total, self.current)?;

    let links = match self.pattern {
      Some(pattern) => {
        let routes = Routes::new().with("pages", &pattern)?;

        let partial = PartialUrl {
          args: self.args,
          kwargs: self.kwargs.into_iter().collect(),
          ..PartialUrl::new("pages")
        };

        PageLink::links(
          &entries,
          &BoundUrl {
            routes: &routes,
            partial: &partial,
          },
        )?
      }
      None => PageLink::links(&entries, &QueryString)?,
    };

    Ok(Some(Box::new(Output {
      max_distance: window.max_distance.n(),
      contiguous: window.contiguous,
      links,
    })))
  }
}
