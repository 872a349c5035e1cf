use super::*;

pub mod pages;
pub mod render;
pub mod server;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[command(about = "Print the page links for a paginated view")]
  Pages(pages::Pages),
  #[command(about = "Render a template containing `paginationplus` tags")]
  Render(render::Render),
  #[command(about = "Run a demo paginated listing server")]
  Server(server::Server),
}

impl Subcommand {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    match self {
      Self::Pages(pages) => pages.run(settings),
      Self::Render(render) => render.run(settings),
      Self::Server(server) => {
        let handle = axum_server::Handle::new();
        LISTENERS.lock().unwrap().push(handle.clone());
        server.run(settings, handle)
      }
    }
  }
}

pub trait Output: Send {
  fn print_json(&self, minify: bool);
}

impl<T> Output for T
where
  T: Serialize + Send,
{
  fn print_json(&self, minify: bool) {
    if minify {
      serde_json::to_writer(io::stdout(), self).ok();
    } else {
      serde_json::to_writer_pretty(io::stdout(), self).ok();
    }
    println!();
  }
}

pub(crate) type SubcommandResult = Result<Option<Box<dyn Output>>>;
