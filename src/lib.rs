#![allow(clippy::too_many_arguments, clippy::type_complexity)]
#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

use {
  self::{
    arguments::Arguments,
    options::Options,
    page_link::{BoundUrl, LinkTarget, QueryString},
    route::{PartialUrl, Route},
    subcommand::{Subcommand, SubcommandResult},
  },
  anyhow::{anyhow, bail, ensure, Context, Error},
  clap::Parser,
  html_escaper::{Escape, Trusted},
  lazy_static::lazy_static,
  pagination::{MaxDistance, Page, PageEntry, Paginator, Window},
  regex::Regex,
  serde::{Deserialize, Serialize},
  std::{
    collections::BTreeMap,
    env,
    fmt::{self, Display, Formatter},
    fs::{self, File},
    io,
    path::{Component, Path, PathBuf},
    process,
    str::FromStr,
    sync::{
      atomic::{self, AtomicBool},
      Arc, Mutex,
    },
    time::Duration,
  },
  tokio::runtime::Runtime,
};

pub use self::{
  page_link::PageLink,
  route::Routes,
  settings::{ImproperlyConfigured, Settings},
  tag::{Engine, Loader, Template, TemplateSyntaxError},
};

#[cfg(test)]
#[macro_use]
mod test;

pub mod arguments;
pub mod options;
mod page_link;
mod route;
mod settings;
pub mod subcommand;
pub mod tag;
pub mod templates;

type Result<T = (), E = Error> = std::result::Result<T, E>;

static SHUTTING_DOWN: AtomicBool = AtomicBool::new(false);
static LISTENERS: Mutex<Vec<axum_server::Handle>> = Mutex::new(Vec::new());

pub fn main() {
  env_logger::init();

  ctrlc::set_handler(move || {
    if SHUTTING_DOWN.fetch_or(true, atomic::Ordering::Relaxed) {
      process::exit(1);
    }

    println!("Shutting down gracefully. Press <CTRL-C> again to shutdown immediately.");

    LISTENERS
      .lock()
      .unwrap()
      .iter()
      .for_each(|handle| handle.graceful_shutdown(Some(Duration::from_millis(100))));
  })
  .expect("Error setting <CTRL-C> handler");

  let args = Arguments::parse();

  let minify = args.options.minify;

  match args.run() {
    Err(err) => {
      eprintln!("error: {err}");
      err
        .chain()
        .skip(1)
        .for_each(|cause| eprintln!("because: {cause}"));
      if env::var_os("RUST_BACKTRACE")
        .map(|val| val == "1")
        .unwrap_or_default()
      {
        eprintln!("{}", err.backtrace());
      }

      process::exit(1);
    }
    Ok(output) => {
      if let Some(output) = output {
        output.print_json(minify);
      }
    }
  }
}
