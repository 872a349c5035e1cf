use super::*;

#[derive(Clone, Default, Debug, Parser)]
pub struct Options {
  #[arg(long, help = "Load configuration from <CONFIG>.")]
  pub(crate) config: Option<PathBuf>,
  #[arg(
    long,
    help = "Link every page instead of a window around the current page."
  )]
  pub(crate) contiguous: bool,
  #[arg(
    long,
    help = "Link <MAX_DISTANCE> pages on either side of the current page. [default: 1]"
  )]
  pub(crate) max_distance: Option<String>,
  #[arg(long, help = "Minify JSON output.")]
  pub(crate) minify: bool,
}
