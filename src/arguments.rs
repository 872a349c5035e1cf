use super::*;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Page links with fillers for paginated views",
  long_about = None,
)]
pub struct Arguments {
  #[command(flatten)]
  pub(crate) options: Options,
  #[command(subcommand)]
  pub(crate) subcommand: Subcommand,
}

impl Arguments {
  pub(crate) fn run(self) -> SubcommandResult {
    let mut env = BTreeMap::<String, String>::new();

    for (key, value) in env::vars_os() {
      let Ok(key) = key.into_string() else {
        continue;
      };

      let Some(key) = key.strip_prefix("PAGINATIONPLUS_") else {
        continue;
      };

      env.insert(
        key.into(),
        value.into_string().map_err(|value| {
          anyhow!(
            "environment variable `PAGINATIONPLUS_{key}` not valid unicode: `{}`",
            value.to_string_lossy()
          )
        })?,
      );
    }

    self.subcommand.run(Settings::merge(self.options, env)?)
  }
}
