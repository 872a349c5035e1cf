use super::*;

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct ImproperlyConfigured(pub String);

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
  #[serde(skip)]
  config: Option<PathBuf>,
  contiguous: Option<bool>,
  max_distance: Option<MaxDistance>,
}

impl Settings {
  pub fn merge(options: Options, env: BTreeMap<String, String>) -> Result<Self> {
    let settings = Settings::from_options(options)?.or(Settings::from_env(env)?);

    let config = match &settings.config {
      Some(path) => Settings::load(path)?,
      None => Settings::default(),
    };

    let settings = settings.or(config);

    log::debug!(
      "pagination settings: max_distance={} contiguous={}",
      settings.max_distance(),
      settings.contiguous(),
    );

    Ok(settings)
  }

  pub fn load(path: &Path) -> Result<Self> {
    let file = File::open(path)
      .with_context(|| format!("failed to open config file `{}`", path.display()))?;

    serde_yaml::from_reader(file).map_err(|err| {
      ImproperlyConfigured(format!(
        "failed to deserialize config file `{}`: {err}",
        path.display()
      ))
      .into()
    })
  }

  fn or(self, source: Settings) -> Self {
    Self {
      config: self.config.or(source.config),
      contiguous: self.contiguous.or(source.contiguous),
      max_distance: self.max_distance.or(source.max_distance),
    }
  }

  fn from_options(options: Options) -> Result<Self> {
    Ok(Self {
      config: options.config,
      contiguous: options.contiguous.then_some(true),
      max_distance: options
        .max_distance
        .as_deref()
        .map(Self::parse_max_distance)
        .transpose()?,
    })
  }

  fn from_env(env: BTreeMap<String, String>) -> Result<Self> {
    let contiguous = env
      .get("CONTIGUOUS")
      .map(|value| match value.trim().to_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        _ => Err(ImproperlyConfigured(format!(
          "PAGINATIONPLUS_CONTIGUOUS must be a boolean, got `{value}`"
        ))),
      })
      .transpose()?;

    Ok(Self {
      config: env.get("CONFIG").map(PathBuf::from),
      contiguous,
      max_distance: env
        .get("MAX_DISTANCE")
        .map(|value| Self::parse_max_distance(value))
        .transpose()?,
    })
  }

  fn parse_max_distance(value: &str) -> Result<MaxDistance> {
    value
      .parse::<MaxDistance>()
      .map_err(|err| ImproperlyConfigured(err.to_string()).into())
  }

  pub fn contiguous(&self) -> bool {
    self.contiguous.unwrap_or_default()
  }

  pub fn max_distance(&self) -> MaxDistance {
    self.max_distance.unwrap_or_default()
  }

  pub fn window(&self) -> Window {
    Window::new(self.max_distance(), self.contiguous())
  }
}
