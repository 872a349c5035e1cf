use super::*;

/// Finds template sources by name, first among registered templates and
/// then below an optional root directory.
#[derive(Debug, Clone, Default)]
pub struct Loader {
  root: Option<PathBuf>,
  templates: BTreeMap<String, String>,
}

impl Loader {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn directory(root: impl Into<PathBuf>) -> Self {
    Self {
      root: Some(root.into()),
      templates: BTreeMap::new(),
    }
  }

  pub fn insert(&mut self, name: &str, source: &str) {
    self.templates.insert(name.into(), source.into());
  }

  pub fn with(mut self, name: &str, source: &str) -> Self {
    self.insert(name, source);
    self
  }

  pub fn source(&self, name: &str) -> Result<String> {
    if let Some(source) = self.templates.get(name) {
      return Ok(source.clone());
    }

    let Some(root) = &self.root else {
      bail!("template `{name}` does not exist");
    };

    ensure!(
      !name.is_empty()
        && Path::new(name)
          .components()
          .all(|component| matches!(component, Component::Normal(_))),
      "template name `{name}` must be a relative path inside the template directory",
    );

    let path = root.join(name);

    log::debug!("loading template from `{}`", path.display());

    fs::read_to_string(&path).with_context(|| format!("template `{name}` does not exist"))
  }
}

#[cfg(test)]
mod tests {
  use {super::*, tempfile::TempDir};

  #[test]
  fn registered() {
    let loader = Loader::new().with("a.html", "A");
    assert_eq!(loader.source("a.html").unwrap(), "A");
    assert_eq!(
      loader.source("b.html").unwrap_err().to_string(),
      "template `b.html` does not exist"
    );
  }

  #[test]
  fn directory() {
    let tempdir = TempDir::new().unwrap();
    fs::create_dir(tempdir.path().join("partials")).unwrap();
    fs::write(tempdir.path().join("partials/link.html"), "link").unwrap();

    let loader = Loader::directory(tempdir.path());

    assert_eq!(loader.source("partials/link.html").unwrap(), "link");
    assert_eq!(
      loader.source("missing.html").unwrap_err().to_string(),
      "template `missing.html` does not exist"
    );
  }

  #[test]
  fn registered_templates_shadow_directory() {
    let tempdir = TempDir::new().unwrap();
    fs::write(tempdir.path().join("a.html"), "file").unwrap();

    let loader = Loader::directory(tempdir.path()).with("a.html", "memory");

    assert_eq!(loader.source("a.html").unwrap(), "memory");
  }

  #[test]
  fn escaping_the_directory_is_rejected() {
    let loader = Loader::directory("/tmp");

    for name in ["../etc/passwd", "/etc/passwd", "./a.html", ""] {
      assert_eq!(
        loader.source(name).unwrap_err().to_string(),
        format!("template name `{name}` must be a relative path inside the template directory"),
      );
    }
  }
}
