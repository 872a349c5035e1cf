use super::*;

pub(crate) struct CommandBuilder {
  args: Vec<String>,
  env: Vec<(String, String)>,
  expected_exit_code: i32,
  expected_stderr: Option<String>,
  tempdir: TempDir,
}

impl CommandBuilder {
  pub(crate) fn new(args: impl ToArgs) -> Self {
    Self {
      args: args.to_args(),
      env: Vec::new(),
      expected_exit_code: 0,
      expected_stderr: None,
      tempdir: TempDir::new().unwrap(),
    }
  }

  pub(crate) fn env(mut self, key: &str, value: &str) -> Self {
    self.env.push((key.into(), value.into()));
    self
  }

  pub(crate) fn write(self, path: &str, contents: impl AsRef<[u8]>) -> Self {
    let path = self.tempdir.path().join(path);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
    self
  }

  pub(crate) fn expected_exit_code(self, expected_exit_code: i32) -> Self {
    Self {
      expected_exit_code,
      ..self
    }
  }

  pub(crate) fn expected_stderr(self, expected_stderr: impl AsRef<str>) -> Self {
    Self {
      expected_stderr: Some(expected_stderr.as_ref().into()),
      ..self
    }
  }

  pub(crate) fn command(&self) -> Command {
    let mut command = Command::new(executable_path("pagination-plus"));

    for (key, _) in std::env::vars() {
      if key.starts_with("PAGINATIONPLUS_") {
        command.env_remove(key);
      }
    }

    command.env_remove("RUST_BACKTRACE");

    for (key, value) in &self.env {
      command.env(key, value);
    }

    command
      .current_dir(self.tempdir.path())
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .args(&self.args);

    command
  }

  #[track_caller]
  pub(crate) fn run_and_extract_stdout(self) -> String {
    let output = self.command().output().unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    if output.status.code() != Some(self.expected_exit_code) {
      panic!(
        "Test failed: {}\nstdout:\n{stdout}\nstderr:\n{stderr}",
        output.status
      );
    }

    if let Some(expected_stderr) = &self.expected_stderr {
      pretty_assert_eq!(&stderr, expected_stderr);
    }

    stdout
  }

  #[track_caller]
  pub(crate) fn run_and_deserialize_output(self) -> Value {
    serde_json::from_str(&self.run_and_extract_stdout()).unwrap()
  }
}

pub(crate) trait ToArgs {
  fn to_args(&self) -> Vec<String>;
}

impl ToArgs for &str {
  fn to_args(&self) -> Vec<String> {
    self.split_whitespace().map(str::to_string).collect()
  }
}

impl ToArgs for &[&str] {
  fn to_args(&self) -> Vec<String> {
    self.iter().map(|arg| arg.to_string()).collect()
  }
}

impl<const N: usize> ToArgs for [&str; N] {
  fn to_args(&self) -> Vec<String> {
    self.iter().map(|arg| arg.to_string()).collect()
  }
}
