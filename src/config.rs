use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Config {
  pub(crate) input: PathBuf,
  pub(crate) output: PathBuf,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      input: PathBuf::from(Self::INPUT_FILENAME),
      output: PathBuf::from(Self::OUTPUT_FILENAME),
    }
  }
}

impl Config {
  const INPUT_FILENAME: &str =
    "dataset_skool-posts-with-comments-scraper_2025-05-21_17-55-28-456.json";

  const OUTPUT_FILENAME: &str = "skool_posts_formatted.html";

  #[cfg(test)]
  pub(crate) fn in_dir(dir: &Path) -> Self {
    let Self { input, output } = Self::default();

    Self {
      input: dir.join(input),
      output: dir.join(output),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_paths_are_relative_to_working_directory() {
    let config = Config::default();

    assert!(config.input.is_relative());
    assert!(config.output.is_relative());
    assert_eq!(config.output, PathBuf::from("skool_posts_formatted.html"));
    assert_eq!(
      config.input.extension().and_then(|ext| ext.to_str()),
      Some("json")
    );
  }

  #[test]
  fn in_dir_keeps_filenames() {
    let config = Config::in_dir(Path::new("/tmp/run"));

    assert_eq!(
      config.output,
      PathBuf::from("/tmp/run/skool_posts_formatted.html")
    );
    assert_eq!(
      config.input.file_name(),
      Config::default().input.file_name()
    );
  }
}
