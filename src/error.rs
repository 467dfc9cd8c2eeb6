use {super::*, thiserror::Error};

#[derive(Debug, Error)]
pub(crate) enum ConvertError {
  #[error(
    "could not decode JSON from `{}`, ensure it is a valid posts export",
    .path.display()
  )]
  InputMalformed {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
  #[error("input file `{}` not found", .path.display())]
  InputMissing { path: PathBuf },
  #[error("unexpected error while reading input file `{}`", .path.display())]
  InputRead {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error(
    "input file `{}` nests {depth} levels deep, beyond the supported {limit}",
    .path.display()
  )]
  InputTooDeep {
    depth: usize,
    limit: usize,
    path: PathBuf,
  },
  #[error(
    "could not write output file `{}`, check permissions",
    .path.display()
  )]
  OutputWrite {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl ConvertError {
  pub(crate) fn read(path: &Path, source: io::Error) -> Self {
    match source.kind() {
      io::ErrorKind::NotFound => Self::InputMissing {
        path: path.to_path_buf(),
      },
      _ => Self::InputRead {
        path: path.to_path_buf(),
        source,
      },
    }
  }
}
