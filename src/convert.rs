use {
  super::*,
  std::{panic, thread},
};

/// Deepest JSON nesting accepted, roughly 2000 levels of replies.
pub(crate) const MAX_NESTING: usize = 4096;

const STACK_SIZE: usize = 128 * 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Summary {
  pub(crate) bytes: usize,
  pub(crate) comments: usize,
  pub(crate) posts: usize,
}

/// Reads the dataset, renders it and writes the page.
///
/// The document is built fully in memory first, so a read or parse failure
/// never touches the output file.
pub(crate) fn convert(config: &Config) -> Result<Summary, ConvertError> {
  let (html, summary) = on_large_stack(|| render_input(&config.input))
    .inspect_err(|error| {
      tracing::error!(%error, "failed to load input");
    })?;

  fs::write(&config.output, &html).map_err(|source| {
    tracing::error!(error = %source, path = %config.output.display(), "failed to write output");

    ConvertError::OutputWrite {
      path: config.output.clone(),
      source,
    }
  })?;

  tracing::info!(
    bytes = summary.bytes,
    path = %config.output.display(),
    "wrote output"
  );

  Ok(summary)
}

pub(crate) fn load_posts(path: &Path) -> Result<Vec<Post>, ConvertError> {
  let data = fs::read_to_string(path)
    .map_err(|source| ConvertError::read(path, source))?;

  let depth = nesting_depth(&data);

  if depth > MAX_NESTING {
    return Err(ConvertError::InputTooDeep {
      depth,
      limit: MAX_NESTING,
      path: path.to_path_buf(),
    });
  }

  let malformed = |source: serde_json::Error| ConvertError::InputMalformed {
    path: path.to_path_buf(),
    source,
  };

  // Depth is bounded above, so serde_json's own limit would only reject
  // legitimate reply chains.
  let mut deserializer = serde_json::Deserializer::from_str(&data);
  deserializer.disable_recursion_limit();

  let posts = Vec::<Post>::deserialize(&mut deserializer).map_err(malformed)?;

  deserializer.end().map_err(malformed)?;

  Ok(posts)
}

/// Deepest `[`/`{` nesting in `json`, ignoring brackets inside strings.
pub(crate) fn nesting_depth(json: &str) -> usize {
  let (mut depth, mut max) = (0_usize, 0_usize);
  let (mut in_string, mut escaped) = (false, false);

  for byte in json.bytes() {
    if in_string {
      match byte {
        _ if escaped => escaped = false,
        b'\\' => escaped = true,
        b'"' => in_string = false,
        _ => {}
      }

      continue;
    }

    match byte {
      b'"' => in_string = true,
      b'[' | b'{' => {
        depth = depth.saturating_add(1);
        max = max.max(depth);
      }
      b']' | b'}' => depth = depth.saturating_sub(1),
      _ => {}
    }
  }

  max
}

/// Runs `job` on a thread with room for deep recursion over reply trees.
fn on_large_stack<T, F>(job: F) -> T
where
  F: Fn() -> T + Copy + Send,
  T: Send,
{
  thread::scope(|scope| {
    match thread::Builder::new()
      .name("render".into())
      .stack_size(STACK_SIZE)
      .spawn_scoped(scope, job)
    {
      Ok(handle) => handle
        .join()
        .unwrap_or_else(|payload| panic::resume_unwind(payload)),
      Err(error) => {
        tracing::warn!(%error, "could not spawn render thread, rendering inline");
        job()
      }
    }
  })
}

// Parsing, rendering and dropping the tree all recurse, so they share a stack.
fn render_input(path: &Path) -> Result<(String, Summary), ConvertError> {
  let posts = load_posts(path)?;

  tracing::info!(posts = posts.len(), path = %path.display(), "loaded input");

  let html = render_document(&posts);

  let summary = Summary {
    bytes: html.len(),
    comments: posts
      .iter()
      .map(Post::comment_count)
      .fold(0, usize::saturating_add),
    posts: posts.len(),
  };

  Ok((html, summary))
}
