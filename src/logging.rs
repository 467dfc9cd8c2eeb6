use {super::*, tracing_subscriber::EnvFilter};

const LOG_ENV: &str = "SKOOL_HTML_LOG";

pub(crate) fn init() {
  let filter =
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

  // A subscriber may already be installed (e.g. under test harnesses).
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_ansi(io::stderr().is_terminal())
    .with_target(false)
    .try_init();
}
