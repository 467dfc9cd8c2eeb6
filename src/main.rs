use {
  comment::Comment,
  config::Config,
  convert::{Summary, convert},
  crossterm::style::Stylize,
  document::render_document,
  error::ConvertError,
  post::Post,
  serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
  },
  serde_json::Value,
  std::{
    backtrace::BacktraceStatus,
    fs,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
  },
  user::User,
  utils::{
    deserialize_null_default, deserialize_optional_string, escape,
    format_content,
  },
};

mod comment;
mod config;
mod convert;
mod document;
mod error;
mod logging;
mod post;
mod user;
mod utils;

const NOT_AVAILABLE: &str = "N/A";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn run() -> Result {
  logging::init();

  let config = Config::default();

  let Summary {
    comments, posts, ..
  } = convert(&config)?;

  println!(
    "Successfully parsed {posts} posts ({comments} comments) and wrote HTML to '{}'",
    config.output.display()
  );

  Ok(())
}

fn main() {
  if let Err(error) = run() {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
