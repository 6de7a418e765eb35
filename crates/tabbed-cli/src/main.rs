use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::{env, process};
use tabbed_config::Config;
use tabbed_syntax::{ParseOptions, to_html};

/// Reads a Markdown file and renders it. Invalid UTF-8 is replaced, not
/// rejected.
fn render_file(path: &Path, options: &ParseOptions) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let source = String::from_utf8_lossy(&bytes);
    Ok(to_html(&source, options))
}

fn load_options() -> Result<ParseOptions> {
    let config_path = Config::config_path();
    match Config::load()? {
        Some(config) => {
            log::info!("Using config file {}", config_path.display());
            Ok(config.options)
        }
        None => {
            log::debug!("No config file at {}", config_path.display());
            Ok(ParseOptions::default())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <markdown-file>", args[0]);
        process::exit(1);
    }
    let path = PathBuf::from(&args[1]);

    let options = load_options()?;
    let html = render_file(&path, &options)?;

    std::io::stdout()
        .write_all(html.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}
