//! `quire` command-line frontend.
//!
//! Runs the highlighting core against documents on disk: classification,
//! mode lines, viewport highlighting and word counts.

mod cli;
mod commands;
mod render;
#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use commands::View;
use quire_config::EditorOptions;

fn main() -> Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let options = match &cli.config {
		Some(path) => EditorOptions::load(path).with_context(|| format!("loading options from {}", path.display()))?,
		None => EditorOptions::default(),
	};

	let output = match &cli.command {
		Command::Classify { source } => commands::classify(source)?,
		Command::Modeline { source } => commands::modeline(source, options)?,
		Command::Highlight {
			source,
			scroll,
			height,
			line_height,
			spans,
		} => commands::highlight(
			source,
			options,
			View {
				scroll: *scroll,
				height: *height,
				line_height: *line_height,
				spans: *spans,
			},
		)?,
		Command::Count { source } => commands::count(source)?,
	};

	print!("{output}");
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("QUIRE_LOG")
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| EnvFilter::new(if verbose { "quire=debug" } else { "quire=info" }));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
