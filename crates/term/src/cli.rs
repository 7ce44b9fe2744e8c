use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(about = "Regex syntax highlighting and mode lines for plain-text documents")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Editor options file (TOML)
	#[arg(long, short = 'c', value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// A document on disk and how to type it.
#[derive(Args, Debug, Clone)]
pub struct Source {
	/// Document to read
	pub file: PathBuf,

	/// MIME type (guessed from the file name if omitted)
	#[arg(long, value_name = "TYPE")]
	pub mime: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print the document type and MIME type
	Classify {
		#[command(flatten)]
		source: Source,
	},
	/// Print the mode directives and the options they produce
	Modeline {
		#[command(flatten)]
		source: Source,
	},
	/// Print the visible region with highlighting applied
	Highlight {
		#[command(flatten)]
		source: Source,

		/// Vertical scroll offset
		#[arg(long, default_value_t = 0)]
		scroll: u32,

		/// Viewport height
		#[arg(long, default_value_t = 40)]
		height: u32,

		/// Height of one line
		#[arg(long, default_value_t = 1)]
		line_height: u32,

		/// List spans instead of colouring the text
		#[arg(long)]
		spans: bool,
	},
	/// Print word and character counts
	Count {
		#[command(flatten)]
		source: Source,
	},
}
