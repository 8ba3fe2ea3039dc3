use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use tacnote_core::RenderFormat;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Render tactic notation strings as HTML, placeholder text or regular expressions.",
	long_about = "tacnote reads the compact notations used to document proof-assistant tactics, \
	              such as `rewrite {+, @term } {? in @ident }`, and translates them.\n\nQuick \
	              start:\n  tacnote render '{+, @term }'             Placeholder text\n  tacnote \
	              render --format html '@term'     Documentation markup\n  tacnote check \
	              'intro @x' 'intro H'       Test a concrete instance\n  tacnote macros         \
	              List shorthand substitutions"
)]
pub struct TacnoteCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory to search for a `tacnote.toml` config file.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Render a notation with one of the backends.
	///
	/// When NOTATION is omitted every non-empty line of stdin is rendered,
	/// one result per line. The format defaults to the `[render]` section of
	/// the config file, and to `text` without one.
	Render {
		/// The notation to render, e.g. `intros {* @ident }`.
		notation: Option<String>,

		/// Output format.
		#[arg(long, value_enum)]
		format: Option<OutputFormat>,

		/// Anchor regex output with `^(?:…)$` so it only matches whole
		/// strings.
		#[arg(long, default_value_t = false)]
		anchored: bool,
	},
	/// Print a notation after its shorthand macros are expanded.
	Substitute {
		/// The notation to expand. Reads stdin lines when omitted.
		notation: Option<String>,
	},
	/// Check whether TEXT is an instance of NOTATION.
	///
	/// Compiles the anchored regular expression for the notation and tests
	/// the whole of TEXT against it. Exits with status 1 when it does not
	/// match.
	Check {
		/// The notation, e.g. `apply @term with @bindings_list`.
		notation: String,
		/// The concrete tactic text, e.g. `apply foo with (x := 1)`.
		text: String,
	},
	/// List the active shorthand macros in the order they are applied.
	Macros,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// HTML markup for documentation pages.
	Html,
	/// Placeholder text with `…` standing in for repetition.
	Text,
	/// A regular expression matching instances of the notation.
	Regex,
	/// The parsed tree as JSON.
	Json,
}

impl From<OutputFormat> for RenderFormat {
	fn from(format: OutputFormat) -> Self {
		match format {
			OutputFormat::Html => Self::Html,
			OutputFormat::Text => Self::Text,
			OutputFormat::Regex => Self::Regex,
			OutputFormat::Json => Self::Json,
		}
	}
}
