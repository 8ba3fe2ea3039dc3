use std::io::BufRead;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use tacnote_cli::Commands;
use tacnote_cli::OutputFormat;
use tacnote_cli::TacnoteCli;
use tacnote_core::Notation;
use tacnote_core::NotationError;
use tacnote_core::RenderFormat;
use tacnote_core::TacnoteConfig;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
	let args = TacnoteCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose, use_color);

	let result = match &args.command {
		Some(Commands::Render {
			notation,
			format,
			anchored,
		}) => run_render(&args, notation.as_deref(), *format, *anchored),
		Some(Commands::Substitute { notation }) => run_substitute(&args, notation.as_deref()),
		Some(Commands::Check { notation, text }) => run_check(&args, notation, text),
		Some(Commands::Macros) => run_macros(&args),
		None => {
			eprintln!("No subcommand specified. Run `tacnote --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Notation errors carry a source span, so render them through miette.
		match e.downcast::<NotationError>() {
			Ok(notation_err) => {
				let report: miette::Report = (*notation_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr so rendered output on stdout stays clean.
fn init_tracing(verbose: bool, use_color: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_env("TACNOTE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.init();
}

fn resolve_root(args: &TacnoteCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_config(args: &TacnoteCli) -> CliResult<TacnoteConfig> {
	let root = resolve_root(args);
	let config = TacnoteConfig::load(&root)?.unwrap_or_default();
	tracing::debug!(
		extra_substitutions = config.substitutions.len(),
		format = %config.render.format,
		"resolved config"
	);

	Ok(config)
}

/// The notation given on the command line, or every non-empty stdin line.
fn notation_inputs(notation: Option<&str>) -> CliResult<Vec<String>> {
	if let Some(notation) = notation {
		return Ok(vec![notation.to_string()]);
	}

	let mut inputs = Vec::new();
	for line in std::io::stdin().lock().lines() {
		let line = line?;
		if !line.trim().is_empty() {
			inputs.push(line);
		}
	}

	Ok(inputs)
}

fn run_render(
	args: &TacnoteCli,
	notation: Option<&str>,
	format: Option<OutputFormat>,
	anchored: bool,
) -> CliResult<()> {
	let config = load_config(args)?;
	let substitutions = config.substitutions();
	let format = format.map_or(config.render.format, RenderFormat::from);
	let anchored = anchored || config.render.anchored;

	for source in notation_inputs(notation)? {
		let notation = Notation::parse_with(source, &substitutions)?;
		println!("{}", render(&notation, format, anchored)?);
	}

	Ok(())
}

fn render(notation: &Notation, format: RenderFormat, anchored: bool) -> CliResult<String> {
	let output = match format {
		RenderFormat::Html => notation.to_html(),
		RenderFormat::Text => notation.to_placeholder_text(),
		RenderFormat::Regex => notation.compile_regex(anchored)?.as_str().to_string(),
		RenderFormat::Json => serde_json::to_string(notation.root())?,
		_ => return Err(format!("unsupported render format `{format}`").into()),
	};

	Ok(output)
}

fn run_substitute(args: &TacnoteCli, notation: Option<&str>) -> CliResult<()> {
	let substitutions = load_config(args)?.substitutions();

	for source in notation_inputs(notation)? {
		println!("{}", substitutions.apply(&source));
	}

	Ok(())
}

fn run_check(args: &TacnoteCli, notation: &str, text: &str) -> CliResult<()> {
	let substitutions = load_config(args)?.substitutions();
	let notation = Notation::parse_with(notation, &substitutions)?;

	if notation.matches(text)? {
		println!("{} `{text}` matches `{}`", colored!("✓", green), notation.source());
		return Ok(());
	}

	println!(
		"{} `{text}` does not match `{}`",
		colored!("✗", red),
		notation.source()
	);
	if args.verbose {
		println!("  pattern: {}", notation.compile_regex(true)?.as_str());
	}
	process::exit(1);
}

fn run_macros(args: &TacnoteCli) -> CliResult<()> {
	let substitutions = load_config(args)?.substitutions();
	let width = substitutions
		.entries()
		.iter()
		.map(|entry| entry.from.chars().count())
		.max()
		.unwrap_or(0);

	for entry in substitutions.entries() {
		let from = format!("{:<width$}", entry.from);
		println!("{}  →  {}", colored!(from, bold), entry.to);
	}

	Ok(())
}
