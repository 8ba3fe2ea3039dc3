use miette::Diagnostic;
use miette::SourceSpan;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum NotationError {
	#[error(transparent)]
	#[diagnostic(code(tacnote::io_error))]
	Io(#[from] std::io::Error),

	#[error("empty notation")]
	#[diagnostic(
		code(tacnote::empty_notation),
		help("a notation needs at least one token, hole or group")
	)]
	EmptyNotation,

	#[error("unrecognized input `{found}`")]
	#[diagnostic(
		code(tacnote::unrecognized_input),
		help("holes are written `@name` where name is made of letters, digits and `_`")
	)]
	UnrecognizedInput {
		#[source_code]
		notation: String,
		found: String,
		#[label("not a valid notation token")]
		span: SourceSpan,
	},

	#[error("unexpected `{found}`, expected {expected}")]
	#[diagnostic(code(tacnote::unexpected_token))]
	UnexpectedToken {
		#[source_code]
		notation: String,
		found: String,
		expected: &'static str,
		#[label("found here")]
		span: SourceSpan,
	},

	#[error("unexpected end of notation, expected {expected}")]
	#[diagnostic(
		code(tacnote::unexpected_end),
		help("every `{{`, `{{+`, `{{*` and `{{?` group must be closed with `}}`")
	)]
	UnexpectedEnd {
		#[source_code]
		notation: String,
		expected: &'static str,
		#[label("notation ends here")]
		span: SourceSpan,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(tacnote::config_parse),
		help("check that tacnote.toml is valid TOML with [[substitutions]] and/or [render] sections")
	)]
	ConfigParse(String),

	#[error("generated pattern is not a valid regular expression: {0}")]
	#[diagnostic(code(tacnote::invalid_regex))]
	InvalidRegex(String),
}

pub type NotationResult<T> = Result<T, NotationError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
