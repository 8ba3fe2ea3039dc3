use std::fmt::Display;
use std::ops::Range;

use crate::RepeatMarker;

/// Tokens of the notation surface syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
	/// `{+` | `{*` | `{?`
	RepeatOpen(RepeatMarker),
	/// `{`
	BraceOpen,
	/// `}`
	BraceClose,
	/// `|`
	Pipe,
	/// A placeholder, e.g. `@term`. The sigil is not stored.
	Hole(String),
	/// A run of one or more whitespace characters.
	Whitespace,
	/// Any other run of characters, e.g. `:=` or `in`.
	Atom(String),
}

impl Token {
	/// Whether this token can start a notation unit.
	pub fn starts_unit(&self) -> bool {
		matches!(
			self,
			Token::Atom(_) | Token::Hole(_) | Token::RepeatOpen(_) | Token::BraceOpen | Token::Pipe
		)
	}

	/// Whether this token can start a unit that is not itself a pipe run.
	pub fn starts_primary(&self) -> bool {
		self.starts_unit() && !matches!(self, Token::Pipe)
	}
}

impl Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Token::RepeatOpen(marker) => write!(f, "{{{marker}"),
			Token::BraceOpen => write!(f, "{{"),
			Token::BraceClose => write!(f, "}}"),
			Token::Pipe => write!(f, "|"),
			Token::Hole(id) => write!(f, "@{id}"),
			Token::Whitespace => write!(f, " "),
			Token::Atom(text) => write!(f, "{text}"),
		}
	}
}

/// A token together with the byte range it was lexed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
	pub token: Token,
	pub span: Range<usize>,
}

impl SpannedToken {
	pub fn new(token: Token, span: Range<usize>) -> Self {
		Self { token, span }
	}
}
