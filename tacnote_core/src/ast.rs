use std::fmt::Display;

use derive_more::Deref;
use serde::Serialize;

/// A node of a parsed notation.
///
/// The set of variants is closed: every renderer matches on it exhaustively
/// through [`walk_node`](crate::walk_node), so adding a variant fails to
/// compile until each backend decides how to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
	/// Sub-elements in source order.
	Sequence(Sequence),
	/// `{+ body }`, `{* body }` or `{? body }`, optionally with a separator
	/// glued to the opening delimiter (`{+, body }`).
	Repeat(Repeat),
	/// `{ body }` where the braces are literal text.
	Curlies(Curlies),
	/// `a|b`: one of several glued branches.
	Alternative(Alternative),
	/// A literal token.
	Atomic(Atomic),
	/// A named placeholder, e.g. `@term`.
	Hole(Hole),
	/// One or more whitespace characters.
	Whitespace,
}

impl Node {
	pub fn atomic(text: impl Into<String>) -> Self {
		Self::Atomic(Atomic { text: text.into() })
	}

	pub fn hole(id: impl Into<String>) -> Self {
		Self::Hole(Hole { id: id.into() })
	}

	pub fn sequence(children: Vec<Node>) -> Self {
		Self::Sequence(Sequence::new(children))
	}

	pub fn repeat(marker: RepeatMarker, separator: Option<&str>, body: Vec<Node>) -> Self {
		Self::Repeat(Repeat {
			marker,
			separator: separator.map(ToString::to_string),
			body: Sequence::new(body),
		})
	}

	pub fn curlies(body: Vec<Node>) -> Self {
		Self::Curlies(Curlies {
			body: Sequence::new(body),
		})
	}

	pub fn alternative(branches: Vec<Node>) -> Self {
		Self::Alternative(Alternative { branches })
	}
}

/// An ordered list of nodes. The root of every parsed notation is a
/// `Sequence`, possibly with a single child.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deref)]
pub struct Sequence {
	pub children: Vec<Node>,
}

impl Sequence {
	pub fn new(children: Vec<Node>) -> Self {
		Self { children }
	}
}

/// How many times the body of a [`Repeat`] may occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMarker {
	/// `?`: zero or one.
	Optional,
	/// `*`: zero or more.
	ZeroOrMore,
	/// `+`: one or more.
	OneOrMore,
}

impl RepeatMarker {
	pub fn from_char(ch: char) -> Option<Self> {
		match ch {
			'?' => Some(Self::Optional),
			'*' => Some(Self::ZeroOrMore),
			'+' => Some(Self::OneOrMore),
			_ => None,
		}
	}

	pub fn as_char(self) -> char {
		match self {
			Self::Optional => '?',
			Self::ZeroOrMore => '*',
			Self::OneOrMore => '+',
		}
	}
}

impl Display for RepeatMarker {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_char())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repeat {
	pub marker: RepeatMarker,
	/// Literal text placed between consecutive occurrences of the body.
	pub separator: Option<String>,
	pub body: Sequence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Curlies {
	pub body: Sequence,
}

/// Always holds at least two branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternative {
	pub branches: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Atomic {
	pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hole {
	/// The placeholder name without its `@` sigil. Never empty.
	pub id: String,
}
