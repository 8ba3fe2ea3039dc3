use crate::Atomic;
use crate::Curlies;
use crate::Hole;
use crate::Node;
use crate::NotationError;
use crate::NotationResult;
use crate::Repeat;
use crate::RepeatMarker;
use crate::Sequence;
use crate::Substitutions;
use crate::lexer::tokenize;
use crate::tokens::SpannedToken;
use crate::tokens::Token;

const EXPECTED_BLOCK: &str = "a token, hole or group";
const EXPECTED_CLOSE: &str = "`}` to close the group";

/// Expand the built-in shorthand macros in `notation` and parse the result.
pub fn parse(notation: impl AsRef<str>) -> NotationResult<Sequence> {
	parse_with(notation, &Substitutions::builtin())
}

/// Expand `notation` with the given substitution table and parse the result.
pub fn parse_with(notation: impl AsRef<str>, substitutions: &Substitutions) -> NotationResult<Sequence> {
	let substituted = substitutions.apply(notation.as_ref());
	parse_substituted(&substituted)
}

/// Parse a notation string as-is, without applying any substitution.
pub fn parse_substituted(notation: &str) -> NotationResult<Sequence> {
	let tokens = tokenize(notation)?;
	let root = NotationParser::new(notation, tokens).parse_top()?;
	tracing::debug!(notation, children = root.len(), "parsed notation");

	Ok(root)
}

/// Recursive descent over the token stream.
///
/// ```text
/// top     := ws? blocks ws? EOF
/// blocks  := unit (ws? unit)*
/// unit    := primary ('|' primary)*     pipes glued on both sides
/// primary := ATOM | HOLE | repeat | curlies | '|'+
/// repeat  := '{+' sep? ws? blocks ws? '}'
/// curlies := '{' ws? blocks ws? '}'
/// ```
struct NotationParser<'a> {
	/// The notation text, kept for error reporting.
	notation: &'a str,
	tokens: Vec<SpannedToken>,
	/// Index of the next unconsumed token.
	cursor: usize,
}

impl<'a> NotationParser<'a> {
	fn new(notation: &'a str, tokens: Vec<SpannedToken>) -> Self {
		Self {
			notation,
			tokens,
			cursor: 0,
		}
	}

	fn peek(&self) -> Option<&Token> {
		self.peek_nth(0)
	}

	fn peek_nth(&self, offset: usize) -> Option<&Token> {
		self.tokens
			.get(self.cursor + offset)
			.map(|spanned| &spanned.token)
	}

	/// Consume a whitespace token if there is one.
	fn skip_whitespace(&mut self) -> bool {
		if matches!(self.peek(), Some(Token::Whitespace)) {
			self.cursor += 1;
			return true;
		}

		false
	}

	/// A `|` directly followed by another branch.
	fn at_glued_pipe(&self) -> bool {
		matches!(self.peek(), Some(Token::Pipe)) && self.peek_nth(1).is_some_and(Token::starts_primary)
	}

	fn parse_top(mut self) -> NotationResult<Sequence> {
		self.skip_whitespace();

		if self.peek().is_none() {
			return Err(NotationError::EmptyNotation);
		}

		let children = self.parse_blocks()?;
		self.skip_whitespace();

		if let Some(spanned) = self.tokens.get(self.cursor) {
			return Err(self.unexpected(spanned, "end of notation"));
		}

		Ok(Sequence::new(children))
	}

	fn parse_blocks(&mut self) -> NotationResult<Vec<Node>> {
		let mut children = vec![self.parse_unit()?];

		loop {
			let at_whitespace = matches!(self.peek(), Some(Token::Whitespace));
			let next = if at_whitespace {
				self.peek_nth(1)
			} else {
				self.peek()
			};

			if !next.is_some_and(Token::starts_unit) {
				break;
			}

			if at_whitespace {
				self.cursor += 1;
				children.push(Node::Whitespace);
			}

			children.push(self.parse_unit()?);
		}

		Ok(children)
	}

	fn parse_unit(&mut self) -> NotationResult<Node> {
		if matches!(self.peek(), Some(Token::Pipe)) {
			return Ok(Node::atomic(self.parse_pipe_run()));
		}

		let first = self.parse_primary()?;
		if !self.at_glued_pipe() {
			return Ok(first);
		}

		let mut branches = vec![first];
		while self.at_glued_pipe() {
			self.cursor += 1;
			branches.push(self.parse_primary()?);
		}

		Ok(Node::alternative(branches))
	}

	fn parse_primary(&mut self) -> NotationResult<Node> {
		let Some(spanned) = self.tokens.get(self.cursor).cloned() else {
			return Err(self.unexpected_end(EXPECTED_BLOCK));
		};

		match spanned.token {
			Token::Atom(text) => {
				self.cursor += 1;
				Ok(Node::Atomic(Atomic { text }))
			}
			Token::Hole(id) => {
				self.cursor += 1;
				Ok(Node::Hole(Hole { id }))
			}
			Token::RepeatOpen(marker) => self.parse_repeat(marker),
			Token::BraceOpen => self.parse_curlies(),
			Token::Pipe => Ok(Node::atomic(self.parse_pipe_run())),
			Token::BraceClose | Token::Whitespace => Err(self.unexpected(&spanned, EXPECTED_BLOCK)),
		}
	}

	/// Consume consecutive pipes as one literal.
	fn parse_pipe_run(&mut self) -> String {
		let mut text = String::new();
		while matches!(self.peek(), Some(Token::Pipe)) {
			text.push('|');
			self.cursor += 1;
		}
		text
	}

	fn parse_repeat(&mut self, marker: RepeatMarker) -> NotationResult<Node> {
		self.cursor += 1;

		// A separator must be glued to the opening delimiter, e.g. `{+, @x }`.
		let separator = match self.peek().cloned() {
			Some(Token::Atom(text)) => {
				self.cursor += 1;
				Some(text)
			}
			Some(Token::Pipe) => Some(self.parse_pipe_run()),
			_ => None,
		};

		self.skip_whitespace();
		let body = self.parse_blocks()?;
		self.skip_whitespace();
		self.expect_close()?;

		Ok(Node::Repeat(Repeat {
			marker,
			separator,
			body: Sequence::new(body),
		}))
	}

	fn parse_curlies(&mut self) -> NotationResult<Node> {
		self.cursor += 1;

		// Unlike repeat groups, whitespace inside literal braces is rendered.
		let mut body = Vec::new();
		if self.skip_whitespace() {
			body.push(Node::Whitespace);
		}
		body.extend(self.parse_blocks()?);
		if self.skip_whitespace() {
			body.push(Node::Whitespace);
		}
		self.expect_close()?;

		Ok(Node::Curlies(Curlies {
			body: Sequence::new(body),
		}))
	}

	fn expect_close(&mut self) -> NotationResult<()> {
		if matches!(self.peek(), Some(Token::BraceClose)) {
			self.cursor += 1;
			return Ok(());
		}

		match self.tokens.get(self.cursor) {
			Some(spanned) => Err(self.unexpected(spanned, EXPECTED_CLOSE)),
			None => Err(self.unexpected_end(EXPECTED_CLOSE)),
		}
	}

	fn unexpected(&self, spanned: &SpannedToken, expected: &'static str) -> NotationError {
		let found = match &spanned.token {
			Token::Whitespace => "whitespace".to_string(),
			token => token.to_string(),
		};

		NotationError::UnexpectedToken {
			notation: self.notation.to_string(),
			found,
			expected,
			span: spanned.span.clone().into(),
		}
	}

	fn unexpected_end(&self, expected: &'static str) -> NotationError {
		NotationError::UnexpectedEnd {
			notation: self.notation.to_string(),
			expected,
			span: (self.notation.len(), 0).into(),
		}
	}
}
