use logos::Logos;

use crate::NotationError;
use crate::NotationResult;
use crate::RepeatMarker;
use crate::tokens::SpannedToken;
use crate::tokens::Token;

/// Raw tokens produced by logos for flat tokenization of a notation string.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[regex(r"\{[+*?]")]
	RepeatOpen,
	#[token("{")]
	BraceOpen,
	#[token("}")]
	BraceClose,
	#[token("|")]
	Pipe,
	#[regex(r"@[A-Za-z0-9_]+")]
	Hole,
	#[regex(r"[ \t\r\n]+")]
	Whitespace,
	#[regex(r"[^@{}| \t\r\n]+")]
	Atom,
}

/// Split a (substituted) notation string into spanned tokens.
///
/// Fails on the first byte sequence that no token accepts, which in practice
/// is an `@` sigil that is not followed by an identifier.
pub fn tokenize(notation: &str) -> NotationResult<Vec<SpannedToken>> {
	let mut tokens = Vec::new();

	for (result, span) in RawToken::lexer(notation).spanned() {
		let slice = &notation[span.clone()];

		let Ok(raw) = result else {
			return Err(unrecognized(notation, slice, span));
		};

		let token = match raw {
			RawToken::RepeatOpen => {
				let Some(marker) = slice.chars().nth(1).and_then(RepeatMarker::from_char) else {
					return Err(unrecognized(notation, slice, span));
				};
				Token::RepeatOpen(marker)
			}
			RawToken::BraceOpen => Token::BraceOpen,
			RawToken::BraceClose => Token::BraceClose,
			RawToken::Pipe => Token::Pipe,
			RawToken::Hole => Token::Hole(slice[1..].to_string()),
			RawToken::Whitespace => Token::Whitespace,
			RawToken::Atom => Token::Atom(slice.to_string()),
		};

		tokens.push(SpannedToken::new(token, span));
	}

	tracing::trace!(count = tokens.len(), "tokenized notation");

	Ok(tokens)
}

fn unrecognized(notation: &str, slice: &str, span: std::ops::Range<usize>) -> NotationError {
	NotationError::UnrecognizedInput {
		notation: notation.to_string(),
		found: slice.to_string(),
		span: span.into(),
	}
}
