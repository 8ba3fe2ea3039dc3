use regex::Regex;
use serde::Serialize;

use crate::MarkupRenderer;
use crate::NotationError;
use crate::NotationResult;
use crate::PlaceholderRenderer;
use crate::RegexRenderer;
use crate::Sequence;
use crate::Substitutions;
use crate::Visitor;
use crate::markup::Element;
use crate::markup::MarkupNode;
use crate::parse_substituted;

/// A parsed notation together with the text it was parsed from.
///
/// The source string is first expanded with a [`Substitutions`] table and
/// the expansion is parsed into a [`Sequence`]. The tree can then be rendered
/// by any of the three backends:
///
/// - [`to_html`](Notation::to_html) for documentation pages,
/// - [`to_placeholder_text`](Notation::to_placeholder_text) for index entries
///   and other plain-text contexts,
/// - [`to_regex`](Notation::to_regex) to recognise concrete instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notation {
	source: String,
	substituted: String,
	root: Sequence,
}

impl Notation {
	/// Parse `source` after expanding the built-in shorthand macros.
	pub fn parse(source: impl Into<String>) -> NotationResult<Self> {
		Self::parse_with(source, &Substitutions::builtin())
	}

	pub fn parse_with(source: impl Into<String>, substitutions: &Substitutions) -> NotationResult<Self> {
		let source = source.into();
		let substituted = substitutions.apply(&source);
		let root = parse_substituted(&substituted)?;

		Ok(Self {
			source,
			substituted,
			root,
		})
	}

	/// The notation as written.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// The notation after macro expansion.
	pub fn substituted(&self) -> &str {
		&self.substituted
	}

	pub fn root(&self) -> &Sequence {
		&self.root
	}

	pub fn to_markup(&self) -> Vec<MarkupNode> {
		MarkupRenderer.render(&self.root)
	}

	/// The markup fragment wrapped in a `notation` span, serialized as HTML.
	pub fn to_html(&self) -> String {
		let wrapper: MarkupNode = Element::span()
			.with_class("notation")
			.with_children(self.to_markup())
			.into();

		wrapper.to_string()
	}

	pub fn to_placeholder_text(&self) -> String {
		PlaceholderRenderer.render(&self.root)
	}

	/// The unanchored regular expression source for this notation.
	pub fn to_regex(&self) -> String {
		RegexRenderer.render(&self.root)
	}

	/// Compile [`to_regex`](Notation::to_regex), optionally anchored so that
	/// it only matches whole strings.
	pub fn compile_regex(&self, anchored: bool) -> NotationResult<Regex> {
		let pattern = self.to_regex();
		let pattern = if anchored {
			format!("^(?:{pattern})$")
		} else {
			pattern
		};

		Regex::new(&pattern).map_err(|e| NotationError::InvalidRegex(e.to_string()))
	}

	/// Whether the whole of `text` is an instance of this notation.
	pub fn matches(&self, text: &str) -> NotationResult<bool> {
		Ok(self.compile_regex(true)?.is_match(text))
	}
}
