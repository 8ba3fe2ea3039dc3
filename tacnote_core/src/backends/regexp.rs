use crate::Alternative;
use crate::Atomic;
use crate::Curlies;
use crate::Hole;
use crate::Repeat;
use crate::RepeatMarker;
use crate::Visitor;
use crate::walk_sequence;

/// Matches the text a hole stands for: a run of characters up to the next
/// parenthesis, semicolon, period, space or newline.
pub const HOLE_PATTERN: &str = r"([^();. \n]+)";
/// Matches the text a whitespace node stands for.
pub const WHITESPACE_PATTERN: &str = r"\s+";

/// Renders a notation as a regular expression matching its instances.
///
/// The pattern is not anchored. Every repeat group and hole is a capture
/// group. A `{+ b }` group becomes `(b)(\s* \s*b)*`, `{? b }` becomes
/// `(b)?` and `{* b }` combines both into `(b)?(\s* \s*b)*`; a separator
/// replaces the literal space between the `\s*`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexRenderer;

impl Visitor for RegexRenderer {
	type Output = String;

	fn visit_repeat(&self, repeat: &Repeat, output: &mut Self::Output) {
		output.push('(');
		walk_sequence(self, &repeat.body, output);
		output.push(')');

		if matches!(repeat.marker, RepeatMarker::Optional | RepeatMarker::ZeroOrMore) {
			output.push('?');
		}

		if matches!(repeat.marker, RepeatMarker::OneOrMore | RepeatMarker::ZeroOrMore) {
			let separator = repeat.separator.as_deref().unwrap_or(" ");
			output.push_str(r"(\s*");
			output.push_str(&regex::escape(separator));
			output.push_str(r"\s*");
			walk_sequence(self, &repeat.body, output);
			output.push_str(")*");
		}
	}

	fn visit_curlies(&self, curlies: &Curlies, output: &mut Self::Output) {
		output.push_str(r"\{");
		walk_sequence(self, &curlies.body, output);
		output.push_str(r"\}");
	}

	fn visit_alternative(&self, alternative: &Alternative, output: &mut Self::Output) {
		output.push('(');
		for (index, branch) in alternative.branches.iter().enumerate() {
			if index > 0 {
				output.push('|');
			}
			self.visit_node(branch, output);
		}
		output.push(')');
	}

	fn visit_atomic(&self, atomic: &Atomic, output: &mut Self::Output) {
		output.push_str(&regex::escape(&atomic.text));
	}

	fn visit_hole(&self, _hole: &Hole, output: &mut Self::Output) {
		output.push_str(HOLE_PATTERN);
	}

	fn visit_whitespace(&self, output: &mut Self::Output) {
		output.push_str(WHITESPACE_PATTERN);
	}
}
