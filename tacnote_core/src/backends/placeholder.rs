use crate::Alternative;
use crate::Atomic;
use crate::Curlies;
use crate::Hole;
use crate::Repeat;
use crate::RepeatMarker;
use crate::Visitor;
use crate::walk_sequence;

/// Stands in for the repeated occurrences of a `{+ … }` group.
pub const ELLIPSIS: char = '…';
/// Quotes placed around hole names.
pub const HOLE_QUOTES: (char, char) = ('‘', '’');

/// Renders a notation as readable text with `…` standing in for repetition,
/// e.g. `{+, @term }` becomes `‘term’, …, ‘term’`.
///
/// Only one-or-more groups show the ellipsis. Optional and zero-or-more
/// groups render their body once, which keeps index entries short.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl Visitor for PlaceholderRenderer {
	type Output = String;

	fn visit_repeat(&self, repeat: &Repeat, output: &mut Self::Output) {
		walk_sequence(self, &repeat.body, output);

		if repeat.marker == RepeatMarker::OneOrMore {
			let spacer = match &repeat.separator {
				Some(separator) => format!("{separator} "),
				None => " ".to_string(),
			};
			output.push_str(&spacer);
			output.push(ELLIPSIS);
			output.push_str(&spacer);
			walk_sequence(self, &repeat.body, output);
		}
	}

	fn visit_curlies(&self, curlies: &Curlies, output: &mut Self::Output) {
		output.push('{');
		walk_sequence(self, &curlies.body, output);
		output.push('}');
	}

	fn visit_alternative(&self, alternative: &Alternative, output: &mut Self::Output) {
		for (index, branch) in alternative.branches.iter().enumerate() {
			if index > 0 {
				output.push('|');
			}
			self.visit_node(branch, output);
		}
	}

	fn visit_atomic(&self, atomic: &Atomic, output: &mut Self::Output) {
		output.push_str(&atomic.text);
	}

	fn visit_hole(&self, hole: &Hole, output: &mut Self::Output) {
		let (open, close) = HOLE_QUOTES;
		output.push(open);
		output.push_str(&hole.id);
		output.push(close);
	}

	fn visit_whitespace(&self, output: &mut Self::Output) {
		output.push(' ');
	}
}
