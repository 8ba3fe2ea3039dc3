use crate::Alternative;
use crate::Atomic;
use crate::Curlies;
use crate::Hole;
use crate::Repeat;
use crate::Visitor;
use crate::markup::Element;
use crate::markup::MarkupNode;
use crate::walk_sequence;

/// Renders a notation as nested styled elements.
///
/// Repeat groups become a `repeat-wrapper` span holding the body (in a
/// `repeat` span), the marker as a superscript and the separator, if any, as
/// a subscript. Holes are `hole` spans and literal braces are kept inside a
/// `curlies` span.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupRenderer;

impl Visitor for MarkupRenderer {
	type Output = Vec<MarkupNode>;

	fn visit_repeat(&self, repeat: &Repeat, output: &mut Self::Output) {
		let mut body = Vec::new();
		walk_sequence(self, &repeat.body, &mut body);

		let mut wrapper = Element::span()
			.with_class("repeat-wrapper")
			.with_child(Element::span().with_class("repeat").with_children(body))
			.with_child(Element::sup().with_text(repeat.marker.to_string()));

		if let Some(separator) = &repeat.separator {
			wrapper = wrapper.with_child(Element::sub().with_text(separator.as_str()));
		}

		output.push(wrapper.into());
	}

	fn visit_curlies(&self, curlies: &Curlies, output: &mut Self::Output) {
		let mut body = Vec::new();
		walk_sequence(self, &curlies.body, &mut body);

		let element = Element::span()
			.with_class("curlies")
			.with_text("{")
			.with_children(body)
			.with_text("}");

		output.push(element.into());
	}

	fn visit_alternative(&self, alternative: &Alternative, output: &mut Self::Output) {
		let mut element = Element::span().with_class("alternative");

		for (index, branch) in alternative.branches.iter().enumerate() {
			if index > 0 {
				element = element.with_child(
					Element::span()
						.with_class("alternative-separator")
						.with_text("|"),
				);
			}

			let mut rendered = Vec::new();
			self.visit_node(branch, &mut rendered);
			element = element.with_children(rendered);
		}

		output.push(element.into());
	}

	fn visit_atomic(&self, atomic: &Atomic, output: &mut Self::Output) {
		output.push(Element::span().with_text(atomic.text.as_str()).into());
	}

	fn visit_hole(&self, hole: &Hole, output: &mut Self::Output) {
		output.push(
			Element::span()
				.with_class("hole")
				.with_text(hole.id.as_str())
				.into(),
		);
	}

	fn visit_whitespace(&self, output: &mut Self::Output) {
		output.push(MarkupNode::text(" "));
	}
}
