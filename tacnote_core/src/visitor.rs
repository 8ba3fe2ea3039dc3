//! The walk-the-tree contract shared by every rendering backend.
//!
//! A backend implements [`Visitor`] and overrides the `visit_*` methods for
//! the node kinds it renders specially. Every method receives the output
//! accumulator explicitly, so a backend value holds no state of its own and
//! one backend can render many notations, or the same notation from several
//! threads, without coordination.
//!
//! The default for a container node is to descend into its children in
//! source order using the matching `walk_*` function; the default for a leaf
//! node is to emit nothing.

use crate::Alternative;
use crate::Atomic;
use crate::Curlies;
use crate::Hole;
use crate::Node;
use crate::Repeat;
use crate::Sequence;

pub trait Visitor {
	/// The accumulator a walk writes into.
	type Output: Default;

	/// Render `sequence` into a fresh accumulator.
	fn render(&self, sequence: &Sequence) -> Self::Output {
		let mut output = Self::Output::default();
		self.visit_sequence(sequence, &mut output);
		output
	}

	fn visit_node(&self, node: &Node, output: &mut Self::Output) {
		walk_node(self, node, output);
	}

	fn visit_sequence(&self, sequence: &Sequence, output: &mut Self::Output) {
		walk_sequence(self, sequence, output);
	}

	fn visit_repeat(&self, repeat: &Repeat, output: &mut Self::Output) {
		walk_sequence(self, &repeat.body, output);
	}

	fn visit_curlies(&self, curlies: &Curlies, output: &mut Self::Output) {
		walk_sequence(self, &curlies.body, output);
	}

	fn visit_alternative(&self, alternative: &Alternative, output: &mut Self::Output) {
		walk_alternative(self, alternative, output);
	}

	fn visit_atomic(&self, _atomic: &Atomic, _output: &mut Self::Output) {}

	fn visit_hole(&self, _hole: &Hole, _output: &mut Self::Output) {}

	fn visit_whitespace(&self, _output: &mut Self::Output) {}
}

/// Dispatch `node` to the matching `visit_*` method.
pub fn walk_node<V: Visitor + ?Sized>(visitor: &V, node: &Node, output: &mut V::Output) {
	match node {
		Node::Sequence(sequence) => visitor.visit_sequence(sequence, output),
		Node::Repeat(repeat) => visitor.visit_repeat(repeat, output),
		Node::Curlies(curlies) => visitor.visit_curlies(curlies, output),
		Node::Alternative(alternative) => visitor.visit_alternative(alternative, output),
		Node::Atomic(atomic) => visitor.visit_atomic(atomic, output),
		Node::Hole(hole) => visitor.visit_hole(hole, output),
		Node::Whitespace => visitor.visit_whitespace(output),
	}
}

pub fn walk_sequence<V: Visitor + ?Sized>(visitor: &V, sequence: &Sequence, output: &mut V::Output) {
	for child in sequence.iter() {
		visitor.visit_node(child, output);
	}
}

pub fn walk_alternative<V: Visitor + ?Sized>(
	visitor: &V,
	alternative: &Alternative,
	output: &mut V::Output,
) {
	for branch in &alternative.branches {
		visitor.visit_node(branch, output);
	}
}
