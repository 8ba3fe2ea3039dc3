use crate::Node;
use crate::RepeatMarker;
use crate::Sequence;
use crate::tokens::SpannedToken;
use crate::tokens::Token;

/// The tree `@bindings_list` expands into.
pub fn bindings_list_tree() -> Sequence {
	Sequence::new(vec![Node::repeat(
		RepeatMarker::OneOrMore,
		None,
		vec![
			Node::atomic("("),
			Node::hole("id"),
			Node::Whitespace,
			Node::atomic(":="),
			Node::Whitespace,
			Node::hole("val"),
			Node::atomic(")"),
		],
	)])
}

/// The tree `@qualid_or_string` expands into.
pub fn qualid_or_string_tree() -> Sequence {
	Sequence::new(vec![Node::alternative(vec![
		Node::hole("id"),
		Node::hole("string"),
	])])
}

pub fn separated_repeat_tokens() -> Vec<SpannedToken> {
	vec![
		SpannedToken::new(Token::RepeatOpen(RepeatMarker::OneOrMore), 0..2),
		SpannedToken::new(Token::Atom(",".to_string()), 2..3),
		SpannedToken::new(Token::Whitespace, 3..4),
		SpannedToken::new(Token::Hole("term".to_string()), 4..9),
		SpannedToken::new(Token::Whitespace, 9..10),
		SpannedToken::new(Token::BraceClose, 10..11),
	]
}
