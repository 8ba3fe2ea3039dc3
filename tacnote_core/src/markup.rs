//! A small styled-element tree for embedding rendered notations in
//! documentation, and its HTML serialization.

use std::fmt;

use serde::Serialize;

/// The element kinds the markup backend produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
	Span,
	/// Superscript, used for repeat markers.
	Sup,
	/// Subscript, used for repeat separators.
	Sub,
}

impl Tag {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Span => "span",
			Self::Sup => "sup",
			Self::Sub => "sub",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarkupNode {
	Element(Element),
	Text { value: String },
}

impl MarkupNode {
	pub fn text(value: impl Into<String>) -> Self {
		Self::Text {
			value: value.into(),
		}
	}

	/// The concatenated text of this node and its descendants.
	pub fn text_content(&self) -> String {
		let mut content = String::new();
		self.collect_text(&mut content);
		content
	}

	fn collect_text(&self, content: &mut String) {
		match self {
			Self::Text { value } => content.push_str(value),
			Self::Element(element) => {
				for child in &element.children {
					child.collect_text(content);
				}
			}
		}
	}

	/// Write this node as HTML markup.
	pub fn write_html<W: fmt::Write>(&self, writer: &mut W) -> fmt::Result {
		match self {
			Self::Text { value } => escape_into(writer, value),
			Self::Element(element) => element.write_html(writer),
		}
	}
}

impl From<Element> for MarkupNode {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}

impl fmt::Display for MarkupNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.write_html(f)
	}
}

/// An element with CSS classes wrapping other nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
	pub tag: Tag,
	pub classes: Vec<String>,
	pub children: Vec<MarkupNode>,
}

impl Element {
	pub fn new(tag: Tag) -> Self {
		Self {
			tag,
			classes: Vec::new(),
			children: Vec::new(),
		}
	}

	pub fn span() -> Self {
		Self::new(Tag::Span)
	}

	pub fn sup() -> Self {
		Self::new(Tag::Sup)
	}

	pub fn sub() -> Self {
		Self::new(Tag::Sub)
	}

	#[must_use]
	pub fn with_class(mut self, class: impl Into<String>) -> Self {
		self.classes.push(class.into());
		self
	}

	#[must_use]
	pub fn with_child(mut self, child: impl Into<MarkupNode>) -> Self {
		self.children.push(child.into());
		self
	}

	#[must_use]
	pub fn with_children(mut self, children: impl IntoIterator<Item = MarkupNode>) -> Self {
		self.children.extend(children);
		self
	}

	#[must_use]
	pub fn with_text(self, value: impl Into<String>) -> Self {
		self.with_child(MarkupNode::text(value))
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.classes.iter().any(|existing| existing == class)
	}

	pub fn write_html<W: fmt::Write>(&self, writer: &mut W) -> fmt::Result {
		let tag = self.tag.as_str();
		writer.write_char('<')?;
		writer.write_str(tag)?;
		write_class(writer, &self.classes)?;
		writer.write_char('>')?;

		for child in &self.children {
			child.write_html(writer)?;
		}

		write!(writer, "</{tag}>")
	}
}

/// Serialize a fragment of nodes as HTML.
pub fn to_html(nodes: &[MarkupNode]) -> String {
	let mut html = String::new();
	for node in nodes {
		// Writing into a `String` cannot fail.
		let _ = node.write_html(&mut html);
	}
	html
}

/// Join classes with spaces, dropping empty ones.
fn create_class(classes: &[String]) -> String {
	classes
		.iter()
		.filter(|class| !class.is_empty())
		.map(String::as_str)
		.collect::<Vec<&str>>()
		.join(" ")
}

fn write_class<W: fmt::Write>(writer: &mut W, classes: &[String]) -> fmt::Result {
	let class = create_class(classes);
	if class.is_empty() {
		return Ok(());
	}

	writer.write_str(" class=\"")?;
	escape_into(writer, &class)?;
	writer.write_char('"')
}

/// Write `text` with HTML special characters escaped.
pub fn escape_into<W: fmt::Write>(writer: &mut W, text: &str) -> fmt::Result {
	let mut last = 0;
	for (index, ch) in text.char_indices() {
		let replacement = match ch {
			'&' => "&amp;",
			'>' => "&gt;",
			'<' => "&lt;",
			'"' => "&quot;",
			'\'' => "&#x27;",
			_ => continue,
		};

		writer.write_str(&text[last..index])?;
		writer.write_str(replacement)?;
		last = index + ch.len_utf8();
	}

	writer.write_str(&text[last..])
}
