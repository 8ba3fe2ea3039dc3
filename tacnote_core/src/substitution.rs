use serde::Deserialize;
use serde::Serialize;

/// Built-in shorthand macros, applied in this order before parsing.
///
/// Nested notations are hard to read, so documentation authors refer to a
/// few common grammar fragments by name. The expansions are written to
/// compose: an expansion may itself contain text that a later entry rewrites.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
	("@bindings_list", "{+ (@id := @val) }"),
	("@qualid_or_string", "@id|@string"),
];

/// Rewrite every built-in shorthand in `notation`.
pub fn substitute(notation: &str) -> String {
	apply_pairs(
		notation,
		SUBSTITUTIONS.iter().map(|(from, to)| (*from, *to)),
	)
}

/// A single `from → to` rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
	pub from: String,
	pub to: String,
}

impl Substitution {
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}
}

/// An ordered substitution table: the built-ins followed by any extra rules
/// from configuration. Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitutions {
	entries: Vec<Substitution>,
}

impl Default for Substitutions {
	fn default() -> Self {
		Self::builtin()
	}
}

impl Substitutions {
	pub fn builtin() -> Self {
		Self {
			entries: SUBSTITUTIONS
				.iter()
				.map(|(from, to)| Substitution::new(*from, *to))
				.collect(),
		}
	}

	/// The built-in table extended with `extra`, which runs after the
	/// built-ins in the given order. Rules with an empty `from` are dropped
	/// since they would match everywhere.
	pub fn with_extra(extra: impl IntoIterator<Item = Substitution>) -> Self {
		let mut table = Self::builtin();
		for entry in extra {
			if entry.from.is_empty() {
				tracing::warn!(to = %entry.to, "ignoring substitution with an empty source");
				continue;
			}
			table.entries.push(entry);
		}
		table
	}

	pub fn entries(&self) -> &[Substitution] {
		&self.entries
	}

	pub fn apply(&self, notation: &str) -> String {
		apply_pairs(
			notation,
			self.entries
				.iter()
				.map(|entry| (entry.from.as_str(), entry.to.as_str())),
		)
	}
}

/// Sequential rewriting: each pair replaces all non-overlapping occurrences
/// in the output of the previous pair.
fn apply_pairs<'a>(notation: &str, pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
	let mut result = notation.to_string();

	for (from, to) in pairs {
		if result.contains(from) {
			tracing::debug!(from, to, "applying notation substitution");
			result = result.replace(from, to);
		}
	}

	result
}
