use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::NotationError;
use crate::NotationResult;
use crate::Substitution;
use crate::Substitutions;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"tacnote.toml",
	".tacnote.toml",
	".config/tacnote.toml",
];

/// Configuration loaded from a `tacnote.toml` file.
///
/// ```toml
/// [[substitutions]]
/// from = "@intropattern_list"
/// to = "{* @intropattern }"
///
/// [render]
/// format = "regex"
/// anchored = true
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TacnoteConfig {
	/// Extra shorthand macros. They run after the built-in ones, in file
	/// order, so an entry may rewrite text produced by an earlier expansion.
	#[serde(default)]
	pub substitutions: Vec<Substitution>,
	/// Defaults for rendering from the command line.
	#[serde(default)]
	pub render: RenderConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderConfig {
	/// The output produced when no `--format` flag is given.
	#[serde(default)]
	pub format: RenderFormat,
	/// Wrap emitted regular expressions in `^(?:…)$`.
	#[serde(default)]
	pub anchored: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum RenderFormat {
	/// HTML markup from the markup backend.
	Html,
	/// Placeholder text with ellipses.
	#[default]
	Text,
	/// A regular expression source.
	Regex,
	/// The parsed tree as JSON.
	Json,
}

impl std::fmt::Display for RenderFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Html => write!(f, "html"),
			Self::Text => write!(f, "text"),
			Self::Regex => write!(f, "regex"),
			Self::Json => write!(f, "json"),
		}
	}
}

impl TacnoteConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> NotationResult<Option<TacnoteConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::from_toml(&content)?;

		Ok(Some(config))
	}

	pub fn from_toml(content: &str) -> NotationResult<TacnoteConfig> {
		toml::from_str(content).map_err(|e| NotationError::ConfigParse(e.to_string()))
	}

	/// The substitution table to use: the built-ins followed by the
	/// configured extras.
	pub fn substitutions(&self) -> Substitutions {
		Substitutions::with_extra(self.substitutions.iter().cloned())
	}
}
