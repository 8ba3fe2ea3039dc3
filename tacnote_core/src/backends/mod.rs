//! The three translations of a parsed notation.
//!
//! - [`MarkupRenderer`] builds a styled element tree for documentation pages.
//! - [`PlaceholderRenderer`] builds a short human-readable string.
//! - [`RegexRenderer`] builds a regular expression source matching instances.
//!
//! The renderers are stateless, independent of one another and safe to use
//! from several threads at once.

pub use markup::MarkupRenderer;
pub use placeholder::PlaceholderRenderer;
pub use regexp::RegexRenderer;

mod markup;
pub mod placeholder;
pub mod regexp;
