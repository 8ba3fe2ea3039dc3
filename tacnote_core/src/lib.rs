//! `tacnote_core` renders the notation strings used to document the surface
//! syntax of proof-assistant tactics. A notation such as
//! `rewrite {+, @term } {? in @ident }` is parsed once and can be turned into
//! styled markup for documentation pages, a short placeholder text, or a
//! regular expression that recognises concrete uses of the tactic.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Notation string
//!   → Substitution (expands shorthand macros such as `@bindings_list`)
//!   → Lexer (logos tokens: repeat openers, braces, pipes, holes, atoms, whitespace)
//!   → Parser (recursive descent into a `Sequence` of `Node`s)
//!   → Backend (markup tree, placeholder text or regex source)
//! ```
//!
//! ## Notation Syntax
//!
//! - `{+ body }`, `{* body }`, `{? body }`: one-or-more, zero-or-more and
//!   optional groups. A separator may be glued to the opener: `{+, @term }`.
//! - `{ body }`: literal braces.
//! - `@name`: a hole standing for a user-supplied term.
//! - `a|b`: alternatives, when the pipe is glued to both sides.
//! - Any other run of characters is a literal token; whitespace separates.
//!
//! ## Modules
//!
//! - [`backends`]: The markup, placeholder-text and regex renderers.
//! - [`config`]: Configuration loading from `tacnote.toml`.
//! - [`markup`]: The styled element tree and its HTML serialization.
//!
//! ## Quick Start
//!
//! ```rust
//! use tacnote_core::Notation;
//!
//! let notation = Notation::parse("rewrite {+, @term }").unwrap();
//!
//! assert_eq!(notation.to_placeholder_text(), "rewrite ‘term’, …, ‘term’");
//! assert!(notation.matches("rewrite H1, H2").unwrap());
//! ```

pub use ast::*;
pub use backends::*;
pub use config::*;
pub use error::*;
pub use notation::*;
pub use parser::*;
pub use substitution::*;
pub use visitor::*;

mod ast;
pub mod backends;
pub mod config;
#[allow(unused_assignments)]
mod error;
pub(crate) mod lexer;
pub mod markup;
mod notation;
mod parser;
mod substitution;
pub(crate) mod tokens;
mod visitor;

#[cfg(test)]
mod __fixtures;
