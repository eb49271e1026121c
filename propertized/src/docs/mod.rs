//! Documentation metadata derived from schemas.
//!
//! One canonical declaration of a model can feed generated API docs: the
//! structures here are serialisable for external tooling, and
//! [`SchemaDoc::render_text`] produces a plain-text field listing.

mod ir;

pub use ir::{CliDoc, FieldDoc, SchemaDoc};

#[cfg(test)]
mod tests;
