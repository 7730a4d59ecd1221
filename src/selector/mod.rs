//! Fluent CSS selector construction: kinds, combinators, and the
//! immutable [`Selector`] builder.
//!
//! The builder enforces the syntactic rules of a compound selector — parts
//! appear in element, id, class, attribute, pseudo-class, pseudo-element
//! order, and the element/id/pseudo-element kinds occur at most once —
//! while never parsing or matching anything. Values are inserted verbatim.

pub mod builder;
pub mod combinator;
pub mod kind;

pub use builder::{BuildError, Selector};
pub use combinator::Combinator;
pub use kind::Kind;
