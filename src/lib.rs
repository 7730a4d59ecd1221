//! # selvage
//!
//! A fluent, immutable builder for CSS selector strings, plus two small
//! companions: a rectangle value and JSON encode/decode helpers with
//! prototype-style rehydration.
//!
//! The builder assembles selector parts (element, id, class, attribute,
//! pseudo-class, pseudo-element) in their required order, validates that
//! order across calls, and joins finished selectors with combinators. It
//! never parses CSS and never matches anything against a DOM — every value
//! string is inserted verbatim — and every operation returns a new value,
//! so one shared starting point can seed any number of independent chains.
//!
//! ```
//! use selvage::selector::{Combinator, Selector};
//!
//! let base = Selector::new();
//! let link = base.element("a")?.attr("href$=\".png\"")?.pseudo_class("focus")?;
//! assert_eq!(link.as_str(), "a[href$=\".png\"]:focus");
//!
//! let item = base.id("main")?.class("container")?.class("editable")?;
//! let nested = link.combine(Combinator::Child, &item);
//! assert_eq!(nested.as_str(), "a[href$=\".png\"]:focus > #main.container.editable");
//! # Ok::<(), selvage::selector::BuildError>(())
//! ```
//!
//! ## Modules
//!
//! - **[`selector`]** — the selector builder: kinds, combinators, ordering rules
//! - **[`geometry`]** — the [`Rectangle`](geometry::Rectangle) value
//! - **[`json`]** — `to_json`/`from_json` and [`hydrate`](json::hydrate)

pub mod geometry;
pub mod json;
pub mod selector;
