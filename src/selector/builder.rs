//! The immutable [`Selector`] value and its fluent append/combine operations.
//!
//! Every operation returns a *new* `Selector`; the receiver is never
//! touched. That makes the empty starting value safe to share: two chains
//! built from the same `Selector` cannot see each other's parts, which a
//! single mutable accumulator would get wrong.

use std::fmt;

use crate::selector::kind::Kind;

/// Errors from appending a part out of order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A part of lower rank was appended after a part of higher rank.
    #[error(
        "{found} part may not follow {after}: parts must appear in \
         element, id, class, attribute, pseudo-class, pseudo-element order"
    )]
    OutOfOrder {
        /// Kind of the rejected part.
        found: Kind,
        /// Kind of the most recently appended part.
        after: Kind,
    },

    /// A singleton kind (element, id, pseudo-element) was appended twice
    /// in a row.
    #[error("{kind} may occur at most once in a selector")]
    Duplicate {
        /// The repeated singleton kind.
        kind: Kind,
    },
}

/// An immutable, possibly partially built CSS complex selector.
///
/// Start from [`Selector::new`], append parts in rank order, and read the
/// result with [`as_str`](Selector::as_str) or `to_string`:
///
/// ```
/// use selvage::selector::Selector;
///
/// let sel = Selector::new().element("a")?.class("nav")?.pseudo_class("hover")?;
/// assert_eq!(sel.as_str(), "a.nav:hover");
/// # Ok::<(), selvage::selector::BuildError>(())
/// ```
///
/// Two selectors join with [`combine`](Selector::combine), which resets the
/// ordering state: the combined value is a finished composition, not a base
/// for further part appends under the original rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    /// The string form accumulated so far.
    rendered: String,
    /// Kind of the most recently appended part; `None` for a fresh or
    /// combined selector.
    last: Option<Kind>,
}

impl Selector {
    /// The empty starting value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a type selector: `div`.
    pub fn element(&self, value: &str) -> Result<Selector, BuildError> {
        self.append(Kind::Element, value)
    }

    /// Append an ID selector: `#main`.
    pub fn id(&self, value: &str) -> Result<Selector, BuildError> {
        self.append(Kind::Id, value)
    }

    /// Append a class selector: `.container`.
    pub fn class(&self, value: &str) -> Result<Selector, BuildError> {
        self.append(Kind::Class, value)
    }

    /// Append an attribute selector: `[href$=".png"]`.
    ///
    /// The value is the text between the brackets, taken verbatim.
    pub fn attr(&self, value: &str) -> Result<Selector, BuildError> {
        self.append(Kind::Attribute, value)
    }

    /// Append a pseudo-class: `:focus`.
    pub fn pseudo_class(&self, value: &str) -> Result<Selector, BuildError> {
        self.append(Kind::PseudoClass, value)
    }

    /// Append a pseudo-element: `::before`.
    pub fn pseudo_element(&self, value: &str) -> Result<Selector, BuildError> {
        self.append(Kind::PseudoElement, value)
    }

    /// Join `self` and `other` with a combinator token, one space on each
    /// side: `"{self} {combinator} {other}"`.
    ///
    /// The token is inserted verbatim — [`Combinator`] covers the four CSS
    /// combinators, but any string is accepted. The result's ordering state
    /// is reset, so neither child's last part constrains it.
    ///
    /// [`Combinator`]: crate::selector::Combinator
    pub fn combine<C: AsRef<str>>(&self, combinator: C, other: &Selector) -> Selector {
        let combinator = combinator.as_ref();
        let mut rendered = String::with_capacity(
            self.rendered.len() + combinator.len() + other.rendered.len() + 2,
        );
        rendered.push_str(&self.rendered);
        rendered.push(' ');
        rendered.push_str(combinator);
        rendered.push(' ');
        rendered.push_str(&other.rendered);
        Selector { rendered, last: None }
    }

    /// The rendered selector string. Empty for a fresh builder.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Returns `true` if no part has been appended and nothing combined.
    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    /// Guarded append shared by the six part operations.
    fn append(&self, kind: Kind, value: &str) -> Result<Selector, BuildError> {
        if let Some(last) = self.last {
            if kind.rank() < last.rank() {
                return Err(BuildError::OutOfOrder { found: kind, after: last });
            }
            // Only an immediate repeat lands here; a non-adjacent repeat of
            // a singleton kind has lower rank than `last` and is rejected
            // above as an ordering violation.
            if kind == last && kind.is_singleton() {
                return Err(BuildError::Duplicate { kind });
            }
        }
        let mut rendered = self.rendered.clone();
        kind.write_token(value, &mut rendered);
        Ok(Selector { rendered, last: Some(kind) })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Combinator;

    fn fresh() -> Selector {
        Selector::new()
    }

    // ── Rendering ────────────────────────────────────────────────────

    #[test]
    fn empty_builder_renders_empty_string() {
        assert_eq!(fresh().as_str(), "");
        assert!(fresh().is_empty());
    }

    #[test]
    fn single_parts_render_with_punctuation() {
        assert_eq!(fresh().element("div").unwrap().as_str(), "div");
        assert_eq!(fresh().id("main").unwrap().as_str(), "#main");
        assert_eq!(fresh().class("info").unwrap().as_str(), ".info");
        assert_eq!(fresh().attr("data-id").unwrap().as_str(), "[data-id]");
        assert_eq!(fresh().pseudo_class("hover").unwrap().as_str(), ":hover");
        assert_eq!(fresh().pseudo_element("after").unwrap().as_str(), "::after");
    }

    #[test]
    fn parts_concatenate_without_separators() {
        let sel = fresh()
            .id("main")
            .unwrap()
            .class("container")
            .unwrap()
            .class("editable")
            .unwrap();
        assert_eq!(sel.as_str(), "#main.container.editable");
    }

    #[test]
    fn attribute_value_is_verbatim() {
        let sel = fresh()
            .element("a")
            .unwrap()
            .attr("href$=\".png\"")
            .unwrap()
            .pseudo_class("focus")
            .unwrap();
        assert_eq!(sel.as_str(), "a[href$=\".png\"]:focus");
    }

    #[test]
    fn full_rank_chain() {
        let sel = fresh()
            .element("input")
            .unwrap()
            .id("login")
            .unwrap()
            .class("wide")
            .unwrap()
            .attr("type=\"text\"")
            .unwrap()
            .pseudo_class("focus")
            .unwrap()
            .pseudo_element("placeholder")
            .unwrap();
        assert_eq!(
            sel.as_str(),
            "input#login.wide[type=\"text\"]:focus::placeholder"
        );
    }

    #[test]
    fn display_matches_as_str() {
        let sel = fresh().element("td").unwrap();
        assert_eq!(sel.to_string(), sel.as_str());
    }

    // ── Ordering guard ───────────────────────────────────────────────

    #[test]
    fn lower_rank_after_higher_is_out_of_order() {
        let sel = fresh().id("x").unwrap();
        assert_eq!(
            sel.element("y"),
            Err(BuildError::OutOfOrder { found: Kind::Element, after: Kind::Id })
        );
    }

    #[test]
    fn id_after_class_is_out_of_order() {
        let sel = fresh().class("container").unwrap();
        assert_eq!(
            sel.id("main"),
            Err(BuildError::OutOfOrder { found: Kind::Id, after: Kind::Class })
        );
    }

    #[test]
    fn equal_rank_is_allowed_for_repeatable_kinds() {
        let sel = fresh()
            .class("a")
            .unwrap()
            .class("b")
            .unwrap()
            .pseudo_class("hover")
            .unwrap()
            .pseudo_class("visited")
            .unwrap();
        assert_eq!(sel.as_str(), ".a.b:hover:visited");
    }

    // ── Duplicate guard ──────────────────────────────────────────────

    #[test]
    fn immediate_singleton_repeat_is_duplicate() {
        let sel = fresh().id("x").unwrap();
        assert_eq!(sel.id("y"), Err(BuildError::Duplicate { kind: Kind::Id }));

        let sel = fresh().element("div").unwrap();
        assert_eq!(
            sel.element("span"),
            Err(BuildError::Duplicate { kind: Kind::Element })
        );

        let sel = fresh().pseudo_element("before").unwrap();
        assert_eq!(
            sel.pseudo_element("after"),
            Err(BuildError::Duplicate { kind: Kind::PseudoElement })
        );
    }

    #[test]
    fn non_adjacent_singleton_repeat_is_out_of_order_not_duplicate() {
        let sel = fresh().id("x").unwrap().class("c").unwrap();
        assert_eq!(
            sel.id("y"),
            Err(BuildError::OutOfOrder { found: Kind::Id, after: Kind::Class })
        );
    }

    // ── Combine ──────────────────────────────────────────────────────

    #[test]
    fn combine_inserts_one_space_each_side() {
        let a = fresh().element("p").unwrap();
        let b = fresh().element("img").unwrap();
        assert_eq!(a.combine(Combinator::Child, &b).as_str(), "p > img");
        assert_eq!(a.combine("+", &b).as_str(), "p + img");
    }

    #[test]
    fn combine_resets_ordering_state() {
        let a = fresh().pseudo_element("before").unwrap();
        let b = fresh().class("x").unwrap();
        let combined = a.combine(Combinator::Child, &b);
        // Appending an element after a combine is legal again.
        let extended = combined.element("div").unwrap();
        assert_eq!(extended.as_str(), "::before > .xdiv");
    }

    #[test]
    fn combinator_token_is_not_validated() {
        let a = fresh().element("a").unwrap();
        let b = fresh().element("b").unwrap();
        assert_eq!(a.combine("??", &b).as_str(), "a ?? b");
    }

    // ── Immutability ─────────────────────────────────────────────────

    #[test]
    fn append_leaves_receiver_unchanged() {
        let base = fresh().element("div").unwrap();
        let with_id = base.id("main").unwrap();
        let with_class = base.class("wide").unwrap();
        assert_eq!(base.as_str(), "div");
        assert_eq!(with_id.as_str(), "div#main");
        assert_eq!(with_class.as_str(), "div.wide");
    }

    #[test]
    fn shared_empty_value_starts_independent_chains() {
        let start = fresh();
        let a = start.element("ul").unwrap().class("menu").unwrap();
        let b = start.id("footer").unwrap();
        assert_eq!(a.as_str(), "ul.menu");
        assert_eq!(b.as_str(), "#footer");
        assert!(start.is_empty());
    }

    #[test]
    fn combine_leaves_both_receivers_unchanged() {
        let a = fresh().element("h1").unwrap();
        let b = fresh().class("title").unwrap();
        let _ = a.combine(Combinator::Descendant, &b);
        assert_eq!(a.as_str(), "h1");
        assert_eq!(b.as_str(), ".title");
    }
}
