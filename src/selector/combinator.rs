//! CSS combinators joining two complete selectors.

/// A combinator between two selectors.
///
/// [`Selector::combine`](crate::selector::Selector::combine) accepts any
/// `AsRef<str>`, so these are a convenience for the four standard CSS
/// tokens rather than a closed set. Note that the descendant combinator's
/// token is itself a single space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Descendant combinator (whitespace): `A B`.
    Descendant,
    /// Child combinator: `A > B`.
    Child,
    /// Next-sibling combinator: `A + B`.
    NextSibling,
    /// Subsequent-sibling combinator: `A ~ B`.
    SubsequentSibling,
}

impl Combinator {
    /// The combinator's token string.
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::NextSibling => "+",
            Combinator::SubsequentSibling => "~",
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
