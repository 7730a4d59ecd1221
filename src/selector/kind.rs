//! Simple-selector kinds and their ordering ranks.
//!
//! CSS compound selectors list their simple selectors in a fixed order:
//! element, id, class, attribute, pseudo-class, pseudo-element. Each kind
//! carries a rank encoding that order, and the three kinds that may appear
//! at most once per compound selector are flagged as singletons.

use std::fmt;

/// The kind of a single simple-selector part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Type selector: `div`, `a`, `table`.
    Element,
    /// ID selector: `#main`.
    Id,
    /// Class selector: `.container`.
    Class,
    /// Attribute selector: `[href$=".png"]`.
    Attribute,
    /// Pseudo-class: `:hover`, `:nth-of-type(even)`.
    PseudoClass,
    /// Pseudo-element: `::before`, `::first-line`.
    PseudoElement,
}

impl Kind {
    /// The kind's position in the required part order (1-based).
    ///
    /// Parts may only be appended in non-decreasing rank order.
    pub fn rank(self) -> u8 {
        match self {
            Kind::Element => 1,
            Kind::Id => 2,
            Kind::Class => 3,
            Kind::Attribute => 4,
            Kind::PseudoClass => 5,
            Kind::PseudoElement => 6,
        }
    }

    /// Returns `true` for kinds limited to one occurrence per compound
    /// selector (element, id, pseudo-element).
    pub fn is_singleton(self) -> bool {
        matches!(self, Kind::Element | Kind::Id | Kind::PseudoElement)
    }

    /// Append `value` to `out` with this kind's punctuation.
    ///
    /// The value is taken verbatim; no CSS token grammar is enforced.
    pub(crate) fn write_token(self, value: &str, out: &mut String) {
        match self {
            Kind::Element => out.push_str(value),
            Kind::Id => {
                out.push('#');
                out.push_str(value);
            }
            Kind::Class => {
                out.push('.');
                out.push_str(value);
            }
            Kind::Attribute => {
                out.push('[');
                out.push_str(value);
                out.push(']');
            }
            Kind::PseudoClass => {
                out.push(':');
                out.push_str(value);
            }
            Kind::PseudoElement => {
                out.push_str("::");
                out.push_str(value);
            }
        }
    }

    /// Human-readable name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Element => "element",
            Kind::Id => "id",
            Kind::Class => "class",
            Kind::Attribute => "attribute",
            Kind::PseudoClass => "pseudo-class",
            Kind::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
