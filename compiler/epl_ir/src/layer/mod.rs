//! The language ladder.
//!
//! Every expression form belongs to exactly one layer, and each layer
//! understands all forms of the layers below it. Interpreters are configured
//! with the highest layer they accept.

use std::fmt;

/// A language layer, ordered from the smallest language to the largest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    /// Literals, variables, operators, zero test, `if`, `let`, tuples.
    Let,
    /// Procedure literals and calls.
    Proc,
    /// Mutually recursive procedure definitions.
    LetRec,
    /// Explicit reference cells and statement blocks.
    ExplicitRefs,
    /// Assignment to variables.
    ImplicitRefs,
    /// Deferred evaluation.
    Lazy,
    /// Exceptions.
    #[default]
    Try,
}

impl Layer {
    /// All layers, smallest first.
    pub const ALL: [Layer; 7] = [
        Layer::Let,
        Layer::Proc,
        Layer::LetRec,
        Layer::ExplicitRefs,
        Layer::ImplicitRefs,
        Layer::Lazy,
        Layer::Try,
    ];

    /// Human-readable language name, as used in diagnostics.
    pub fn language_name(self) -> &'static str {
        match self {
            Layer::Let => "LET",
            Layer::Proc => "PROC",
            Layer::LetRec => "LETREC",
            Layer::ExplicitRefs => "EXPLICIT-REFS",
            Layer::ImplicitRefs => "IMPLICIT-REFS",
            Layer::Lazy => "LAZY",
            Layer::Try => "TRY",
        }
    }

    /// Whether a program written for `other` can run on this layer.
    #[inline]
    pub fn accepts(self, other: Layer) -> bool {
        other <= self
    }

    /// Whether this layer has the exception-aware continuation protocol.
    #[inline]
    pub fn handles_exceptions(self) -> bool {
        self >= Layer::Try
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.language_name())
    }
}
