//! LB1 class resolution and the classifier tailoring hook
//!
//! The rule engine only ever sees the reduced class set: LB1 rewrites the
//! ambiguous raw classes (AI, SG, XX, SA, CJ) into concrete ones before any
//! pair is evaluated. Callers can interpose their own [`Classifier`] to
//! apply locale- or context-specific adjustments on top of the default.

use crate::properties::{self, BreakClass};

/// Resolution of ambiguous Line_Break classes per LB1.
///
/// | Raw | Resolved |
/// |-----|----------|
/// | AI, SG, XX | AL |
/// | SA  | CM when General_Category is Mn or Mc, otherwise AL |
/// | CJ  | NS |
pub fn resolve_class(scalar: char, raw: BreakClass) -> BreakClass {
    match raw {
        BreakClass::Ambiguous | BreakClass::Surrogate | BreakClass::Unknown => {
            BreakClass::Alphabetic
        }
        BreakClass::ComplexContext => {
            if properties::sa_is_combining(scalar) {
                BreakClass::CombiningMark
            } else {
                BreakClass::Alphabetic
            }
        }
        BreakClass::ConditionalJapaneseStarter => BreakClass::Nonstarter,
        other => other,
    }
}

/// The default Line_Break classification of a scalar: baked table lookup
/// followed by LB1 resolution.
pub fn default_line_break_class(scalar: char) -> BreakClass {
    resolve_class(scalar, properties::line_break(scalar))
}

/// Pluggable classification hook, consulted once per scalar.
///
/// `resolved` is the LB1-resolved default class; implementations return it
/// unchanged where no tailoring applies.
pub trait Classifier: Send + Sync {
    /// Final class of `scalar` as seen by the rule engine.
    fn resolve(&self, scalar: char, resolved: BreakClass) -> BreakClass;
}

/// The untailored classifier: accepts every default resolution as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClassifier;

impl Classifier for DefaultClassifier {
    fn resolve(&self, _scalar: char, resolved: BreakClass) -> BreakClass {
        resolved
    }
}

impl<F> Classifier for F
where
    F: Fn(char, BreakClass) -> BreakClass + Send + Sync,
{
    fn resolve(&self, scalar: char, resolved: BreakClass) -> BreakClass {
        self(scalar, resolved)
    }
}
