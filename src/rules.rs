//! The pairwise rule cascade and its tailoring surface
//!
//! A rule is a pure pair predicate `(left, right) -> Option<Verdict>`;
//! `None` means "no opinion, consult the next rule". The required block
//! (LB2–LB12) is fixed and always evaluated first; the tailorable list
//! holds one predicate per numbered rule from LB12a onwards, evaluated in
//! order with the first non-`None` verdict winning. When nothing fires the
//! verdict is `Allowed` (LB31).
//!
//! Rules are stateless by construction. The space-run and combining-mark
//! memory that LB7–LB10 and LB14–LB17 need lives in the engine, which
//! substitutes the carried class before consulting the cascade.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::properties::BreakClass;
use crate::properties::BreakClass::{
    Alphabetic as AL, BreakAfter as BA, BreakBefore as BB, BreakBoth as B2, CarriageReturn as CR,
    CloseParenthesis as CP, ClosePunctuation as CL, CombiningMark as CM, ContingentBreak as CB,
    EmojiBase as EB, EmojiModifier as EM, Exclamation as EX, Glue as GL, HangulLJamo as JL,
    HangulLvSyllable as H2, HangulLvtSyllable as H3, HangulTJamo as JT, HangulVJamo as JV,
    HebrewLetter as HL, Hyphen as HY, Ideographic as ID, InfixNumeric as IS, Inseparable as IN,
    LineFeed as LF, Mandatory as BK, NextLine as NL, Nonstarter as NS, Numeric as NU,
    OpenPunctuation as OP, PostfixNumeric as PO, PrefixNumeric as PR, Quotation as QU,
    RegionalIndicator as RI, Space as SP, Symbol as SY, WordJoiner as WJ, ZeroWidthJoiner as ZWJ,
    ZeroWidthSpace as ZW,
};

/// Outcome of classifying one boundary between two adjacent code points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// A line break must occur here
    Required,
    /// A line break must not occur here
    Prohibited,
    /// A line break may occur here
    Allowed,
}

/// A pure pair predicate; `None` defers to the next rule in the cascade.
pub type RulePredicate = Arc<dyn Fn(BreakClass, BreakClass) -> Option<Verdict> + Send + Sync>;

/// Positions of the default tailorable rules, for use with
/// [`RuleSet::replace`] and [`RuleSet::remove`]. Identity is positional:
/// these constants describe the set built by [`RuleSet::default`], not any
/// set already edited by the caller.
pub mod rule_index {
    /// LB12a: no break before glue, except after spaces and hyphens
    pub const LB12A: usize = 0;
    /// LB13: no break before `]`, `)`, `!`, `;`, `/`
    pub const LB13: usize = 1;
    /// LB14: no break after open punctuation
    pub const LB14: usize = 2;
    /// LB15: no break between a quotation mark and open punctuation
    pub const LB15: usize = 3;
    /// LB16: no break between closing punctuation and a nonstarter
    pub const LB16: usize = 4;
    /// LB17: no break between adjacent B2
    pub const LB17: usize = 5;
    /// LB18: break after spaces
    pub const LB18: usize = 6;
    /// LB19: no break before or after quotation marks
    pub const LB19: usize = 7;
    /// LB20: break around contingent breaks
    pub const LB20: usize = 8;
    /// LB21: no break before BA/HY/NS, no break after BB
    pub const LB21: usize = 9;
    /// LB21b: no break between solidus and Hebrew letters
    pub const LB21B: usize = 10;
    /// LB22: no break before inseparables
    pub const LB22: usize = 11;
    /// LB23: no break between letters and digits
    pub const LB23: usize = 12;
    /// LB23a: no break between numeric prefixes and ideographs
    pub const LB23A: usize = 13;
    /// LB24: no break between numeric affixes and letters
    pub const LB24: usize = 14;
    /// LB25: no break inside number formations
    pub const LB25: usize = 15;
    /// LB26: no break inside Korean syllable blocks
    pub const LB26: usize = 16;
    /// LB27: treat Korean syllable blocks like ideographs
    pub const LB27: usize = 17;
    /// LB28: no break between alphabetics
    pub const LB28: usize = 18;
    /// LB29: no break between infix separators and alphabetics
    pub const LB29: usize = 19;
    /// LB30: no break between alphanumerics and parentheses
    pub const LB30: usize = 20;
    /// LB30a: no break between regional indicator pairs
    pub const LB30A: usize = 21;
    /// LB30b: no break between an emoji base and an emoji modifier
    pub const LB30B: usize = 22;
}

/// The required block: LB4–LB6 hard breaks, LB7 spaces, LB8/LB8a zero-width
/// characters, the LB9 chain tail, LB11 word joiner, LB12 glue. Evaluated
/// before every tailorable rule and never editable.
pub(crate) fn required_verdict(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    // LB4/LB5: break after hard line breaks; CR LF is one unit.
    match (left, right) {
        (CR, LF) => return Some(Verdict::Prohibited),
        (BK | CR | LF | NL, _) => return Some(Verdict::Required),
        _ => {}
    }
    // LB6: never break before a hard line break.
    if matches!(right, BK | CR | LF | NL) {
        return Some(Verdict::Prohibited);
    }
    // LB7: never break before a space or zero width space.
    if matches!(right, SP | ZW) {
        return Some(Verdict::Prohibited);
    }
    // LB8: break after zero width space.
    if left == ZW {
        return Some(Verdict::Allowed);
    }
    // LB8a: keep a zero width joiner glued to a following ideograph or emoji.
    if left == ZWJ && matches!(right, ID | EB | EM) {
        return Some(Verdict::Prohibited);
    }
    // LB9 chain tail: a combining mark or ZWJ attaches to any base that is
    // not itself a break anchor.
    if matches!(right, CM | ZWJ) && !matches!(left, BK | CR | LF | NL | SP | ZW) {
        return Some(Verdict::Prohibited);
    }
    // LB11: word joiner glues on both sides.
    if left == WJ || right == WJ {
        return Some(Verdict::Prohibited);
    }
    // LB12: glue prohibits a break after itself.
    if left == GL {
        return Some(Verdict::Prohibited);
    }
    None
}

fn lb12a(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    (right == GL && !matches!(left, SP | BA | HY)).then_some(Verdict::Prohibited)
}

fn lb13(_left: BreakClass, right: BreakClass) -> Option<Verdict> {
    matches!(right, CL | CP | EX | IS | SY).then_some(Verdict::Prohibited)
}

fn lb14(left: BreakClass, _right: BreakClass) -> Option<Verdict> {
    (left == OP).then_some(Verdict::Prohibited)
}

fn lb15(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    (left == QU && right == OP).then_some(Verdict::Prohibited)
}

fn lb16(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    (matches!(left, CL | CP) && right == NS).then_some(Verdict::Prohibited)
}

fn lb17(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    (left == B2 && right == B2).then_some(Verdict::Prohibited)
}

fn lb18(left: BreakClass, _right: BreakClass) -> Option<Verdict> {
    (left == SP).then_some(Verdict::Allowed)
}

fn lb19(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    (left == QU || right == QU).then_some(Verdict::Prohibited)
}

fn lb20(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    (left == CB || right == CB).then_some(Verdict::Allowed)
}

fn lb21(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    (matches!(right, BA | HY | NS) || left == BB).then_some(Verdict::Prohibited)
}

fn lb21b(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    (left == SY && right == HL).then_some(Verdict::Prohibited)
}

fn lb22(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    (right == IN && matches!(left, AL | HL | EX | ID | EB | EM | IN | NU))
        .then_some(Verdict::Prohibited)
}

fn lb23(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    let joined = (matches!(left, AL | HL) && right == NU)
        || (left == NU && matches!(right, AL | HL));
    joined.then_some(Verdict::Prohibited)
}

fn lb23a(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    let joined = (left == PR && matches!(right, ID | EB | EM))
        || (matches!(left, ID | EB | EM) && right == PO);
    joined.then_some(Verdict::Prohibited)
}

fn lb24(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    let joined = (matches!(left, PR | PO) && matches!(right, AL | HL))
        || (matches!(left, AL | HL) && matches!(right, PR | PO));
    joined.then_some(Verdict::Prohibited)
}

fn lb25(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    let joined = matches!(
        (left, right),
        (CL, PO)
            | (CP, PO)
            | (CL, PR)
            | (CP, PR)
            | (NU, PO)
            | (NU, PR)
            | (PO, OP)
            | (PO, NU)
            | (PR, OP)
            | (PR, NU)
            | (HY, NU)
            | (IS, NU)
            | (NU, NU)
            | (SY, NU)
    );
    joined.then_some(Verdict::Prohibited)
}

fn lb26(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    let joined = (left == JL && matches!(right, JL | JV | H2 | H3))
        || (matches!(left, JV | H2) && matches!(right, JV | JT))
        || (matches!(left, JT | H3) && right == JT);
    joined.then_some(Verdict::Prohibited)
}

fn lb27(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    let joined = (matches!(left, JL | JV | JT | H2 | H3) && matches!(right, IN | PO))
        || (left == PR && matches!(right, JL | JV | JT | H2 | H3));
    joined.then_some(Verdict::Prohibited)
}

fn lb28(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    (matches!(left, AL | HL) && matches!(right, AL | HL)).then_some(Verdict::Prohibited)
}

fn lb29(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    (left == IS && matches!(right, AL | HL)).then_some(Verdict::Prohibited)
}

fn lb30(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    let joined = (matches!(left, AL | HL | NU) && right == OP)
        || (left == CP && matches!(right, AL | HL | NU));
    joined.then_some(Verdict::Prohibited)
}

fn lb30a(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    // The engine pre-empts this rule between even-numbered regional
    // indicator pairs, where the standard allows the break.
    (left == RI && right == RI).then_some(Verdict::Prohibited)
}

fn lb30b(left: BreakClass, right: BreakClass) -> Option<Verdict> {
    (left == EB && right == EM).then_some(Verdict::Prohibited)
}

/// The numeric-aware LB13 variant of UAX #14 §8.2: breaks stay permitted
/// after a digit run, so `]`/`)`/`;`/`/` only glue to non-numeric contexts.
pub fn lb13_numeric() -> RulePredicate {
    Arc::new(|left, right| {
        let joined = match right {
            EX => true,
            CL | CP | IS | SY => left != NU,
            _ => false,
        };
        joined.then_some(Verdict::Prohibited)
    })
}

/// The numeric-aware LB25 variant of UAX #14 §8.2: treats a run matching
/// `(PR|PO)? (OP|HY)? NU (NU|SY|IS)* (CL|CP)? (PO|PR)?` as atomic by
/// prohibiting every boundary interior to that shape.
pub fn lb25_numeric() -> RulePredicate {
    Arc::new(|left, right| {
        let joined = match (left, right) {
            (PR | PO, OP | HY | NU) => true,
            (OP | HY, NU) => true,
            (NU | SY | IS, NU | SY | IS) => true,
            (NU | SY | IS, CL | CP) => true,
            (NU | SY | IS, PO | PR) => true,
            (CL | CP, PO | PR) => true,
            _ => false,
        };
        joined.then_some(Verdict::Prohibited)
    })
}

/// An ordered rule cascade: the fixed required block plus an editable list
/// of tailorable pair predicates.
#[derive(Clone)]
pub struct RuleSet {
    tailorable: Vec<RulePredicate>,
}

impl Default for RuleSet {
    fn default() -> Self {
        let tailorable: Vec<RulePredicate> = vec![
            Arc::new(lb12a),
            Arc::new(lb13),
            Arc::new(lb14),
            Arc::new(lb15),
            Arc::new(lb16),
            Arc::new(lb17),
            Arc::new(lb18),
            Arc::new(lb19),
            Arc::new(lb20),
            Arc::new(lb21),
            Arc::new(lb21b),
            Arc::new(lb22),
            Arc::new(lb23),
            Arc::new(lb23a),
            Arc::new(lb24),
            Arc::new(lb25),
            Arc::new(lb26),
            Arc::new(lb27),
            Arc::new(lb28),
            Arc::new(lb29),
            Arc::new(lb30),
            Arc::new(lb30a),
            Arc::new(lb30b),
        ];
        Self { tailorable }
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("tailorable_rules", &self.tailorable.len())
            .finish()
    }
}

impl RuleSet {
    /// The default cascade; equivalent to `RuleSet::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cascade with no tailorable rules at all: only the required block
    /// applies and everything else is an LB31 break opportunity.
    pub fn required_only() -> Self {
        Self { tailorable: Vec::new() }
    }

    /// Number of tailorable rules in the set.
    pub fn len(&self) -> usize {
        self.tailorable.len()
    }

    /// True when no tailorable rules remain.
    pub fn is_empty(&self) -> bool {
        self.tailorable.is_empty()
    }

    /// Replace the tailorable rule at `index`, keeping evaluation order.
    ///
    /// Identity is positional; locate rules via [`rule_index`] on a default
    /// set. Fails with [`Error::InvalidTailoring`] when `index` is out of
    /// range.
    pub fn replace(mut self, index: usize, rule: RulePredicate) -> Result<Self> {
        let len = self.tailorable.len();
        let slot = self
            .tailorable
            .get_mut(index)
            .ok_or(Error::InvalidTailoring { index, len })?;
        *slot = rule;
        Ok(self)
    }

    /// Remove the tailorable rule at `index`; later rules shift down.
    ///
    /// Fails with [`Error::InvalidTailoring`] when `index` is out of range.
    pub fn remove(mut self, index: usize) -> Result<Self> {
        if index >= self.tailorable.len() {
            return Err(Error::InvalidTailoring {
                index,
                len: self.tailorable.len(),
            });
        }
        self.tailorable.remove(index);
        Ok(self)
    }

    /// Append a tailorable rule after the existing ones, just ahead of the
    /// LB31 default.
    pub fn push(mut self, rule: RulePredicate) -> Self {
        self.tailorable.push(rule);
        self
    }

    /// Classify one boundary: required block first, then the tailorable
    /// rules in order, then the LB31 default.
    pub fn classify(&self, left: BreakClass, right: BreakClass) -> Verdict {
        if let Some(verdict) = required_verdict(left, right) {
            return verdict;
        }
        for rule in &self.tailorable {
            if let Some(verdict) = rule(left, right) {
                return verdict;
            }
        }
        Verdict::Allowed
    }
}

/// The default rule cascade. Convenience alias for [`RuleSet::default`].
pub fn default_rule_set() -> RuleSet {
    RuleSet::default()
}
