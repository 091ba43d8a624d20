//! The carry state machine around the pairwise rules
//!
//! The rule cascade is stateless, but LB7–LB10 need memory: a run of
//! spaces keeps the class that preceded it alive for LB8 and LB14–LB17,
//! and a combining-mark or ZWJ chain takes on the class of its base. Both
//! are modelled as a single nullable carry, updated per adjacent pair.
//!
//! The engine additionally counts consecutive regional indicators so that
//! LB30a only glues odd-numbered RI pairs, as the standard requires; the
//! count follows chains, since a combining mark attached to a regional
//! indicator does not end its flag sequence.

use crate::properties::BreakClass;
use crate::properties::BreakClass::{
    BreakBoth as B2, CarriageReturn as CR, CloseParenthesis as CP, ClosePunctuation as CL,
    CombiningMark as CM, EmojiBase as EB, EmojiModifier as EM, Ideographic as ID, LineFeed as LF,
    Mandatory as BK, NextLine as NL, Nonstarter as NS, OpenPunctuation as OP, Quotation as QU,
    RegionalIndicator as RI, Space as SP, ZeroWidthJoiner as ZWJ, ZeroWidthSpace as ZW,
};
use crate::rules::{RuleSet, Verdict};

/// Classes whose presence before a space run keeps constraining the first
/// character after it (LB8, LB14–LB17).
fn is_space_anchor(class: BreakClass) -> bool {
    matches!(class, OP | QU | CL | CP | B2 | ZW)
}

/// Per-text pair evaluator: feeds adjacent resolved classes through the
/// carry transitions and the rule cascade.
///
/// Holds only the carry, the RI run length, and a borrowed rule set; a new
/// engine is constructed for every text.
pub(crate) struct BreakEngine<'a> {
    rules: &'a RuleSet,
    carry: Option<BreakClass>,
    ri_run: usize,
    started: bool,
}

impl<'a> BreakEngine<'a> {
    pub(crate) fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            carry: None,
            ri_run: 0,
            started: false,
        }
    }

    /// Evaluate the boundary between `left` and `right`, both already
    /// LB1-resolved. First matching transition wins; the default transition
    /// consults the rule cascade with the literal pair.
    pub(crate) fn step(&mut self, left: BreakClass, right: BreakClass) -> Verdict {
        if !self.started {
            self.started = true;
            self.ri_run = usize::from(left == RI);
        }

        let mut chained = false;
        let verdict = match (left, right) {
            // A space after an anchor: the anchor becomes the carry.
            (l, SP) if is_space_anchor(l) => {
                self.carry = Some(l);
                Verdict::Prohibited
            }
            // A space after a chain that hangs off an anchor.
            (CM | ZWJ, SP) if self.carry.map_or(false, is_space_anchor) => Verdict::Prohibited,
            // A mark or joiner attaches to a base and starts a chain.
            (l, CM | ZWJ) if !matches!(l, SP | BK | CR | LF | NL | ZW | CM | ZWJ) => {
                chained = true;
                self.carry = Some(l);
                self.classify(l, CM)
            }
            // Space runs collapse.
            (SP, SP) => Verdict::Prohibited,
            // A chain keeps absorbing marks and joiners.
            (CM | ZWJ, CM | ZWJ) => {
                chained = true;
                Verdict::Prohibited
            }
            // A lone ZWJ before an ideograph or emoji (LB8a).
            (ZWJ, ID | EB | EM) if self.carry.is_none() => self.classify(ZWJ, right),
            // End of a chain: the base class drives the pair; a mark with
            // no base at all acts as AL (LB10).
            (CM | ZWJ, _) => {
                let base = self.carry.take().unwrap_or(BreakClass::Alphabetic);
                self.classify(base, right)
            }
            // LB8 survives a space run (and beats LB18).
            (SP, _) if self.carry == Some(ZW) => {
                self.carry = None;
                self.classify(ZW, right)
            }
            // LB14: OP SP* ×.
            (SP, _) if self.carry == Some(OP) => {
                self.carry = None;
                Verdict::Prohibited
            }
            // LB15: QU SP* × OP.
            (SP, OP) if self.carry == Some(QU) => {
                self.carry = None;
                Verdict::Prohibited
            }
            // LB16: (CL | CP) SP* × NS.
            (SP, NS) if matches!(self.carry, Some(CL) | Some(CP)) => {
                self.carry = None;
                Verdict::Prohibited
            }
            // LB17: B2 SP* × B2.
            (SP, B2) if self.carry == Some(B2) => {
                self.carry = None;
                Verdict::Prohibited
            }
            (l, r) => {
                // Leaving a space run discards whatever the run preserved.
                if l == SP {
                    self.carry = None;
                }
                self.classify(l, r)
            }
        };

        // Track the regional indicator run ending at the new left.
        if !chained {
            self.ri_run = if right == RI { self.ri_run + 1 } else { 0 };
        }

        verdict
    }

    /// Run the cascade, intercepting LB30a between even-numbered regional
    /// indicator pairs where the standard allows the break.
    fn classify(&self, left: BreakClass, right: BreakClass) -> Verdict {
        if left == RI && right == RI && self.ri_run % 2 == 0 {
            return Verdict::Allowed;
        }
        self.rules.classify(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::BreakClass::{
        Alphabetic as AL, Glue as GL, Hyphen as HY, Numeric as NU, WordJoiner as WJ,
    };

    fn run(classes: &[BreakClass]) -> Vec<Verdict> {
        let rules = RuleSet::default();
        let mut engine = BreakEngine::new(&rules);
        classes
            .windows(2)
            .map(|pair| engine.step(pair[0], pair[1]))
            .collect()
    }

    #[test]
    fn test_space_run_keeps_open_punctuation_alive() {
        // "( x" and "(  x" both glue: LB14 survives the run.
        assert_eq!(run(&[OP, SP, AL]), vec![Verdict::Prohibited; 2]);
        assert_eq!(run(&[OP, SP, SP, AL]), vec![Verdict::Prohibited; 3]);
    }

    #[test]
    fn test_zero_width_space_survives_spaces() {
        // ZW SP ÷: LB8 wins over LB18's plain space handling.
        assert_eq!(
            run(&[ZW, SP, AL]),
            vec![Verdict::Prohibited, Verdict::Allowed]
        );
    }

    #[test]
    fn test_quote_space_open_parenthesis() {
        assert_eq!(run(&[QU, SP, OP]), vec![Verdict::Prohibited; 2]);
        // Other classes after the run break normally.
        assert_eq!(
            run(&[QU, SP, AL]),
            vec![Verdict::Prohibited, Verdict::Allowed]
        );
    }

    #[test]
    fn test_close_then_nonstarter_over_spaces() {
        assert_eq!(run(&[CL, SP, NS]), vec![Verdict::Prohibited; 2]);
        assert_eq!(run(&[CP, SP, NS]), vec![Verdict::Prohibited; 2]);
        assert_eq!(run(&[B2, SP, B2]), vec![Verdict::Prohibited; 2]);
    }

    #[test]
    fn test_stale_carry_does_not_leak_across_words() {
        // QU SP AL SP OP: the second space run starts from AL, so nothing
        // glues the OP to it.
        assert_eq!(
            run(&[QU, SP, AL, SP, OP]),
            vec![
                Verdict::Prohibited,
                Verdict::Allowed,
                Verdict::Prohibited,
                Verdict::Allowed,
            ]
        );
    }

    #[test]
    fn test_combining_chain_takes_base_class() {
        // NU CM NU: the chain resolves as NU, so LB25 glues the digits.
        assert_eq!(run(&[NU, CM, NU]), vec![Verdict::Prohibited; 2]);
        // AL CM AL likewise via LB28.
        assert_eq!(run(&[AL, CM, AL]), vec![Verdict::Prohibited; 2]);
        // ID CM AL: ID-AL has no joining rule, so the chain end may break.
        assert_eq!(
            run(&[ID, CM, AL]),
            vec![Verdict::Prohibited, Verdict::Allowed]
        );
    }

    #[test]
    fn test_orphan_marks_act_as_alphabetic() {
        // A mark with no base glues to a following letter like AL would.
        assert_eq!(run(&[CM, AL]), vec![Verdict::Prohibited]);
        // After ZW the mark is an orphan too (LB8 allows the break first).
        assert_eq!(
            run(&[ZW, CM, AL]),
            vec![Verdict::Allowed, Verdict::Prohibited]
        );
    }

    #[test]
    fn test_zwj_glues_to_emoji() {
        assert_eq!(run(&[ZWJ, ID]), vec![Verdict::Prohibited]);
        assert_eq!(run(&[ZWJ, EB]), vec![Verdict::Prohibited]);
        // EB ZWJ EB: chain forms, then the base EB drives the next pair,
        // which has no joining rule against EB.
        assert_eq!(
            run(&[EB, ZWJ, EB]),
            vec![Verdict::Prohibited, Verdict::Allowed]
        );
    }

    #[test]
    fn test_regional_indicator_pairing() {
        // Two flags of two RIs each: break allowed only between the pairs.
        assert_eq!(
            run(&[RI, RI, RI, RI]),
            vec![Verdict::Prohibited, Verdict::Allowed, Verdict::Prohibited]
        );
        // A mark inside the flag does not end the run.
        assert_eq!(
            run(&[RI, CM, RI]),
            vec![Verdict::Prohibited, Verdict::Prohibited]
        );
        // A letter resets the count.
        assert_eq!(
            run(&[AL, RI, RI]),
            vec![Verdict::Allowed, Verdict::Prohibited]
        );
    }

    #[test]
    fn test_word_joiner_and_glue_pass_through() {
        assert_eq!(run(&[AL, WJ, AL]), vec![Verdict::Prohibited; 2]);
        assert_eq!(run(&[AL, GL, AL]), vec![Verdict::Prohibited; 2]);
        // LB12a: glue after a hyphen is breakable on the left side.
        assert_eq!(
            run(&[HY, GL, AL]),
            vec![Verdict::Allowed, Verdict::Prohibited]
        );
    }

    #[test]
    fn test_hard_breaks_reset_nothing_they_should_not() {
        assert_eq!(
            run(&[AL, LF, AL]),
            vec![Verdict::Prohibited, Verdict::Required]
        );
        assert_eq!(run(&[CR, LF]), vec![Verdict::Prohibited]);
    }
}
