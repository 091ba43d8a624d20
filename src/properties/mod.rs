//! Line_Break property classification
//!
//! Resolves any Unicode scalar value to its UAX #14 Line_Break class. The
//! default tables are baked in at build time from `LineBreak.txt`; callers
//! pinning a different UCD snapshot can load their own [`PropertyTable`]
//! at runtime instead.

mod tables;

use std::path::Path;

use crate::error::Result;

/// A UAX #14 Line_Break class.
///
/// The set is closed; the tailoring API additionally addresses classes by
/// their two-letter property value alias via [`BreakClass::name`] and
/// [`BreakClass::from_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BreakClass {
    // Non-tailorable classes
    /// Mandatory break (BK)
    Mandatory,
    /// Carriage return (CR)
    CarriageReturn,
    /// Line feed (LF)
    LineFeed,
    /// Combining mark (CM)
    CombiningMark,
    /// Next line (NL)
    NextLine,
    /// Surrogate half (SG); never occurs in well-formed text
    Surrogate,
    /// Word joiner (WJ)
    WordJoiner,
    /// Zero width space (ZW)
    ZeroWidthSpace,
    /// Non-breaking glue (GL)
    Glue,
    /// Space (SP)
    Space,
    /// Zero width joiner (ZWJ)
    ZeroWidthJoiner,
    // Break opportunities
    /// Break opportunity before and after (B2)
    BreakBoth,
    /// Break after (BA)
    BreakAfter,
    /// Break before (BB)
    BreakBefore,
    /// Hyphen (HY)
    Hyphen,
    /// Contingent break (CB)
    ContingentBreak,
    // Characters prohibiting certain breaks
    /// Close punctuation (CL)
    ClosePunctuation,
    /// Close parenthesis (CP)
    CloseParenthesis,
    /// Exclamation/interrogation (EX)
    Exclamation,
    /// Inseparable (IN)
    Inseparable,
    /// Nonstarter (NS)
    Nonstarter,
    /// Open punctuation (OP)
    OpenPunctuation,
    /// Quotation (QU)
    Quotation,
    // Numeric context
    /// Infix numeric separator (IS)
    InfixNumeric,
    /// Numeric (NU)
    Numeric,
    /// Postfix numeric (PO)
    PostfixNumeric,
    /// Prefix numeric (PR)
    PrefixNumeric,
    /// Symbol allowing break after (SY)
    Symbol,
    // Other characters
    /// Ambiguous, alphabetic or ideographic (AI)
    Ambiguous,
    /// Alphabetic (AL)
    Alphabetic,
    /// Conditional Japanese starter (CJ)
    ConditionalJapaneseStarter,
    /// Emoji base (EB)
    EmojiBase,
    /// Emoji modifier (EM)
    EmojiModifier,
    /// Hangul LV syllable (H2)
    HangulLvSyllable,
    /// Hangul LVT syllable (H3)
    HangulLvtSyllable,
    /// Hebrew letter (HL)
    HebrewLetter,
    /// Ideographic (ID)
    Ideographic,
    /// Hangul leading jamo (JL)
    HangulLJamo,
    /// Hangul vowel jamo (JV)
    HangulVJamo,
    /// Hangul trailing jamo (JT)
    HangulTJamo,
    /// Regional indicator (RI)
    RegionalIndicator,
    /// Complex context, South East Asian (SA)
    ComplexContext,
    /// Unknown or unassigned (XX)
    Unknown,
}

impl BreakClass {
    /// The two-letter UAX #14 property value alias of this class.
    pub fn name(self) -> &'static str {
        use BreakClass::*;
        match self {
            Mandatory => "BK",
            CarriageReturn => "CR",
            LineFeed => "LF",
            CombiningMark => "CM",
            NextLine => "NL",
            Surrogate => "SG",
            WordJoiner => "WJ",
            ZeroWidthSpace => "ZW",
            Glue => "GL",
            Space => "SP",
            ZeroWidthJoiner => "ZWJ",
            BreakBoth => "B2",
            BreakAfter => "BA",
            BreakBefore => "BB",
            Hyphen => "HY",
            ContingentBreak => "CB",
            ClosePunctuation => "CL",
            CloseParenthesis => "CP",
            Exclamation => "EX",
            Inseparable => "IN",
            Nonstarter => "NS",
            OpenPunctuation => "OP",
            Quotation => "QU",
            InfixNumeric => "IS",
            Numeric => "NU",
            PostfixNumeric => "PO",
            PrefixNumeric => "PR",
            Symbol => "SY",
            Ambiguous => "AI",
            Alphabetic => "AL",
            ConditionalJapaneseStarter => "CJ",
            EmojiBase => "EB",
            EmojiModifier => "EM",
            HangulLvSyllable => "H2",
            HangulLvtSyllable => "H3",
            HebrewLetter => "HL",
            Ideographic => "ID",
            HangulLJamo => "JL",
            HangulVJamo => "JV",
            HangulTJamo => "JT",
            RegionalIndicator => "RI",
            ComplexContext => "SA",
            Unknown => "XX",
        }
    }

    /// Parse a two-letter UAX #14 property value alias.
    pub fn from_name(name: &str) -> Option<Self> {
        use BreakClass::*;
        Some(match name {
            "BK" => Mandatory,
            "CR" => CarriageReturn,
            "LF" => LineFeed,
            "CM" => CombiningMark,
            "NL" => NextLine,
            "SG" => Surrogate,
            "WJ" => WordJoiner,
            "ZW" => ZeroWidthSpace,
            "GL" => Glue,
            "SP" => Space,
            "ZWJ" => ZeroWidthJoiner,
            "B2" => BreakBoth,
            "BA" => BreakAfter,
            "BB" => BreakBefore,
            "HY" => Hyphen,
            "CB" => ContingentBreak,
            "CL" => ClosePunctuation,
            "CP" => CloseParenthesis,
            "EX" => Exclamation,
            "IN" => Inseparable,
            "NS" => Nonstarter,
            "OP" => OpenPunctuation,
            "QU" => Quotation,
            "IS" => InfixNumeric,
            "NU" => Numeric,
            "PO" => PostfixNumeric,
            "PR" => PrefixNumeric,
            "SY" => Symbol,
            "AI" => Ambiguous,
            "AL" => Alphabetic,
            "CJ" => ConditionalJapaneseStarter,
            "EB" => EmojiBase,
            "EM" => EmojiModifier,
            "H2" => HangulLvSyllable,
            "H3" => HangulLvtSyllable,
            "HL" => HebrewLetter,
            "ID" => Ideographic,
            "JL" => HangulLJamo,
            "JV" => HangulVJamo,
            "JT" => HangulTJamo,
            "RI" => RegionalIndicator,
            "SA" => ComplexContext,
            "XX" => Unknown,
            _ => return None,
        })
    }
}

/// Returns the raw Line_Break class of a scalar from the baked tables.
///
/// Every scalar maps to exactly one class; code points with no entry in the
/// data file default to [`BreakClass::Unknown`]. The Hangul syllable block
/// is classified arithmetically instead of through thousands of alternating
/// single-entry ranges.
pub fn line_break(scalar: char) -> BreakClass {
    let cp = scalar as u32;

    // Hangul LV/LVT syllables: LV iff the trailing jamo index is zero.
    if (0xAC00..=0xD7A3).contains(&cp) {
        return if (cp - 0xAC00) % 28 == 0 {
            BreakClass::HangulLvSyllable
        } else {
            BreakClass::HangulLvtSyllable
        };
    }

    lookup(tables::LINE_BREAK_RANGES, cp).unwrap_or(BreakClass::Unknown)
}

/// True when an SA scalar carries General_Category Mn or Mc, which LB1
/// resolves to CM rather than AL. The SA repertoire is bounded, so the
/// relevant Mn/Mc ranges are baked alongside the main table.
pub(crate) fn sa_is_combining(scalar: char) -> bool {
    let cp = scalar as u32;
    tables::SA_COMBINING_RANGES
        .binary_search_by(|&(start, end)| {
            if end < cp {
                std::cmp::Ordering::Less
            } else if start > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Binary search over a sorted, non-overlapping range table.
fn lookup(ranges: &[(u32, u32, BreakClass)], cp: u32) -> Option<BreakClass> {
    let idx = ranges.partition_point(|&(start, _, _)| start <= cp);
    if idx == 0 {
        return None;
    }
    let (start, end, class) = ranges[idx - 1];
    debug_assert!(start <= cp);
    (cp <= end).then_some(class)
}

/// A runtime-loaded code-point → Line_Break class table.
///
/// Equivalent in contract to the baked [`line_break`] lookup, for callers
/// that want to pin a specific `LineBreak.txt` snapshot.
#[derive(Debug, Clone)]
pub struct PropertyTable {
    ranges: Vec<(u32, u32, BreakClass)>,
}

impl PropertyTable {
    /// Build a table from pre-sorted, non-overlapping ranges.
    pub(crate) fn from_ranges(ranges: Vec<(u32, u32, BreakClass)>) -> Self {
        debug_assert!(ranges.windows(2).all(|w| w[0].1 < w[1].0));
        Self { ranges }
    }

    /// Load a table from a file in the `LineBreak.txt` format.
    ///
    /// Fails with [`crate::Error::DataLoad`] naming the path and line of
    /// the first malformed entry.
    pub fn from_ucd_file(path: impl AsRef<Path>) -> Result<Self> {
        let ranges = crate::ucd::load_line_break_ranges(path.as_ref())?;
        Ok(Self::from_ranges(ranges))
    }

    /// Resolve the raw Line_Break class of a scalar, defaulting to
    /// [`BreakClass::Unknown`] for unlisted code points.
    pub fn line_break(&self, scalar: char) -> BreakClass {
        lookup(&self.ranges, scalar as u32).unwrap_or(BreakClass::Unknown)
    }

    /// Number of ranges in the table.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// True when the table holds no ranges at all.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_classes() {
        assert_eq!(line_break('\n'), BreakClass::LineFeed);
        assert_eq!(line_break('\r'), BreakClass::CarriageReturn);
        assert_eq!(line_break(' '), BreakClass::Space);
        assert_eq!(line_break('a'), BreakClass::Alphabetic);
        assert_eq!(line_break('0'), BreakClass::Numeric);
        assert_eq!(line_break(','), BreakClass::InfixNumeric);
        assert_eq!(line_break('-'), BreakClass::Hyphen);
        assert_eq!(line_break('('), BreakClass::OpenPunctuation);
        assert_eq!(line_break(')'), BreakClass::CloseParenthesis);
        assert_eq!(line_break('}'), BreakClass::ClosePunctuation);
        assert_eq!(line_break('!'), BreakClass::Exclamation);
        assert_eq!(line_break('$'), BreakClass::PrefixNumeric);
        assert_eq!(line_break('%'), BreakClass::PostfixNumeric);
        assert_eq!(line_break('/'), BreakClass::Symbol);
        assert_eq!(line_break('"'), BreakClass::Quotation);
    }

    #[test]
    fn test_format_and_space_classes() {
        assert_eq!(line_break('\u{00A0}'), BreakClass::Glue);
        assert_eq!(line_break('\u{200B}'), BreakClass::ZeroWidthSpace);
        assert_eq!(line_break('\u{200D}'), BreakClass::ZeroWidthJoiner);
        assert_eq!(line_break('\u{2060}'), BreakClass::WordJoiner);
        assert_eq!(line_break('\u{0085}'), BreakClass::NextLine);
        assert_eq!(line_break('\u{2028}'), BreakClass::Mandatory);
        assert_eq!(line_break('\u{0308}'), BreakClass::CombiningMark);
    }

    #[test]
    fn test_east_asian_classes() {
        assert_eq!(line_break('木'), BreakClass::Ideographic);
        assert_eq!(line_break('。'), BreakClass::ClosePunctuation);
        assert_eq!(line_break('「'), BreakClass::OpenPunctuation);
        assert_eq!(line_break('ゃ'), BreakClass::ConditionalJapaneseStarter);
        assert_eq!(line_break('ー'), BreakClass::ConditionalJapaneseStarter);
        assert_eq!(line_break('・'), BreakClass::Nonstarter);
    }

    #[test]
    fn test_hangul_syllable_arithmetic() {
        // 가 (U+AC00) has no trailing jamo; 각 (U+AC01) does.
        assert_eq!(line_break('\u{AC00}'), BreakClass::HangulLvSyllable);
        assert_eq!(line_break('\u{AC01}'), BreakClass::HangulLvtSyllable);
        assert_eq!(line_break('\u{1100}'), BreakClass::HangulLJamo);
        assert_eq!(line_break('\u{1160}'), BreakClass::HangulVJamo);
        assert_eq!(line_break('\u{11A8}'), BreakClass::HangulTJamo);
    }

    #[test]
    fn test_emoji_classes() {
        assert_eq!(line_break('\u{231A}'), BreakClass::Ideographic);
        assert_eq!(line_break('\u{1F1E6}'), BreakClass::RegionalIndicator);
        assert_eq!(line_break('\u{1F466}'), BreakClass::EmojiBase);
        assert_eq!(line_break('\u{1F3FB}'), BreakClass::EmojiModifier);
    }

    #[test]
    fn test_unassigned_defaults_to_unknown() {
        assert_eq!(line_break('\u{E000}'), BreakClass::Unknown);
        assert_eq!(line_break('\u{10FFFD}'), BreakClass::Unknown);
    }

    #[test]
    fn test_totality_over_all_scalars() {
        // Every scalar resolves to some class without panicking; spot-check
        // the full range in strides to keep the test fast.
        for cp in (0..=0x10FFFF_u32).step_by(7) {
            if let Some(ch) = char::from_u32(cp) {
                let _ = line_break(ch);
            }
        }
    }

    #[test]
    fn test_sa_combining_membership() {
        // Thai SARA II (Mn) vs Thai KO KAI (Lo).
        assert!(sa_is_combining('\u{0E35}'));
        assert!(!sa_is_combining('\u{0E01}'));
    }

    #[test]
    fn test_class_names_round_trip() {
        for class in [
            BreakClass::Mandatory,
            BreakClass::Quotation,
            BreakClass::ZeroWidthJoiner,
            BreakClass::HangulLvtSyllable,
            BreakClass::Unknown,
        ] {
            assert_eq!(BreakClass::from_name(class.name()), Some(class));
        }
        assert_eq!(BreakClass::from_name("??"), None);
    }

    #[test]
    fn test_baked_ranges_are_sorted_and_disjoint() {
        let ranges = tables::LINE_BREAK_RANGES;
        for w in ranges.windows(2) {
            assert!(
                w[0].1 < w[1].0,
                "ranges {:#X}..{:#X} and {:#X}..{:#X} overlap or are unsorted",
                w[0].0,
                w[0].1,
                w[1].0,
                w[1].1
            );
        }
        for &(start, end, _) in ranges {
            assert!(start <= end);
        }
    }
}
