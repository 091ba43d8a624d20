//! Unicode text segmentation built around a tailorable implementation of
//! the Unicode Line Breaking Algorithm ([UAX #14]).
//!
//! The pipeline runs in four stages: the property table resolves each
//! scalar to a raw Line_Break class, the LB1 resolver reduces the ambiguous
//! classes, the carry state machine injects the space-run and combining-mark
//! memory of LB7–LB10, and the ordered rule cascade delivers one verdict
//! per adjacent pair. The classifier and the rule set are plain values that
//! callers can replace to tailor behavior without touching the engine.
//!
//! # Examples
//!
//! ```
//! use textbreak::{linebreak_locations, BreakKind};
//!
//! let breaks = linebreak_locations("hello,\ncruel world");
//! assert_eq!(breaks[0].kind, BreakKind::Required);
//! assert_eq!(breaks[0].index, 7);
//! assert_eq!(breaks[1].kind, BreakKind::Allowed);
//! assert_eq!(breaks[1].index, 13);
//! ```
//!
//! Tailored segmentation goes through a configured [`LineBreaker`]:
//!
//! ```
//! use textbreak::rules::{lb13_numeric, lb25_numeric, rule_index};
//! use textbreak::{Config, Input, LineBreaker, RuleSet};
//!
//! let rules = RuleSet::default()
//!     .replace(rule_index::LB13, lb13_numeric())?
//!     .replace(rule_index::LB25, lb25_numeric())?;
//! let breaker = LineBreaker::with_config(Config::builder().rules(rules).build());
//! let breaks = breaker.linebreak_locations(Input::from_text("$1,234.56"))?;
//! assert!(breaks.is_empty());
//! # Ok::<(), textbreak::Error>(())
//! ```
//!
//! [UAX #14]: https://www.unicode.org/reports/tr14/

mod classify;
mod engine;
mod error;
mod input;
pub mod properties;
pub mod rules;
mod segmenter;
pub mod ucd;

pub use classify::{default_line_break_class, resolve_class, Classifier, DefaultClassifier};
pub use error::{Error, Result};
pub use input::Input;
pub use properties::{line_break, BreakClass, PropertyTable};
pub use rules::{default_rule_set, RulePredicate, RuleSet, Verdict};
pub use segmenter::{
    apply_required_linebreaks, identify_linebreak_positions, linebreak_locations, BreakKind,
    BreakOpportunity, Config, ConfigBuilder, Line, LineBreaker,
};
