//! The text-level driver: break opportunities, hard lines, soft offsets

use std::sync::Arc;

use crate::classify::{resolve_class, Classifier, DefaultClassifier};
use crate::engine::BreakEngine;
use crate::error::Result;
use crate::input::Input;
use crate::properties::{self, BreakClass, PropertyTable};
use crate::rules::{RuleSet, Verdict};

/// Kind of an emitted break opportunity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakKind {
    /// Wrapping must occur here
    Required,
    /// Wrapping may occur here
    Allowed,
}

/// A non-prohibited boundary between two adjacent code points.
///
/// `index` counts code points to the left of the boundary, so the first
/// possible boundary of a text has index 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakOpportunity {
    /// Whether wrapping is mandatory or merely permitted
    pub kind: BreakKind,
    /// 1-based code-point index of the boundary
    pub index: usize,
}

/// A hard line together with its candidate soft-break offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// The line content, trailing break control removed
    pub text: String,
    /// Code-point offsets relative to the line start where a soft break
    /// is allowed
    pub break_offsets: Vec<usize>,
}

/// Segmentation configuration: classifier, rule set, optional property
/// table override.
#[derive(Clone)]
pub struct Config {
    pub(crate) classifier: Arc<dyn Classifier>,
    pub(crate) rules: RuleSet,
    pub(crate) property_table: Option<Arc<PropertyTable>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classifier: Arc::new(DefaultClassifier),
            rules: RuleSet::default(),
            property_table: None,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("rules", &self.rules)
            .field("custom_table", &self.property_table.is_some())
            .finish()
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Fluent builder for [`Config`]
#[derive(Default)]
pub struct ConfigBuilder {
    classifier: Option<Arc<dyn Classifier>>,
    rules: Option<RuleSet>,
    property_table: Option<Arc<PropertyTable>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom classifier in place of [`DefaultClassifier`]
    pub fn classifier(mut self, classifier: impl Classifier + 'static) -> Self {
        self.classifier = Some(Arc::new(classifier));
        self
    }

    /// Use a tailored rule set in place of the default cascade
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Resolve raw classes through a runtime-loaded table instead of the
    /// baked one
    pub fn property_table(mut self, table: PropertyTable) -> Self {
        self.property_table = Some(Arc::new(table));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            classifier: self
                .classifier
                .unwrap_or_else(|| Arc::new(DefaultClassifier)),
            rules: self.rules.unwrap_or_default(),
            property_table: self.property_table,
        }
    }
}

/// Configured UAX #14 line breaker.
///
/// Construction is cheap and the value is `Send + Sync`; per-call state
/// (the carry and the current index) lives on the stack of each operation.
pub struct LineBreaker {
    config: Config,
}

impl LineBreaker {
    /// A breaker with the default classifier and rule set
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// A breaker with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// All non-prohibited boundaries of the input, in strictly increasing
    /// index order.
    pub fn linebreak_locations(&self, input: Input) -> Result<Vec<BreakOpportunity>> {
        let text = input.into_text()?;
        Ok(self.locations_str(&text))
    }

    /// Split the input at required boundaries only, discarding the break
    /// control(s) that end each line. An empty trailing line is suppressed.
    pub fn apply_required_linebreaks(&self, input: Input) -> Result<Vec<String>> {
        let text = input.into_text()?;
        Ok(self.hard_lines(&text).into_iter().map(|l| l.text).collect())
    }

    /// Split the input at required boundaries and report, for every hard
    /// line, the line-relative offsets where a soft break is allowed.
    pub fn identify_linebreak_positions(&self, input: Input) -> Result<Vec<Line>> {
        let text = input.into_text()?;
        Ok(self.hard_lines(&text))
    }

    /// Final class of one scalar: property lookup, LB1, classifier hook.
    fn class_of(&self, scalar: char) -> BreakClass {
        let raw = match &self.config.property_table {
            Some(table) => table.line_break(scalar),
            None => properties::line_break(scalar),
        };
        let resolved = resolve_class(scalar, raw);
        self.config.classifier.resolve(scalar, resolved)
    }

    fn locations_str(&self, text: &str) -> Vec<BreakOpportunity> {
        let mut events = Vec::new();
        let mut engine = BreakEngine::new(&self.config.rules);

        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return events;
        };
        let mut left = self.class_of(first);
        for (i, ch) in chars.enumerate() {
            let right = self.class_of(ch);
            match engine.step(left, right) {
                Verdict::Required => events.push(BreakOpportunity {
                    kind: BreakKind::Required,
                    index: i + 1,
                }),
                Verdict::Allowed => events.push(BreakOpportunity {
                    kind: BreakKind::Allowed,
                    index: i + 1,
                }),
                Verdict::Prohibited => {}
            }
            left = right;
        }
        events
    }

    fn hard_lines(&self, text: &str) -> Vec<Line> {
        let events = self.locations_str(text);
        let scalars: Vec<char> = text.chars().collect();
        if scalars.is_empty() {
            return Vec::new();
        }

        let mut lines = Vec::new();
        let mut start = 0;
        let mut soft = Vec::new();
        for event in &events {
            match event.kind {
                BreakKind::Allowed => soft.push(event.index - start),
                BreakKind::Required => {
                    lines.push(
                        self.make_line(&scalars[start..event.index], std::mem::take(&mut soft)),
                    );
                    start = event.index;
                }
            }
        }
        if start < scalars.len() {
            let line = self.make_line(&scalars[start..], soft);
            // The standard permits suppressing an empty final segment; a
            // text ending in a hard break yields no trailing empty line.
            if !(line.text.is_empty() && line.break_offsets.is_empty()) {
                lines.push(line);
            }
        }
        lines
    }

    /// Assemble one hard line, discarding its trailing break control. A
    /// CR LF pair counts as a single break and both code points are
    /// discarded.
    fn make_line(&self, scalars: &[char], break_offsets: Vec<usize>) -> Line {
        let mut end = scalars.len();
        if end > 0 && self.is_break_control(scalars[end - 1]) {
            end -= 1;
            if end > 0 && scalars[end] == '\n' && scalars[end - 1] == '\r' {
                end -= 1;
            }
        }
        Line {
            text: scalars[..end].iter().collect(),
            break_offsets,
        }
    }

    fn is_break_control(&self, scalar: char) -> bool {
        matches!(
            self.class_of(scalar),
            BreakClass::Mandatory
                | BreakClass::CarriageReturn
                | BreakClass::LineFeed
                | BreakClass::NextLine
        )
    }
}

impl Default for LineBreaker {
    fn default() -> Self {
        Self::new()
    }
}

/// All non-prohibited boundaries of `text` under the default configuration.
pub fn linebreak_locations(text: &str) -> Vec<BreakOpportunity> {
    LineBreaker::new().locations_str(text)
}

/// Hard-wrapped lines of `text` under the default configuration.
pub fn apply_required_linebreaks(text: &str) -> Vec<String> {
    LineBreaker::new()
        .hard_lines(text)
        .into_iter()
        .map(|l| l.text)
        .collect()
}

/// Hard lines plus candidate soft-break offsets of `text` under the
/// default configuration.
pub fn identify_linebreak_positions(text: &str) -> Vec<Line> {
    LineBreaker::new().hard_lines(text)
}
