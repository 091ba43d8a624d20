//! Basic usage of the line-breaking API

use textbreak::rules::{lb13_numeric, lb25_numeric, rule_index};
use textbreak::{
    apply_required_linebreaks, identify_linebreak_positions, linebreak_locations, Config, Input,
    LineBreaker, Result, RuleSet,
};

fn main() -> Result<()> {
    let text = "hello,\nyou cruel, cruel world";

    println!("=== Break opportunities ===");
    for event in linebreak_locations(text) {
        println!("  {:?} at code point {}", event.kind, event.index);
    }

    println!("\n=== Hard-wrapped lines ===");
    for line in apply_required_linebreaks(text) {
        println!("  {line:?}");
    }

    println!("\n=== Lines with soft-break offsets ===");
    for line in identify_linebreak_positions(text) {
        println!("  {:?} may wrap at {:?}", line.text, line.break_offsets);
    }

    // The numeric tailoring keeps monetary amounts on one line.
    let rules = RuleSet::default()
        .replace(rule_index::LB13, lb13_numeric())?
        .replace(rule_index::LB25, lb25_numeric())?;
    let breaker = LineBreaker::with_config(Config::builder().rules(rules).build());
    let events = breaker.linebreak_locations(Input::from_text("pay $1,234.56 now"))?;
    println!("\n=== Numeric tailoring ===");
    println!("  {} break opportunities in a price line", events.len());

    Ok(())
}
