//! Parsers for the Unicode Character Database file formats
//!
//! Two formats are consumed: the property files (`LineBreak.txt` and its
//! siblings), whose data lines are `RANGE ; VALUE` with `#` comments, and
//! the conformance file `LineBreakTest.txt`, whose lines interleave code
//! points with `×` (no break) and `÷` (break) markers.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::properties::BreakClass;

/// One data line of a property file: inclusive range plus property value.
fn parse_property_line(line: &str) -> Option<(u32, u32, &str)> {
    let data = line.split('#').next()?.trim();
    if data.is_empty() {
        return None;
    }
    let (range, value) = data.split_once(';')?;
    let value = value.trim();
    let range = range.trim();
    let (start, end) = match range.split_once("..") {
        Some((start, end)) => (start, end),
        None => (range, range),
    };
    let start = u32::from_str_radix(start, 16).ok()?;
    let end = u32::from_str_radix(end, 16).ok()?;
    Some((start, end, value))
}

/// Load the ranges of a `LineBreak.txt`-format file, sorted by start code
/// point. Unknown class names, malformed ranges, and unreadable files fail
/// with [`Error::DataLoad`].
pub(crate) fn load_line_break_ranges(path: &Path) -> Result<Vec<(u32, u32, BreakClass)>> {
    let content = fs::read_to_string(path).map_err(|e| Error::DataLoad {
        path: path.to_path_buf(),
        line: 0,
        reason: e.to_string(),
    })?;

    let mut ranges = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let data = line.split('#').next().unwrap_or("").trim();
        if data.is_empty() {
            continue;
        }
        let (start, end, name) = parse_property_line(line).ok_or_else(|| Error::DataLoad {
            path: path.to_path_buf(),
            line: number + 1,
            reason: format!("malformed property line: {data:?}"),
        })?;
        if start > end || end > 0x10FFFF {
            return Err(Error::DataLoad {
                path: path.to_path_buf(),
                line: number + 1,
                reason: format!("invalid range {start:04X}..{end:04X}"),
            });
        }
        let class = BreakClass::from_name(name).ok_or_else(|| Error::DataLoad {
            path: path.to_path_buf(),
            line: number + 1,
            reason: format!("unknown Line_Break value {name:?}"),
        })?;
        ranges.push((start, end, class));
    }

    ranges.sort_unstable_by_key(|&(start, _, _)| start);
    debug!(
        "loaded {} Line_Break ranges from {}",
        ranges.len(),
        path.display()
    );
    Ok(ranges)
}

/// One parsed conformance case: the text under test and the expected
/// 1-based boundary indices, excluding the implicit end-of-text break.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakTest {
    /// Text assembled from the even-indexed code point tokens
    pub text: String,
    /// Indices of the `÷` markers between code points
    pub breaks: Vec<usize>,
}

/// Parse one line of `LineBreakTest.txt`; comment-only and empty lines
/// yield `None`. The leading `× ` and the trailing ` ÷` are stripped, so
/// the reported indices all lie strictly inside the text.
pub fn parse_break_test_line(line: &str) -> Option<BreakTest> {
    let data = line.split('#').next()?.trim();
    let data = data.strip_prefix('×')?.trim();
    let data = data.strip_suffix('÷').map(str::trim).unwrap_or(data);
    if data.is_empty() {
        return None;
    }

    let mut text = String::new();
    let mut breaks = Vec::new();
    let mut scalar_count = 0usize;
    for (position, token) in data.split_whitespace().enumerate() {
        if position % 2 == 0 {
            let cp = u32::from_str_radix(token, 16).ok()?;
            text.push(char::from_u32(cp)?);
            scalar_count += 1;
        } else {
            match token {
                "÷" => breaks.push(scalar_count),
                "×" => {}
                _ => return None,
            }
        }
    }
    Some(BreakTest { text, breaks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_property_lines() {
        assert_eq!(parse_property_line("0041..005A;AL"), Some((0x41, 0x5A, "AL")));
        assert_eq!(
            parse_property_line("00A0;GL  # NO-BREAK SPACE"),
            Some((0xA0, 0xA0, "GL"))
        );
        assert_eq!(parse_property_line("# comment only"), None);
        assert_eq!(parse_property_line("   "), None);
    }

    #[test]
    fn test_load_ranges_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# LineBreak-x.y.z.txt").unwrap();
        writeln!(file, "000A;LF").unwrap();
        writeln!(file, "0041..005A;AL # LATIN CAPITAL LETTERS").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "0030..0039;NU").unwrap();

        let table = crate::properties::PropertyTable::from_ucd_file(file.path()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.line_break('Z'), BreakClass::Alphabetic);
        assert_eq!(table.line_break('7'), BreakClass::Numeric);
        assert_eq!(table.line_break('\n'), BreakClass::LineFeed);
        assert_eq!(table.line_break('!'), BreakClass::Unknown);
    }

    #[test]
    fn test_load_rejects_unknown_class() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0041;QQ").unwrap();

        let err = crate::properties::PropertyTable::from_ucd_file(file.path()).unwrap_err();
        match err {
            Error::DataLoad { line, reason, .. } => {
                assert_eq!(line, 1);
                assert!(reason.contains("QQ"), "reason: {reason}");
            }
            other => panic!("expected DataLoad, got {other:?}"),
        }
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err =
            crate::properties::PropertyTable::from_ucd_file("no/such/LineBreak.txt").unwrap_err();
        assert!(matches!(err, Error::DataLoad { line: 0, .. }));
    }

    #[test]
    fn test_parse_break_test_line() {
        let case = parse_break_test_line("× 0041 ÷ 000A ÷ # comment").unwrap();
        assert_eq!(case.text, "A\n");
        assert_eq!(case.breaks, vec![1]);

        let case = parse_break_test_line("× 0041 × 0041 ÷").unwrap();
        assert_eq!(case.text, "AA");
        assert!(case.breaks.is_empty());

        assert_eq!(parse_break_test_line("# header"), None);
        assert_eq!(parse_break_test_line(""), None);
    }
}
