use crate::assess::AssessmentReport;
use crate::error::AssessError;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GRAY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Placeholder for a syllable missing on one side
const MISSING: &str = "·";

pub struct Renderer {
    color: bool,
    show_normalized: bool,
}

impl Renderer {
    pub fn new(color: bool, show_normalized: bool) -> Self {
        Self {
            color,
            show_normalized,
        }
    }

    pub fn report(&self, report: &AssessmentReport) -> String {
        let mut out = String::new();

        let (label, color) = if report.passed {
            ("PASS", GREEN)
        } else {
            ("FAIL", RED)
        };
        let _ = writeln!(
            out,
            "{} {:>3}%",
            self.paint(label, color),
            report.similarity
        );

        let _ = writeln!(out, "  target:     {}", report.target_romanized);
        if report.transcript == report.transcript_romanized {
            let _ = writeln!(out, "  heard:      {}", report.transcript_romanized);
        } else {
            let _ = writeln!(
                out,
                "  heard:      {} {}",
                report.transcript_romanized,
                self.paint(&format!("({})", report.transcript), GRAY)
            );
        }

        if self.show_normalized {
            let _ = writeln!(
                out,
                "{}",
                self.paint(
                    &format!(
                        "  normalized: {} | {}",
                        report.normalized_target, report.normalized_transcript
                    ),
                    GRAY
                )
            );
        }

        if !report.mismatches.is_empty() {
            out.push_str(&self.mismatch_table(report));
        }
        out
    }

    pub fn error(&self, err: &AssessError) -> String {
        format!("{} {}\n", self.paint("ERROR", YELLOW), err)
    }

    fn mismatch_table(&self, report: &AssessmentReport) -> String {
        let cells: Vec<(String, &str, &str)> = report
            .mismatches
            .iter()
            .map(|m| {
                (
                    (m.index + 1).to_string(),
                    or_missing(&m.expected),
                    or_missing(&m.received),
                )
            })
            .collect();

        let index_width = cells
            .iter()
            .map(|(i, _, _)| i.width())
            .chain(["#".width()])
            .max()
            .unwrap_or(1);
        let expected_width = cells
            .iter()
            .map(|(_, e, _)| e.width())
            .chain(["expected".width()])
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(
            out,
            "  {}  {}  received",
            pad("#", index_width),
            pad("expected", expected_width)
        );
        for (index, expected, received) in &cells {
            let _ = writeln!(
                out,
                "  {}  {}  {}",
                pad(index, index_width),
                pad(expected, expected_width),
                self.paint(received, RED)
            );
        }
        out
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

fn or_missing(token: &str) -> &str {
    if token.is_empty() { MISSING } else { token }
}

/// Left-align by display width; `format!("{:<n}")` counts chars, which
/// misaligns tone marks and CJK
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::{Assessor, AttemptRequest};

    fn plain() -> Renderer {
        Renderer::new(false, false)
    }

    #[test]
    fn test_pass_report() {
        let report = Assessor::default()
            .assess(&AttemptRequest::romanized("ni3 hao3", "ni3 hao3"))
            .unwrap();
        let text = plain().report(&report);
        assert!(text.starts_with("PASS 100%"));
        assert!(!text.contains("expected"));
    }

    #[test]
    fn test_mismatch_table() {
        let report = Assessor::default()
            .assess(&AttemptRequest::romanized("ni3", "ni3 hao3"))
            .unwrap();
        let text = plain().report(&report);
        assert!(text.starts_with("FAIL"));
        assert!(text.contains("  #  expected  received\n"));
        assert!(text.contains("  2  hao3      ·\n"));
    }

    #[test]
    fn test_color_toggle() {
        let report = Assessor::default()
            .assess(&AttemptRequest::romanized("ni3 hao3", "ni3 hao3"))
            .unwrap();
        assert!(Renderer::new(true, false).report(&report).contains(GREEN));
        assert!(!plain().report(&report).contains('\x1b'));
    }

    #[test]
    fn test_show_normalized() {
        let report = Assessor::default()
            .assess(&AttemptRequest::romanized("Ni3 Hao3!", "ni3 hao3"))
            .unwrap();
        let text = Renderer::new(false, true).report(&report);
        assert!(text.contains("normalized: ni3 hao3 | ni3 hao3"));
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("hǎo", 5), "hǎo  ");
        assert_eq!(pad("你好", 5), "你好 ");
        assert_eq!(pad("toolong", 3), "toolong");
    }
}
