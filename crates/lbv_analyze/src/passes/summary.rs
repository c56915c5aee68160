//! Section 6: overall result built from the verdicts of the other checks.

use super::Finding;
use crate::report::Section;
use crate::verdict::Verdict;

/// One line of the overall result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckStatus {
    /// What the check asserts.
    pub description: String,
    /// Its verdict.
    pub verdict: Verdict,
}

/// Per-check verdicts and their combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Checks in report order.
    pub checks: Vec<CheckStatus>,
    /// Combined verdict.
    pub overall: Verdict,
}

impl Summary {
    /// Combines `(description, verdict)` pairs.
    pub fn new(checks: impl IntoIterator<Item = (String, Verdict)>) -> Self {
        let checks: Vec<CheckStatus> = checks
            .into_iter()
            .map(|(description, verdict)| CheckStatus {
                description,
                verdict,
            })
            .collect();
        let overall = Verdict::combine(checks.iter().map(|c| c.verdict));
        Self { checks, overall }
    }
}

impl Finding for Summary {
    fn section(&self) -> Section {
        let mut section = Section::new(6, "OVERALL VERIFICATION RESULT");
        for check in &self.checks {
            let suffix = if check.verdict.is_applicable() {
                ""
            } else {
                " (not checked)"
            };
            section.line(format!(
                "  {} {}{suffix}",
                check.verdict.mark(),
                check.description
            ));
        }
        section.line(format!("  RESULT: {}", self.overall));
        section
    }

    fn verdict(&self) -> Verdict {
        self.overall
    }
}
