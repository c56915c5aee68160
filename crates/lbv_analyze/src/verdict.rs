//! Pass/fail outcomes of individual checks and their aggregation.

use std::fmt;

/// Result of a single check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The check ran and held.
    Pass,
    /// The check ran and did not hold.
    Fail,
    /// The check is descriptive or could not run.
    NotApplicable,
}

impl Verdict {
    /// Builds a verdict from a boolean outcome.
    pub fn from_bool(ok: bool) -> Self {
        if ok {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    /// Whether the verdict takes part in the overall result.
    pub fn is_applicable(self) -> bool {
        self != Verdict::NotApplicable
    }

    /// Combines verdicts: any `Fail` fails, otherwise any `Pass` passes,
    /// otherwise nothing applied.
    pub fn combine(verdicts: impl IntoIterator<Item = Verdict>) -> Verdict {
        let mut overall = Verdict::NotApplicable;
        for v in verdicts {
            match v {
                Verdict::Fail => return Verdict::Fail,
                Verdict::Pass => overall = Verdict::Pass,
                Verdict::NotApplicable => {}
            }
        }
        overall
    }

    /// Status mark used in the report.
    pub fn mark(self) -> &'static str {
        match self {
            Verdict::Pass => "✓",
            Verdict::Fail => "✗",
            Verdict::NotApplicable => "-",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
            Verdict::NotApplicable => write!(f, "NOT APPLICABLE"),
        }
    }
}
