//! The individual checks run over a [`TimelineSet`].
//!
//! Every check except the activity summary can be skipped. A skipped check
//! leaves its report section out and contributes no verdict; it never stops
//! the other checks.

pub mod activity;
pub mod data;
pub mod states;
pub mod summary;
pub mod sync;
pub mod writes;

use lbv_wave::{Timeline, TimelineSet};

use crate::report::Section;
use crate::verdict::Verdict;

/// Result of one check.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    /// The check ran.
    Ran(T),
    /// The check could not run; the reason is for diagnostics only.
    Skipped(String),
}

impl<T> Outcome<T> {
    /// The finding, if the check ran.
    pub fn ran(&self) -> Option<&T> {
        match self {
            Outcome::Ran(t) => Some(t),
            Outcome::Skipped(_) => None,
        }
    }

    /// Why the check was skipped, if it was.
    pub fn skip_reason(&self) -> Option<&str> {
        match self {
            Outcome::Ran(_) => None,
            Outcome::Skipped(reason) => Some(reason),
        }
    }
}

impl<T> From<Result<T, String>> for Outcome<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(t) => Outcome::Ran(t),
            Err(reason) => Outcome::Skipped(reason),
        }
    }
}

impl<T: Finding> Outcome<T> {
    /// Verdict of the finding, `NotApplicable` when skipped.
    pub fn verdict(&self) -> Verdict {
        self.ran().map_or(Verdict::NotApplicable, T::verdict)
    }
}

/// A check result that renders as a report section.
pub trait Finding {
    /// The section this finding renders to.
    fn section(&self) -> Section;

    /// Whether the finding satisfies its check.
    fn verdict(&self) -> Verdict;
}

/// Looks up a timeline, turning absence into a skip reason.
pub(crate) fn require<'a>(
    timelines: &'a TimelineSet,
    name: &str,
) -> Result<&'a Timeline, String> {
    timelines
        .get(name)
        .ok_or_else(|| format!("signal '{name}' not found in waveform"))
}
