//! Verification checks for the two-line pixel buffer.
//!
//! [`analyze`] runs every check over a parsed [`TimelineSet`] and returns an
//! [`Analysis`]; [`Analysis::report`] renders it as the six-section text
//! report. Checks are independent: a check whose signals are missing is
//! skipped without affecting the rest.
//!
//! # Usage
//!
//! ```ignore
//! let timelines = lbv_wave::parse_file(path)?;
//! let analysis = lbv_analyze::analyze(&timelines, &config);
//! print!("{}", analysis.report());
//! ```

#![warn(missing_docs)]

pub mod passes;
pub mod report;
pub mod verdict;

use lbv_config::AnalysisConfig;
use lbv_wave::TimelineSet;

pub use passes::activity::ActivitySummary;
pub use passes::data::DataBuffering;
pub use passes::states::{StateTransition, StateTransitions};
pub use passes::summary::Summary;
pub use passes::sync::SyncDelay;
pub use passes::writes::{RamActivity, RamWrites};
pub use passes::{Finding, Outcome};
pub use report::{Report, Section, REPORT_TITLE};
pub use verdict::Verdict;

/// Results of every check over one waveform.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    /// Section 1.
    pub activity: ActivitySummary,
    /// Section 2.
    pub states: Outcome<StateTransitions>,
    /// Section 3.
    pub writes: Outcome<RamWrites>,
    /// Section 4.
    pub sync: Outcome<SyncDelay>,
    /// Section 5.
    pub data: Outcome<DataBuffering>,
    /// Section 6.
    pub summary: Summary,
}

/// Runs every check.
pub fn analyze(timelines: &TimelineSet, config: &AnalysisConfig) -> Analysis {
    let activity = passes::activity::check(timelines, config);
    let states = passes::states::check(timelines, config);
    let writes = passes::writes::check(timelines, config);
    let sync = passes::sync::check(timelines, config);
    let data = passes::data::check(timelines, config);

    let summary = Summary::new([
        (
            "State machine transitions observed".to_string(),
            states.verdict(),
        ),
        (
            "RAM write operations functioning".to_string(),
            writes.verdict(),
        ),
        (
            format!("{}-line delay mechanism working", config.timing.line_delay),
            sync.verdict(),
        ),
    ]);

    Analysis {
        activity,
        states,
        writes,
        sync,
        data,
        summary,
    }
}

impl Analysis {
    /// Combined verdict of all applicable checks.
    pub fn verdict(&self) -> Verdict {
        self.summary.overall
    }

    /// `(check name, reason)` for every skipped check.
    pub fn skipped(&self) -> Vec<(&'static str, &str)> {
        [
            ("state transitions", self.states.skip_reason()),
            ("RAM writes", self.writes.skip_reason()),
            ("sync delay", self.sync.skip_reason()),
            ("data buffering", self.data.skip_reason()),
        ]
        .into_iter()
        .filter_map(|(name, reason)| reason.map(|r| (name, r)))
        .collect()
    }

    /// Renders the text report. Skipped checks have no section.
    pub fn report(&self) -> Report {
        let mut report = Report::new(REPORT_TITLE);
        report.push(self.activity.section());
        if let Some(states) = self.states.ran() {
            report.push(states.section());
        }
        if let Some(writes) = self.writes.ran() {
            report.push(writes.section());
        }
        if let Some(sync) = self.sync.ran() {
            report.push(sync.section());
        }
        if let Some(data) = self.data.ran() {
            report.push(data.section());
        }
        report.push(self.summary.section());
        report
    }
}
