//! Section 3: RAM write-enable assertions.

use lbv_config::AnalysisConfig;
use lbv_wave::TimelineSet;

use super::{require, Finding, Outcome};
use crate::report::Section;
use crate::verdict::Verdict;

/// Write assertions seen on one RAM's write enable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RamActivity {
    /// Write-enable signal name.
    pub signal: String,
    /// Times at which the enable was `1`, at most `limits.write_events`.
    pub assertions: Vec<u64>,
}

/// Write activity for every configured RAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RamWrites {
    /// One entry per write enable, in configured order.
    pub rams: Vec<RamActivity>,
    /// Assertions printed per RAM.
    pub report_limit: usize,
    /// Assertions collected per RAM.
    pub collect_limit: usize,
}

/// Collects `1` events on each write enable. Runs only when every enable is
/// present.
pub fn check(timelines: &TimelineSet, config: &AnalysisConfig) -> Outcome<RamWrites> {
    collect(timelines, config).into()
}

fn collect(timelines: &TimelineSet, config: &AnalysisConfig) -> Result<RamWrites, String> {
    let enables = &config.signals.ram_write_enables;
    if enables.is_empty() {
        return Err("no RAM write enables configured".to_string());
    }
    let mut rams = Vec::with_capacity(enables.len());
    for signal in enables {
        let timeline = require(timelines, signal)?;
        let assertions = timeline
            .iter()
            .filter(|e| e.value.is_high())
            .map(|e| e.time)
            .take(config.limits.write_events)
            .collect();
        rams.push(RamActivity {
            signal: signal.clone(),
            assertions,
        });
    }
    Ok(RamWrites {
        rams,
        report_limit: config.limits.write_report,
        collect_limit: config.limits.write_events,
    })
}

impl Finding for RamWrites {
    fn section(&self) -> Section {
        let mut section = Section::new(3, "RAM WRITE OPERATIONS");
        for (i, ram) in self.rams.iter().enumerate() {
            if i > 0 {
                section.line("");
            }
            section.line(format!(
                "  RAM{i} Write Enable activations (first {}):",
                self.collect_limit
            ));
            for time in ram.assertions.iter().take(self.report_limit) {
                section.line(format!("    Time {time:6} ns: RAM{i} Write Active"));
            }
        }
        section
    }

    /// Passes when every RAM was written at least once.
    fn verdict(&self) -> Verdict {
        Verdict::from_bool(self.rams.iter().all(|r| !r.assertions.is_empty()))
    }
}
