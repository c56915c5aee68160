//! Section 4: input-to-output sync delay.
//!
//! The first rising edge of the output sync is compared with the first
//! rising edge of the input sync. A correct buffer delays by exactly
//! `line_delay * clocks_per_line` clocks; there is no tolerance.

use lbv_config::AnalysisConfig;
use lbv_wave::TimelineSet;

use super::{require, Finding, Outcome};
use crate::report::Section;
use crate::verdict::Verdict;

/// Measured and expected sync delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncDelay {
    /// First rising edge of the input sync.
    pub input_rise: u64,
    /// First rising edge of the output sync.
    pub output_rise: u64,
    /// Expected delay in time units.
    pub expected: u64,
    /// Time units per clock, for the clock counts in the report.
    pub clock_period: u64,
    /// Lines of delay the expectation is built from.
    pub line_delay: u64,
}

impl SyncDelay {
    /// Output rise minus input rise. Negative if the output rose first.
    pub fn measured(&self) -> i128 {
        i128::from(self.output_rise) - i128::from(self.input_rise)
    }
}

/// Edge counts a delay measurement needs before it is trusted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRequirement {
    /// Minimum rising edges on the input.
    pub input: usize,
    /// Minimum rising edges on the output.
    pub output: usize,
}

/// Measures the delay between two edge lists.
///
/// Returns `None` when either list is below its minimum.
pub fn measure_delay(
    input_edges: &[u64],
    output_edges: &[u64],
    required: EdgeRequirement,
) -> Option<(u64, u64)> {
    if input_edges.len() < required.input.max(1) || output_edges.len() < required.output.max(1) {
        return None;
    }
    Some((input_edges[0], output_edges[0]))
}

/// Finds rising edges on both sync signals and measures their delay.
pub fn check(timelines: &TimelineSet, config: &AnalysisConfig) -> Outcome<SyncDelay> {
    measure(timelines, config).into()
}

fn measure(timelines: &TimelineSet, config: &AnalysisConfig) -> Result<SyncDelay, String> {
    let signals = &config.signals;
    let limits = &config.limits;
    let input_edges = require(timelines, &signals.input_sync)?.rising_edges(limits.edge_events);
    let output_edges = require(timelines, &signals.output_sync)?.rising_edges(limits.edge_events);

    let required = EdgeRequirement {
        input: limits.min_input_edges,
        output: limits.min_output_edges,
    };
    let (input_rise, output_rise) = measure_delay(&input_edges, &output_edges, required)
        .ok_or_else(|| {
            format!(
                "too few rising edges ({} on {}, {} on {}; need {} and {})",
                input_edges.len(),
                signals.input_sync,
                output_edges.len(),
                signals.output_sync,
                required.input,
                required.output,
            )
        })?;

    Ok(SyncDelay {
        input_rise,
        output_rise,
        expected: config.timing.expected_delay(),
        clock_period: config.timing.clock_period,
        line_delay: config.timing.line_delay,
    })
}

/// Formats a duration as clocks, with two decimals when it is not whole.
pub(crate) fn clocks(duration: i128, clock_period: u64) -> String {
    let period = i128::from(clock_period.max(1));
    if duration % period == 0 {
        format!("{}", duration / period)
    } else {
        format!("{:.2}", duration as f64 / period as f64)
    }
}

/// Section title carrying the configured line count.
pub fn section_title(line_delay: u64) -> String {
    format!("SYNC SIGNAL DELAY VERIFICATION ({line_delay}-line delay)")
}

impl Finding for SyncDelay {
    fn section(&self) -> Section {
        let measured = self.measured();
        let expected = i128::from(self.expected);
        let mut section = Section::new(4, section_title(self.line_delay));
        section.line(format!("  Input HSYNC first rise :  Time {:6} ns", self.input_rise));
        section.line(format!("  Output HSYNC first rise:  Time {:6} ns", self.output_rise));
        section.line(format!(
            "  Measured delay         :  {measured:6} ns ({} clocks)",
            clocks(measured, self.clock_period)
        ));
        section.line(format!(
            "  Expected delay         :  {expected:6} ns ({} clocks)",
            clocks(expected, self.clock_period)
        ));
        match self.verdict() {
            Verdict::Pass => section.line(format!(
                "  ✓ PASS: Delay matches expected {}-line delay",
                self.line_delay
            )),
            _ => section.line("  ✗ FAIL: Delay does not match expected value"),
        }
        section
    }

    fn verdict(&self) -> Verdict {
        Verdict::from_bool(self.measured() == i128::from(self.expected))
    }
}
