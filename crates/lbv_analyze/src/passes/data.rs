//! Section 5: first pixel in versus first pixel out.
//!
//! Descriptive only. The input value is not compared with the output value,
//! so this check never passes or fails.

use lbv_config::AnalysisConfig;
use lbv_wave::{TimelineSet, Value};

use super::sync::clocks;
use super::{require, Finding, Outcome};
use crate::report::Section;
use crate::verdict::Verdict;

/// Data observed around the first enabled input pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataBuffering {
    /// Time of the first data-enable assertion.
    pub first_enable: u64,
    /// First input data value at or after `first_enable`.
    pub input_value: Option<Value>,
    /// First non-zero output value at or after the expected output time.
    pub output: Option<(u64, Value)>,
    /// Time units per clock.
    pub clock_period: u64,
}

impl DataBuffering {
    /// Time from the first enable to the observed output, if any.
    pub fn elapsed(&self) -> Option<u64> {
        self.output.as_ref().map(|(t, _)| t - self.first_enable)
    }
}

/// Locates the first enabled input pixel and the output it should reappear as.
pub fn check(timelines: &TimelineSet, config: &AnalysisConfig) -> Outcome<DataBuffering> {
    locate(timelines, config).into()
}

fn locate(timelines: &TimelineSet, config: &AnalysisConfig) -> Result<DataBuffering, String> {
    let signals = &config.signals;
    let input = require(timelines, &signals.input_data)?;
    let output = require(timelines, &signals.output_data)?;
    let enable = require(timelines, &signals.data_enable)?;

    let first_enable = enable
        .first_where(Value::is_high)
        .map(|e| e.time)
        .ok_or_else(|| format!("{} is never asserted", signals.data_enable))?;

    let input_value = input
        .first_at_or_after(first_enable)
        .map(|e| e.value.clone());

    let expected_output = first_enable.saturating_add(config.timing.expected_delay());
    let output = output
        .iter()
        .find(|e| e.time >= expected_output && e.value.is_nonzero())
        .map(|e| (e.time, e.value.clone()));

    Ok(DataBuffering {
        first_enable,
        input_value,
        output,
        clock_period: config.timing.clock_period,
    })
}

impl Finding for DataBuffering {
    fn section(&self) -> Section {
        let mut section = Section::new(5, "DATA BUFFERING VERIFICATION");
        section.line(format!("  First pixel write time  : {:6} ns", self.first_enable));
        let input = self
            .input_value
            .as_ref()
            .map_or_else(|| "none".to_string(), Value::to_string);
        section.line(format!("  Input data value        : {input}"));
        if let Some((time, value)) = &self.output {
            let elapsed = i128::from(time - self.first_enable);
            section.line(format!("  First pixel output time : {time:6} ns"));
            section.line(format!("  Output data value       : {value}"));
            section.line(format!(
                "  Data delay              : {elapsed} ns ({} clocks)",
                clocks(elapsed, self.clock_period)
            ));
        } else {
            section.line("  No non-zero output data after the expected delay");
        }
        section
    }

    fn verdict(&self) -> Verdict {
        Verdict::NotApplicable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::fixtures::{bits, set, vecs};

    #[test]
    fn finds_input_and_delayed_output() {
        let timelines = set(&[
            ("i_de", bits(&[(0, '0'), (3, '1'), (13, '0')])),
            ("i_r_data", vecs(&[(0, 0), (3, 17), (4, 18)])),
            ("o_r_data", vecs(&[(0, 0), (20, 5), (33, 0), (34, 17), (35, 18)])),
        ]);
        let outcome = check(&timelines, &AnalysisConfig::default());
        let result = outcome.ran().unwrap();
        assert_eq!(result.first_enable, 3);
        assert_eq!(result.input_value, Some(Value::Vector(17)));
        assert_eq!(result.output, Some((34, Value::Vector(17))));
        assert_eq!(result.elapsed(), Some(31));
        assert_eq!(result.verdict(), Verdict::NotApplicable);
    }

    #[test]
    fn output_search_is_inclusive_of_expected_time() {
        let timelines = set(&[
            ("i_de", bits(&[(2, '1')])),
            ("i_r_data", vecs(&[(0, 9)])),
            ("o_r_data", vecs(&[(32, 9)])),
        ]);
        let outcome = check(&timelines, &AnalysisConfig::default());
        let result = outcome.ran().unwrap();
        // no input change at or after the enable
        assert_eq!(result.input_value, None);
        assert_eq!(result.output, Some((32, Value::Vector(9))));
    }

    #[test]
    fn no_output_found() {
        let timelines = set(&[
            ("i_de", bits(&[(2, '1')])),
            ("i_r_data", vecs(&[(2, 9)])),
            ("o_r_data", vecs(&[(40, 0)])),
        ]);
        let outcome = check(&timelines, &AnalysisConfig::default());
        let result = outcome.ran().unwrap();
        assert!(result.output.is_none());
        let section = result.section();
        assert_eq!(section.lines.len(), 3);
        assert_eq!(section.lines[1], "  Input data value        : 9");
    }

    #[test]
    fn enable_never_high_skips() {
        let timelines = set(&[
            ("i_de", bits(&[(0, '0')])),
            ("i_r_data", vecs(&[])),
            ("o_r_data", vecs(&[])),
        ]);
        let outcome = check(&timelines, &AnalysisConfig::default());
        assert_eq!(outcome.skip_reason(), Some("i_de is never asserted"));
    }

    #[test]
    fn missing_data_signal_skips() {
        let timelines = set(&[("i_de", bits(&[(0, '1')])), ("i_r_data", vecs(&[]))]);
        let outcome = check(&timelines, &AnalysisConfig::default());
        assert!(outcome.skip_reason().unwrap().contains("o_r_data"));
    }

    #[test]
    fn section_with_output() {
        let timelines = set(&[
            ("i_de", bits(&[(3, '1')])),
            ("i_r_data", vecs(&[(3, 17)])),
            ("o_r_data", vecs(&[(33, 17)])),
        ]);
        let section = check(&timelines, &AnalysisConfig::default())
            .ran()
            .unwrap()
            .section();
        assert_eq!(section.lines[2], "  First pixel output time :     33 ns");
        assert_eq!(section.lines[4], "  Data delay              : 30 ns (30 clocks)");
    }
}
