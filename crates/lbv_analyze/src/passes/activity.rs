//! Section 1: event counts for the signals of interest.

use lbv_config::AnalysisConfig;
use lbv_wave::TimelineSet;

use super::Finding;
use crate::report::Section;
use crate::verdict::Verdict;

/// Event counts in configured order. Signals absent from the dump are left
/// out rather than listed as zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivitySummary {
    /// `(signal name, event count)` rows.
    pub rows: Vec<(String, usize)>,
}

/// Counts events for every configured activity signal present in the dump.
pub fn check(timelines: &TimelineSet, config: &AnalysisConfig) -> ActivitySummary {
    let rows = config
        .signals
        .activity
        .iter()
        .filter_map(|name| timelines.get(name).map(|tl| (name.clone(), tl.len())))
        .collect();
    ActivitySummary { rows }
}

impl ActivitySummary {
    /// Event count for `name`, if it was listed.
    pub fn count(&self, name: &str) -> Option<usize> {
        self.rows.iter().find(|(n, _)| n == name).map(|(_, c)| *c)
    }
}

impl Finding for ActivitySummary {
    fn section(&self) -> Section {
        let mut section = Section::new(1, "SIGNAL ACTIVITY SUMMARY");
        for (name, count) in &self.rows {
            section.line(format!("{name:15}: {count:5} transitions"));
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
    fn counts_present_signals_in_config_order() {
        let timelines = set(&[
            ("o_hsync", bits(&[(0, '0'), (5, '1')])),
            ("rstn", bits(&[(0, '0'), (5, '1'), (10, '0')])),
            ("unrelated", bits(&[(0, '1')])),
            ("i_r_data", vecs(&[])),
        ]);
        let summary = check(&timelines, &AnalysisConfig::default());
        assert_eq!(
            summary.rows,
            vec![
                ("rstn".to_string(), 3),
                ("o_hsync".to_string(), 2),
                ("i_r_data".to_string(), 0),
            ]
        );
        assert_eq!(summary.count("unrelated"), None);
    }

    #[test]
    fn row_format() {
        let timelines = set(&[("rstn", bits(&[(0, '0'), (5, '1'), (10, '0')]))]);
        let section = check(&timelines, &AnalysisConfig::default()).section();
        assert_eq!(section.lines, vec!["rstn           :     3 transitions"]);
    }
}
