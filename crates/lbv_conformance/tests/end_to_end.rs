//! End-to-end tests: VCD text or files in, analysis and report out.

use std::fs;
use std::path::Path;

use lbv_analyze::{analyze, Finding, Verdict};
use lbv_config::{load_config_from_str, AnalysisConfig};
use lbv_conformance::{line_buffer_vcd, parse_str, run_pipeline, HTOT};
use lbv_wave::{parse_file, Value, WaveError};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Minimal and unrelated dumps
// ---------------------------------------------------------------------------

const RSTN_ONLY: &str = "\
$var wire 1 ! rstn $end
$enddefinitions $end
#0
0!
#5
1!
#10
0!
";

#[test]
fn rstn_only_dump_reports_three_transitions() {
    let analysis = run_pipeline(RSTN_ONLY, &AnalysisConfig::default());
    assert_eq!(analysis.activity.count("rstn"), Some(3));
    assert_eq!(analysis.activity.rows.len(), 1);

    let report = analysis.report();
    let numbers: Vec<u8> = report.sections.iter().map(|s| s.number).collect();
    assert_eq!(numbers, vec![1, 6]);
    assert_eq!(analysis.verdict(), Verdict::NotApplicable);
}

#[test]
fn unreadable_file_is_fatal() {
    let err = parse_file(Path::new("/nonexistent/dir/dump.vcd")).unwrap_err();
    assert!(matches!(err, WaveError::Open { .. }));
}

#[test]
fn parsing_a_file_twice_is_identical() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("dump.vcd");
    fs::write(&path, line_buffer_vcd(4, 30)).unwrap();

    let first = parse_file(&path).unwrap();
    let second = parse_file(&path).unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Synthetic two-line buffer
// ---------------------------------------------------------------------------

#[test]
fn correct_buffer_passes_every_check() {
    let analysis = run_pipeline(&line_buffer_vcd(6, 2 * HTOT), &AnalysisConfig::default());

    let sync = analysis.sync.ran().expect("sync check should run");
    assert_eq!(sync.input_rise, 0);
    assert_eq!(sync.output_rise, 30);
    assert_eq!(sync.measured(), 30);
    assert_eq!(sync.verdict(), Verdict::Pass);

    let states = analysis.states.ran().expect("state check should run");
    let labels: Vec<&str> = states.transitions.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "ST_LINE0_WR",
            "ST_LINE1_WR",
            "ST_LINE0_WR_RD",
            "ST_LINE1_WR_RD",
            "ST_LINE0_WR_RD",
            "ST_LINE1_WR_RD",
            "ST_LINE0_WR",
        ]
    );

    let writes = analysis.writes.ran().expect("write check should run");
    assert_eq!(writes.rams[0].assertions[0], 3);
    assert_eq!(writes.rams[1].assertions[0], 18);

    let data = analysis.data.ran().expect("data check should run");
    assert_eq!(data.first_enable, 3);
    assert_eq!(data.input_value, Some(Value::Vector(1)));
    assert_eq!(data.output, Some((33, Value::Vector(1))));
    assert_eq!(data.elapsed(), Some(30));

    assert_eq!(analysis.verdict(), Verdict::Pass);
    assert!(analysis.skipped().is_empty());
}

#[test]
fn correct_buffer_report_text() {
    let analysis = run_pipeline(&line_buffer_vcd(6, 30), &AnalysisConfig::default());
    let text = analysis.report().to_string();

    for heading in [
        "1. SIGNAL ACTIVITY SUMMARY",
        "2. STATE MACHINE TRANSITIONS",
        "3. RAM WRITE OPERATIONS",
        "4. SYNC SIGNAL DELAY VERIFICATION (2-line delay)",
        "5. DATA BUFFERING VERIFICATION",
        "6. OVERALL VERIFICATION RESULT",
    ] {
        assert!(text.contains(heading), "missing heading {heading}");
    }
    assert!(text.contains("  Input HSYNC first rise :  Time      0 ns"));
    assert!(text.contains("  ✓ PASS: Delay matches expected 2-line delay"));
    assert!(text.contains("  ✓ 2-line delay mechanism working"));
    assert!(text.contains("  RESULT: PASS"));
}

#[test]
fn late_output_fails_sync_and_overall() {
    let analysis = run_pipeline(&line_buffer_vcd(6, 31), &AnalysisConfig::default());
    assert_eq!(analysis.sync.ran().unwrap().measured(), 31);
    assert_eq!(analysis.sync.verdict(), Verdict::Fail);
    assert_eq!(analysis.verdict(), Verdict::Fail);

    let summary = analysis.summary.section();
    assert!(summary
        .lines
        .contains(&"  ✗ 2-line delay mechanism working".to_string()));
    assert_eq!(summary.lines.last().unwrap(), "  RESULT: FAIL");
}

#[test]
fn two_input_lines_omit_sync_section() {
    let analysis = run_pipeline(&line_buffer_vcd(2, 30), &AnalysisConfig::default());
    assert!(analysis.sync.ran().is_none());
    let report = analysis.report();
    assert!(report.section(4).is_none());
    assert!(report.section(2).is_some());
}

#[test]
fn config_changes_expected_delay() {
    let config = load_config_from_str("[timing]\nclocks_per_line = 15\nline_delay = 3\n").unwrap();
    let analysis = run_pipeline(&line_buffer_vcd(6, 45), &config);
    assert_eq!(analysis.sync.verdict(), Verdict::Pass);
    assert_eq!(analysis.data.ran().unwrap().output.as_ref().unwrap().0, 48);

    let text = analysis.report().to_string();
    assert!(text.contains("4. SYNC SIGNAL DELAY VERIFICATION (3-line delay)"));
}

#[test]
fn renamed_signals_via_config() {
    let vcd = line_buffer_vcd(6, 30)
        .replace(" i_hsync ", " hs_in ")
        .replace(" o_hsync ", " hs_out ");
    let default_run = run_pipeline(&vcd, &AnalysisConfig::default());
    assert!(default_run.sync.ran().is_none());

    let config =
        load_config_from_str("[signals]\ninput_sync = \"hs_in\"\noutput_sync = \"hs_out\"\n")
            .unwrap();
    let analysis = analyze(&parse_str(&vcd), &config);
    assert_eq!(analysis.sync.verdict(), Verdict::Pass);
}
