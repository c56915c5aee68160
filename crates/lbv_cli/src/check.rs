//! `lbv check`: parse a dump, run every check, print the report.
//!
//! The whole dump is read before anything is printed, so an unreadable file
//! produces only an error. Status lines go to stderr; the report goes to
//! stdout.

use std::path::Path;

use lbv_analyze::{analyze, Analysis, Verdict};
use lbv_config::AnalysisConfig;

use crate::settings::{load_config, resolve_input};
use crate::{CheckArgs, GlobalArgs};

/// Runs the `lbv check` command.
///
/// Returns exit code 0 once the report is printed, or 1 with `--strict` when
/// the overall result is FAIL.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_config(global)?;
    let input = resolve_input(args.file.as_deref(), &config)?;

    let analysis = analyze_file(&input, &config, global)?;
    print!("{}", analysis.report());

    if args.strict && analysis.verdict() == Verdict::Fail {
        return Ok(1);
    }
    Ok(0)
}

/// Parses `input` and analyzes it, reporting progress on stderr.
pub(crate) fn analyze_file(
    input: &Path,
    config: &AnalysisConfig,
    global: &GlobalArgs,
) -> Result<Analysis, Box<dyn std::error::Error>> {
    if !global.quiet {
        eprintln!("   Parsing {}", input.display());
    }
    let timelines = lbv_wave::parse_file(input)?;
    if !global.quiet {
        eprintln!("   Found {} signals", timelines.len());
    }

    let analysis = analyze(&timelines, config);
    if global.verbose {
        for (check, reason) in analysis.skipped() {
            eprintln!("   Skipped {check}: {reason}");
        }
    }
    Ok(analysis)
}
