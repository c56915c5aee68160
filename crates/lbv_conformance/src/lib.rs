//! Test helpers for the line buffer verifier.
//!
//! Generates synthetic VCD dumps of a two-line pixel buffer and runs them
//! through the parse → analyze pipeline.

#![warn(missing_docs)]

use std::fmt::Write;
use std::io::Cursor;

use lbv_analyze::{analyze, Analysis};
use lbv_config::AnalysisConfig;
use lbv_wave::TimelineSet;

/// Clocks per line in the generated dumps.
pub const HTOT: u64 = 15;

/// `(id, name, width)` of every generated signal, in declaration order.
const SIGNALS: [(&str, &str, u32); 9] = [
    ("!", "rstn", 1),
    ("\"", "i_hsync", 1),
    ("#", "o_hsync", 1),
    ("$", "i_de", 1),
    ("%", "state", 2),
    ("&", "o_ram0_we", 1),
    ("'", "o_ram1_we", 1),
    ("(", "i_r_data", 8),
    (")", "o_r_data", 8),
];

#[derive(Clone, Copy, Default)]
struct InputSample {
    hsync: bool,
    de: bool,
    data: u64,
    state: u64,
    we0: bool,
    we1: bool,
}

/// Input side at time `t`: `lines` active lines of `HTOT` clocks, then idle.
fn input_at(t: u64, lines: u64) -> InputSample {
    if t >= lines * HTOT {
        return InputSample::default();
    }
    let line = t / HTOT;
    let pos = t % HTOT;
    let de = (3..13).contains(&pos);
    InputSample {
        hsync: pos < 2,
        de,
        data: if de { (line * 16 + pos - 2) & 0xff } else { 0 },
        state: if line < 2 { line % 2 } else { 2 + line % 2 },
        we0: de && line % 2 == 0,
        we1: de && line % 2 == 1,
    }
}

fn sample(t: u64, lines: u64, output_delay: u64) -> [String; 9] {
    let bit = |b: bool| (if b { "1" } else { "0" }).to_string();
    let vector = |v: u64| format!("b{v:b}");
    let input = input_at(t, lines);
    let output = t
        .checked_sub(output_delay)
        .map(|s| input_at(s, lines))
        .unwrap_or_default();
    [
        bit(t > 0),
        bit(input.hsync),
        bit(output.hsync),
        bit(input.de),
        vector(input.state),
        bit(input.we0),
        bit(input.we1),
        vector(input.data),
        vector(output.data),
    ]
}

/// Builds a dump of `lines` input lines whose outputs trail the inputs by
/// `output_delay` clocks (one time unit per clock).
pub fn line_buffer_vcd(lines: u64, output_delay: u64) -> String {
    let mut out = String::new();
    out.push_str("$date\n  synthetic\n$end\n$timescale 1ns $end\n");
    out.push_str("$scope module tb_line_buffer $end\n");
    for (id, name, width) in SIGNALS {
        let range = if width > 1 {
            format!(" [{}:0]", width - 1)
        } else {
            String::new()
        };
        let kind = if name == "state" { "reg" } else { "wire" };
        let _ = writeln!(out, "$var {kind} {width} {id} {name}{range} $end");
    }
    out.push_str("$upscope $end\n$enddefinitions $end\n$dumpvars\n$end\n");

    let end = (lines + 1) * HTOT + output_delay;
    let mut prev: Vec<Option<String>> = vec![None; SIGNALS.len()];
    for t in 0..end {
        let mut changes = String::new();
        for (i, value) in sample(t, lines, output_delay).into_iter().enumerate() {
            if prev[i].as_deref() == Some(value.as_str()) {
                continue;
            }
            let id = SIGNALS[i].0;
            if value.starts_with('b') {
                let _ = writeln!(changes, "{value} {id}");
            } else {
                let _ = writeln!(changes, "{value}{id}");
            }
            prev[i] = Some(value);
        }
        if !changes.is_empty() {
            let _ = writeln!(out, "#{t}");
            out.push_str(&changes);
        }
    }
    out
}

/// Parses VCD text held in memory.
pub fn parse_str(vcd: &str) -> TimelineSet {
    match lbv_wave::parse(Cursor::new(vcd)) {
        Ok(set) => set,
        Err(e) => panic!("in-memory parse failed: {e}"),
    }
}

/// Parses and analyzes VCD text with the given configuration.
pub fn run_pipeline(vcd: &str, config: &AnalysisConfig) -> Analysis {
    analyze(&parse_str(vcd), config)
}
