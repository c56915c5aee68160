//! Single-pass VCD reader.
//!
//! Reads a Value Change Dump line by line and fills a [`TimelineSet`]. Each
//! trimmed line is classified in this order:
//!
//! 1. `$var <type> <width> <id> <name> ...` while still in the header
//! 2. `$enddefinitions`: closes the header
//! 3. `#<time>`: moves the time cursor
//! 4. `<0|1|x|z><id>`: scalar change
//! 5. `b<digits> <id>`: vector change
//!
//! Anything else (scopes, `$dumpvars`, comments, real values) is skipped.
//! Hierarchy is not tracked; signals are known by their leaf name.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::WaveError;
use crate::timeline::{Event, TimelineSet};
use crate::value::{decode_vector, Logic, Value};

/// Reader state threaded through the pass.
#[derive(Debug)]
struct ParserState {
    in_definitions: bool,
    id_to_name: HashMap<String, String>,
    current_time: u64,
}

impl ParserState {
    fn new() -> Self {
        Self {
            in_definitions: true,
            id_to_name: HashMap::new(),
            current_time: 0,
        }
    }

    fn process_line(&mut self, line: &str, timelines: &mut TimelineSet) {
        if self.in_definitions && line.starts_with("$var") {
            self.define(line, timelines);
            return;
        }
        if line.starts_with("$enddefinitions") {
            self.in_definitions = false;
            return;
        }
        if self.in_definitions {
            return;
        }

        if let Some(time_str) = line.strip_prefix('#') {
            // An unparsable timestamp leaves the cursor where it was.
            if let Ok(t) = time_str.trim().parse::<u64>() {
                self.current_time = t;
            }
            return;
        }

        let Some(first) = line.chars().next() else {
            return;
        };
        if let Some(logic) = Logic::from_char(first) {
            let id = &line[first.len_utf8()..];
            self.record(id, Value::Bit(logic), timelines);
        } else if first == 'b' || first == 'B' {
            let mut parts = line[1..].split_whitespace();
            if let (Some(digits), Some(id)) = (parts.next(), parts.next()) {
                self.record(id, decode_vector(digits), timelines);
            }
        }
    }

    /// Registers a `$var` line. Lines with fewer than four fields after the
    /// keyword are skipped.
    fn define(&mut self, line: &str, timelines: &mut TimelineSet) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 5 {
            return;
        }
        let var_type = parts[1];
        let width = parts[2].parse::<u32>().ok();
        let id = parts[3];
        let name = parts[4];
        self.id_to_name.insert(id.to_string(), name.to_string());
        timelines.declare(name, var_type, width, id);
    }

    /// Appends a change for `id` at the current time; unknown ids are dropped.
    fn record(&self, id: &str, value: Value, timelines: &mut TimelineSet) {
        if let Some(name) = self.id_to_name.get(id) {
            timelines.push(name, Event::new(self.current_time, value));
        }
    }
}

/// Reads a VCD stream into a [`TimelineSet`].
///
/// # Errors
///
/// Returns [`WaveError::Read`] if the stream cannot be read. Malformed
/// content never produces an error.
pub fn parse<R: BufRead>(reader: R) -> Result<TimelineSet, WaveError> {
    let mut state = ParserState::new();
    let mut timelines = TimelineSet::new();

    for line_result in reader.lines() {
        let line = line_result?;
        state.process_line(line.trim(), &mut timelines);
    }

    Ok(timelines)
}

/// Reads a VCD file from a filesystem path.
///
/// # Errors
///
/// Returns [`WaveError::Open`] if the file cannot be opened and
/// [`WaveError::Read`] if reading fails part way.
pub fn parse_file(path: &Path) -> Result<TimelineSet, WaveError> {
    let file = File::open(path).map_err(|source| WaveError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse(BufReader::new(file))
}
