//! Section 2: decoded state machine transitions.
//!
//! Only the first `limits.state_events` raw events are looked at. Repeats of
//! the previous label are collapsed, and the first `limits.state_transitions`
//! transitions are kept.

use lbv_config::AnalysisConfig;
use lbv_wave::{Event, TimelineSet, Value};

use super::{require, Finding, Outcome};
use crate::report::Section;
use crate::verdict::Verdict;

/// One change of decoded state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateTransition {
    /// Time of the event that entered the state.
    pub time: u64,
    /// Table label, or `UNKNOWN(<value>)`.
    pub label: String,
    /// Whether the label came from the decode table.
    pub known: bool,
}

/// The collapsed transition list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateTransitions {
    /// Transitions in time order.
    pub transitions: Vec<StateTransition>,
}

/// Decodes the configured state signal.
pub fn check(timelines: &TimelineSet, config: &AnalysisConfig) -> Outcome<StateTransitions> {
    require(timelines, &config.signals.state)
        .map(|timeline| StateTransitions {
            transitions: collapse(
                timeline.events(),
                config,
                config.limits.state_events,
                config.limits.state_transitions,
            ),
        })
        .into()
}

/// Labels a raw state value using the decode table.
///
/// Only decoded vectors carry a state code. Scalar symbols and raw digit
/// strings always render as `UNKNOWN(<value>)`.
pub fn decode(value: &Value, config: &AnalysisConfig) -> (String, bool) {
    let label = match value {
        Value::Vector(code) => config.state_label(*code),
        Value::Bit(_) | Value::Raw(_) => None,
    };
    match label {
        Some(label) => (label.to_string(), true),
        None => (format!("UNKNOWN({value})"), false),
    }
}

fn collapse(
    events: &[Event],
    config: &AnalysisConfig,
    event_limit: usize,
    report_limit: usize,
) -> Vec<StateTransition> {
    let mut transitions: Vec<StateTransition> = Vec::new();
    for event in events.iter().take(event_limit) {
        let (label, known) = decode(&event.value, config);
        if transitions.last().is_some_and(|prev| prev.label == label) {
            continue;
        }
        transitions.push(StateTransition {
            time: event.time,
            label,
            known,
        });
    }
    transitions.truncate(report_limit);
    transitions
}

impl Finding for StateTransitions {
    fn section(&self) -> Section {
        let mut section = Section::new(2, "STATE MACHINE TRANSITIONS");
        for t in &self.transitions {
            section.line(format!("  Time {:6} ns: {}", t.time, t.label));
        }
        section
    }

    /// Passes when at least one transition was seen and every state decoded.
    fn verdict(&self) -> Verdict {
        Verdict::from_bool(
            !self.transitions.is_empty() && self.transitions.iter().all(|t| t.known),
        )
    }
}
