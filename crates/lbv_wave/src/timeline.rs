//! Per-signal event timelines.
//!
//! A [`TimelineSet`] is built once by the loader and read-only afterwards.
//! Signals are keyed by name, so two identifier codes declared with the same
//! name share one timeline; [`SignalDef::ids`] keeps every code that fed it.

use std::collections::BTreeMap;

use crate::value::Value;

/// A single value change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// Simulation time in dump time units.
    pub time: u64,
    /// Decoded value at `time`.
    pub value: Value,
}

impl Event {
    /// Creates an event.
    pub fn new(time: u64, value: Value) -> Self {
        Self { time, value }
    }
}

/// The value changes of one signal, in dump order.
///
/// Dump order is non-decreasing in time; nothing is re-sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    events: Vec<Event>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a timeline from events already in time order.
    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub(crate) fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of recorded value changes.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no value change was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The events as a slice.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Iterates over the events in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// First event whose value satisfies `pred`.
    pub fn first_where(&self, pred: impl Fn(&Value) -> bool) -> Option<&Event> {
        self.events.iter().find(|e| pred(&e.value))
    }

    /// First event at or after `time`.
    pub fn first_at_or_after(&self, time: u64) -> Option<&Event> {
        self.events.iter().find(|e| e.time >= time)
    }

    /// Timestamps of rising edges within the first `scan_limit` events.
    ///
    /// A rising edge is a scalar `0` followed by a scalar `1`. The value
    /// before the first event is taken to be `0`, so a timeline that opens
    /// with `1` starts with an edge.
    pub fn rising_edges(&self, scan_limit: usize) -> Vec<u64> {
        let mut edges = Vec::new();
        let mut prev_low = true;
        for event in self.events.iter().take(scan_limit) {
            if prev_low && event.value.is_high() {
                edges.push(event.time);
            }
            prev_low = event.value.is_low();
        }
        edges
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Declaration data for a signal name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalDef {
    /// Signal name as declared.
    pub name: String,
    /// Variable type of the first declaration (`wire`, `reg`, ...).
    pub var_type: String,
    /// Declared width of the first declaration, if it parsed.
    pub width: Option<u32>,
    /// Every identifier code bound to this name, in declaration order.
    pub ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    def: SignalDef,
    timeline: Timeline,
}

/// Signal name to timeline mapping handed from the reader to the analyzer.
///
/// Every declared name has a timeline, possibly empty. Iteration is in name
/// order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimelineSet {
    entries: BTreeMap<String, Entry>,
}

impl TimelineSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration, creating an empty timeline for a new name.
    ///
    /// Redeclaring an existing name only records the extra id.
    pub fn declare(&mut self, name: &str, var_type: &str, width: Option<u32>, id: &str) {
        let entry = self.entries.entry(name.to_string()).or_insert_with(|| Entry {
            def: SignalDef {
                name: name.to_string(),
                var_type: var_type.to_string(),
                width,
                ids: Vec::new(),
            },
            timeline: Timeline::new(),
        });
        if !entry.def.ids.iter().any(|existing| existing == id) {
            entry.def.ids.push(id.to_string());
        }
    }

    /// Appends an event to a declared name. Undeclared names are ignored.
    pub fn push(&mut self, name: &str, event: Event) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.timeline.push(event);
        }
    }

    /// Timeline for `name`.
    pub fn get(&self, name: &str) -> Option<&Timeline> {
        self.entries.get(name).map(|e| &e.timeline)
    }

    /// Declaration for `name`.
    pub fn def(&self, name: &str) -> Option<&SignalDef> {
        self.entries.get(name).map(|e| &e.def)
    }

    /// Whether `name` was declared.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of distinct signal names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no signal was declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Signal names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(definition, timeline)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&SignalDef, &Timeline)> {
        self.entries.values().map(|e| (&e.def, &e.timeline))
    }
}
