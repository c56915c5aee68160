//! Waveform reading for the line buffer verifier.
//!
//! Turns a Value Change Dump into a [`TimelineSet`]: one ordered list of
//! `(time, value)` events per signal name. The reader is best-effort. Only
//! failing to open or read the input is an error; malformed or unknown lines
//! are dropped.
//!
//! # Modules
//!
//! - `error`: Fatal reader errors
//! - `value`: Four-state scalars and decoded vector values
//! - `timeline`: Events, timelines, and the per-name timeline set
//! - `loader`: The single-pass VCD reader

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod timeline;
pub mod value;

pub use error::WaveError;
pub use loader::{parse, parse_file};
pub use timeline::{Event, SignalDef, Timeline, TimelineSet};
pub use value::{decode_vector, Logic, Value};
