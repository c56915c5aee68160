//! Error types for waveform reading.
//!
//! Only I/O failures are fatal. Everything structurally odd inside the dump
//! is skipped by the reader and never surfaces here.

use std::io;
use std::path::PathBuf;

/// Errors that abort reading a waveform.
#[derive(Debug, thiserror::Error)]
pub enum WaveError {
    /// The waveform file could not be opened.
    #[error("cannot open waveform '{}': {source}", path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The waveform stream failed part way through.
    #[error("waveform read error: {0}")]
    Read(#[from] io::Error),
}
