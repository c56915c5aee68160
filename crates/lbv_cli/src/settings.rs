//! Configuration lookup and input path resolution shared by the commands.

use std::path::{Path, PathBuf};

use lbv_config::{AnalysisConfig, ConfigError, CONFIG_FILE_NAME};

use crate::GlobalArgs;

/// Loads the analysis configuration.
///
/// Uses `--config` if given, otherwise `lbv.toml` in the current directory
/// if present, otherwise the built-in defaults.
pub fn load_config(global: &GlobalArgs) -> Result<AnalysisConfig, ConfigError> {
    let cwd = std::env::current_dir()?;
    load_config_in(global, &cwd)
}

/// [`load_config`] with an explicit working directory.
pub(crate) fn load_config_in(
    global: &GlobalArgs,
    cwd: &Path,
) -> Result<AnalysisConfig, ConfigError> {
    let path = match &global.config {
        Some(p) => PathBuf::from(p),
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok(AnalysisConfig::default());
            }
            candidate
        }
    };

    let mut config = lbv_config::load_config(&path)?;
    // A relative input path is relative to the file that names it.
    if let (Some(input), Some(dir)) = (&config.input.path, path.parent()) {
        if input.is_relative() {
            config.input.path = Some(dir.join(input));
        }
    }
    Ok(config)
}

/// Picks the waveform to read: the command-line argument, else `[input].path`.
pub fn resolve_input(
    arg: Option<&str>,
    config: &AnalysisConfig,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(file) = arg {
        return Ok(PathBuf::from(file));
    }
    config.input.path.clone().ok_or_else(|| {
        format!("no input waveform: pass a file or set [input].path in {CONFIG_FILE_NAME}").into()
    })
}
