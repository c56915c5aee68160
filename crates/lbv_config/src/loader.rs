//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::AnalysisConfig;
use std::collections::HashSet;
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "lbv.toml";

/// Loads and validates an `lbv.toml` configuration from a file path.
pub fn load_config(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates an `lbv.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<AnalysisConfig, ConfigError> {
    let config: AnalysisConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that timing is non-degenerate, names are non-empty and state
/// codes are unique.
fn validate_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    let timing = &config.timing;
    for (field, value) in [
        ("timing.clocks_per_line", timing.clocks_per_line),
        ("timing.line_delay", timing.line_delay),
        ("timing.clock_period", timing.clock_period),
    ] {
        if value == 0 {
            return Err(ConfigError::ValidationError(format!("{field} must be > 0")));
        }
    }

    let signals = &config.signals;
    for (field, name) in [
        ("signals.state", &signals.state),
        ("signals.input_sync", &signals.input_sync),
        ("signals.output_sync", &signals.output_sync),
        ("signals.data_enable", &signals.data_enable),
        ("signals.input_data", &signals.input_data),
        ("signals.output_data", &signals.output_data),
    ] {
        if name.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{field} must not be empty"
            )));
        }
    }
    if signals.ram_write_enables.iter().any(|n| n.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "signals.ram_write_enables must not contain empty names".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for state in &config.states {
        if !seen.insert(state.code) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate state code {}",
                state.code
            )));
        }
    }

    if config.limits.edge_events == 0 || config.limits.state_events == 0 {
        return Err(ConfigError::ValidationError(
            "limits.edge_events and limits.state_events must be > 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_config_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert!(config.input.path.is_none());
        assert_eq!(config.timing.expected_delay(), 30);
        assert_eq!(config.signals.input_sync, "i_hsync");
        assert_eq!(config.states.len(), 4);
        assert_eq!(config.limits.edge_events, 100);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[input]
path = "sim/dump.vcd"

[timing]
clocks_per_line = 800
line_delay = 2
clock_period = 10

[signals]
activity = ["clk", "o_hsync"]
state = "fsm_state"
ram_write_enables = ["we_a", "we_b", "we_c"]
input_sync = "hs_in"
output_sync = "hs_out"
data_enable = "de_in"
input_data = "r_in"
output_data = "r_out"

[[states]]
code = 0
label = "IDLE"

[[states]]
code = 5
label = "RUN"

[limits]
state_events = 50
write_report = 3
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(
            config.input.path.as_deref(),
            Some(Path::new("sim/dump.vcd"))
        );
        assert_eq!(config.timing.expected_delay(), 16_000);
        assert_eq!(config.signals.activity, vec!["clk", "o_hsync"]);
        assert_eq!(config.signals.ram_write_enables.len(), 3);
        assert_eq!(config.state_label(5), Some("RUN"));
        assert_eq!(config.state_label(1), None);
        assert_eq!(config.limits.state_events, 50);
        assert_eq!(config.limits.write_report, 3);
        // untouched limits keep their defaults
        assert_eq!(config.limits.edge_events, 100);
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let config = load_config_from_str("[timing]\nclocks_per_line = 20\n").unwrap();
        assert_eq!(config.timing.line_delay, 2);
        assert_eq!(config.timing.expected_delay(), 40);
    }

    #[test]
    fn zero_clocks_per_line_errors() {
        let err = load_config_from_str("[timing]\nclocks_per_line = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("timing.clocks_per_line"));
    }

    #[test]
    fn empty_signal_name_errors() {
        let err = load_config_from_str("[signals]\noutput_sync = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("signals.output_sync"));
    }

    #[test]
    fn duplicate_state_code_errors() {
        let toml = r#"
[[states]]
code = 1
label = "A"

[[states]]
code = 1
label = "B"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate state code 1"));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn negative_number_errors() {
        let err = load_config_from_str("[timing]\nline_delay = -2\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "[input]\npath = \"dump.vcd\"\n").unwrap();
        tmp.flush().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.input.path.as_deref(), Some(Path::new("dump.vcd")));
    }

    #[test]
    fn io_error_from_nonexistent_file() {
        let err = load_config(Path::new("/nonexistent/dir/lbv.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
