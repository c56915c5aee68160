//! Configuration types deserialized from `lbv.toml`.

use serde::Deserialize;
use std::path::PathBuf;

/// The complete analysis configuration.
///
/// Each table may be omitted; missing tables and fields take the defaults
/// of the two-line pixel buffer testbench.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Which waveform to read.
    #[serde(default)]
    pub input: InputConfig,
    /// Clock and line geometry used to derive the expected delay.
    #[serde(default)]
    pub timing: TimingConfig,
    /// Names of the signals each check looks at.
    #[serde(default)]
    pub signals: SignalConfig,
    /// Labels for the state register encoding.
    #[serde(default = "default_states")]
    pub states: Vec<StateLabel>,
    /// Prefix bounds applied by the checks.
    #[serde(default)]
    pub limits: LimitConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            timing: TimingConfig::default(),
            signals: SignalConfig::default(),
            states: default_states(),
            limits: LimitConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Display label for an encoded state, if the table has one.
    pub fn state_label(&self, code: u64) -> Option<&str> {
        self.states
            .iter()
            .find(|s| s.code == code)
            .map(|s| s.label.as_str())
    }
}

/// Input selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    /// Path to the VCD file. The command line takes precedence.
    pub path: Option<PathBuf>,
}

/// Line timing of the design under test.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Clocks per horizontal line (HTOT).
    pub clocks_per_line: u64,
    /// Number of lines the buffer delays its output by.
    pub line_delay: u64,
    /// Dump time units per clock.
    pub clock_period: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            clocks_per_line: 15,
            line_delay: 2,
            clock_period: 1,
        }
    }
}

impl TimingConfig {
    /// Expected input-to-output latency in dump time units.
    pub fn expected_delay(&self) -> u64 {
        self.line_delay
            .saturating_mul(self.clocks_per_line)
            .saturating_mul(self.clock_period)
    }
}

/// Signal names used by the checks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Signals listed in the activity summary, in display order.
    pub activity: Vec<String>,
    /// Encoded state register.
    pub state: String,
    /// RAM write enables, one per line memory.
    pub ram_write_enables: Vec<String>,
    /// Input horizontal sync.
    pub input_sync: String,
    /// Output horizontal sync.
    pub output_sync: String,
    /// Input data enable.
    pub data_enable: String,
    /// Input pixel channel compared against the output.
    pub input_data: String,
    /// Output pixel channel.
    pub output_data: String,
}

impl Default for SignalConfig {
    fn default() -> Self {
        let activity = [
            "rstn", "i_vsync", "i_hsync", "i_de", "o_vsync", "o_hsync", "o_de", "state",
            "o_ram0_we", "o_ram1_we", "pixel_cnt", "i_r_data", "o_r_data",
        ];
        Self {
            activity: activity.iter().map(|s| s.to_string()).collect(),
            state: "state".to_string(),
            ram_write_enables: vec!["o_ram0_we".to_string(), "o_ram1_we".to_string()],
            input_sync: "i_hsync".to_string(),
            output_sync: "o_hsync".to_string(),
            data_enable: "i_de".to_string(),
            input_data: "i_r_data".to_string(),
            output_data: "o_r_data".to_string(),
        }
    }
}

/// One entry of the state decode table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StateLabel {
    /// Encoded register value.
    pub code: u64,
    /// Display name.
    pub label: String,
}

fn default_states() -> Vec<StateLabel> {
    [
        (0, "ST_LINE0_WR"),
        (1, "ST_LINE1_WR"),
        (2, "ST_LINE0_WR_RD"),
        (3, "ST_LINE1_WR_RD"),
    ]
    .into_iter()
    .map(|(code, label)| StateLabel {
        code,
        label: label.to_string(),
    })
    .collect()
}

/// Prefix bounds for the checks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Raw state events considered before collapsing repeats.
    pub state_events: usize,
    /// State transitions reported.
    pub state_transitions: usize,
    /// Write assertions collected per RAM.
    pub write_events: usize,
    /// Write assertions printed per RAM.
    pub write_report: usize,
    /// Events scanned per sync signal when looking for rising edges.
    pub edge_events: usize,
    /// Rising edges required on the input sync.
    pub min_input_edges: usize,
    /// Rising edges required on the output sync.
    pub min_output_edges: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            state_events: 20,
            state_transitions: 10,
            write_events: 10,
            write_report: 5,
            edge_events: 100,
            min_input_edges: 3,
            min_output_edges: 1,
        }
    }
}
