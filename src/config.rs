// src/config.rs
use std::path::Path;
use std::time::Duration;
use serde::Deserialize;
use crate::drivers::{LineFormat, PlotState, ScopeError};
/// Optional overrides, read from the working directory when present.
pub const CONFIG_FILE: &str = "serial_scope.json";
/// Which of the two device line formats to expect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// `a;b;c` floats, three rolling windows against a fixed time axis.
    Rolling,
    /// `x,y` integers, y plotted against x, accumulating.
    Trace,
}
impl Variant {
    pub fn line_format(self) -> LineFormat {
        match self {
            Variant::Rolling => LineFormat::semicolon_triple(),
            Variant::Trace => LineFormat::comma_pair(),
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Serial,
    Simulation,
}
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeConfig {
    pub port: String,
    pub baud_rate: u32,
    pub timeout_ms: u64,
    pub variant: Variant,
    pub source: SourceKind,
    /// Samples kept per channel in the rolling variant.
    pub window_len: usize,
    /// Spacing of the rolling variant's time axis.
    pub time_step: f64,
    /// Initial y range of the rolling variant.
    pub y_range: [f64; 2],
    /// Delay between simulated lines.
    pub sim_interval_ms: u64,
}
impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            port: "COM3".to_owned(),
            baud_rate: 9600,
            timeout_ms: 1000,
            variant: Variant::Rolling,
            source: SourceKind::Serial,
            window_len: 100,
            time_step: 0.1,
            y_range: [0.0, 50.0],
            sim_interval_ms: 50,
        }
    }
}
impl ScopeConfig {
    /// Defaults, overridden by `path` if that file exists.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ScopeError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .map_err(|err| ScopeError::Config(format!("cannot read {}: {err}", path.display())))?;
        Self::from_json(&text)
    }
    pub fn from_json(text: &str) -> Result<Self, ScopeError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
    pub fn sim_interval(&self) -> Duration {
        Duration::from_millis(self.sim_interval_ms)
    }
    pub fn line_format(&self) -> LineFormat {
        self.variant.line_format()
    }
    /// Empty plot state matching the configured variant.
    pub fn plot_state(&self) -> PlotState {
        let format = self.line_format();
        match self.variant {
            Variant::Rolling => PlotState::rolling(format.arity, self.window_len, self.time_step),
            Variant::Trace => PlotState::trace(format.arity),
        }
    }
    fn validate(&self) -> Result<(), ScopeError> {
        if self.window_len == 0 {
            return Err(ScopeError::Config("window_len must be greater than zero".into()));
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(ScopeError::Config("time_step must be positive and finite".into()));
        }
        if self.baud_rate == 0 {
            return Err(ScopeError::Config("baud_rate must be greater than zero".into()));
        }
        Ok(())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn defaults_match_device_settings() {
        let config = ScopeConfig::default();
        assert_eq!(config.port, "COM3");
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.timeout(), Duration::from_secs(1));
        assert_eq!(config.line_format(), LineFormat::semicolon_triple());
        assert_eq!(config.plot_state().expected_arity(), 3);
    }
    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config =
            ScopeConfig::from_json(r#"{"port": "/dev/ttyUSB0", "variant": "trace"}"#).unwrap();
        assert_eq!(config.port, "/dev/ttyUSB0");
        assert_eq!(config.variant, Variant::Trace);
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.line_format(), LineFormat::comma_pair());
    }
    #[test]
    fn zero_window_is_rejected() {
        assert!(matches!(
            ScopeConfig::from_json(r#"{"window_len": 0}"#),
            Err(ScopeError::Config(_))
        ));
    }
    #[test]
    fn non_finite_or_negative_time_step_is_rejected() {
        let infinite = ScopeConfig {
            time_step: f64::INFINITY,
            ..ScopeConfig::default()
        };
        assert!(matches!(infinite.validate(), Err(ScopeError::Config(_))));
        let nan = ScopeConfig {
            time_step: f64::NAN,
            ..ScopeConfig::default()
        };
        assert!(matches!(nan.validate(), Err(ScopeError::Config(_))));
        assert!(matches!(
            ScopeConfig::from_json(r#"{"time_step": -0.1}"#),
            Err(ScopeError::Config(_))
        ));
    }
    #[test]
    fn unreadable_config_file_is_a_config_error() {
        // A directory exists but cannot be read as a file.
        let err = ScopeConfig::load_or_default(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, ScopeError::Config(ref msg) if msg.starts_with("cannot read")));
    }
    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            ScopeConfig::from_json(r#"{"baud": 115200}"#),
            Err(ScopeError::ConfigFormat(_))
        ));
    }
    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = ScopeConfig::load_or_default("does/not/exist.json").unwrap();
        assert_eq!(config.source, SourceKind::Serial);
    }
}
