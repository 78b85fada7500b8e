//! File-backed configuration schema

use navigator_application::ScreeningPreset;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Contents of `navigator.toml`
///
/// ```toml
/// [screening]
/// preset = "clinic"
///
/// [log]
/// answer_log = "/var/log/navigator/answers.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub screening: ScreeningSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningSection {
    /// Which catalog/strategy pairing to run
    pub preset: ScreeningPreset,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Where to append captured answers; absent disables persistence
    pub answer_log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.screening.preset, ScreeningPreset::Clinic);
        assert!(config.log.answer_log.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml_str("[screening]\npreset = \"intake\"\n");
        assert_eq!(config.screening.preset, ScreeningPreset::Intake);
        assert!(config.log.answer_log.is_none());
    }

    fn toml_str(raw: &str) -> FileConfig {
        use figment::Figment;
        use figment::providers::{Format, Toml};
        Figment::new()
            .merge(Toml::string(raw))
            .extract()
            .expect("valid toml")
    }
}
