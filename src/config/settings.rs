use serde::Deserialize;

/// ================================
/// Full tool configuration
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ToolConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
}

/// ================================
/// Global settings
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SettingsConfig {
    pub logging: Option<LoggingConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// indent written cache files
    #[serde(default)]
    pub pretty: bool,
    /// keep top-level keys that are not cache sections when rewriting
    #[serde(default = "default_keep_unknown_sections")]
    pub keep_unknown_sections: bool,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            keep_unknown_sections: default_keep_unknown_sections(),
        }
    }
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info".to_owned(), LogFormat::Compact)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

fn default_keep_unknown_sections() -> bool {
    true
}
