use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::config::settings::{LoggingConfig, OutputConfig, ToolConfig};

/// Load config from YAML file, or defaults when no path is given
pub async fn file_to_config(path: Option<&Path>) -> Result<ToolConfig> {
    let Some(path) = path else {
        return Ok(apply_defaults(ToolConfig::default()));
    };
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read config '{}'", path.display()))?;

    parse_config(&expand_env_vars(&content))
}

pub fn parse_config(content: &str) -> Result<ToolConfig> {
    // an empty file is a valid, all-defaults config
    let tool_config: ToolConfig = if content.trim().is_empty() {
        ToolConfig::default()
    } else {
        serde_yaml::from_str(content).context("invalid config format")?
    };
    debug!("config parsed");

    Ok(apply_defaults(tool_config))
}

fn apply_defaults(mut tool_config: ToolConfig) -> ToolConfig {
    if tool_config.settings.logging.is_none() {
        tool_config.settings.logging = Some(LoggingConfig::default());
    }
    if tool_config.settings.output.is_none() {
        tool_config.settings.output = Some(OutputConfig::default());
    }
    tool_config
}

/// Replaces `${VAR}` and `${VAR:default}` with the environment value.
pub fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").expect("static regex");
    re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}
