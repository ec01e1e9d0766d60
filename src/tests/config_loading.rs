use std::io::Write;

use serial_test::serial;

use crate::config::loader::{expand_env_vars, file_to_config, parse_config};
use crate::config::settings::LogFormat;
use crate::utils::logging::{resolve, LogLevel};

#[tokio::test]
async fn missing_config_path_gives_defaults() {
    let tool_config = file_to_config(None).await.unwrap();

    let logging = tool_config.settings.logging.unwrap();
    assert_eq!(logging.level, "info");
    assert_eq!(logging.format, LogFormat::Compact);

    let output = tool_config.settings.output.unwrap();
    assert!(!output.pretty);
    assert!(output.keep_unknown_sections);
}

#[test]
fn empty_config_file_gives_defaults() {
    let tool_config = parse_config("   \n").unwrap();
    assert!(tool_config.settings.logging.is_some());
    assert!(tool_config.settings.output.is_some());
}

#[test]
fn partial_output_block_keeps_field_defaults() {
    let yaml = r#"
settings:
  output:
    pretty: true
"#;
    let output = parse_config(yaml).unwrap().settings.output.unwrap();
    assert!(output.pretty);
    assert!(output.keep_unknown_sections);
}

#[test]
fn invalid_log_format_is_rejected() {
    let yaml = r#"
settings:
  logging:
    level: info
    format: xml
"#;
    let err = parse_config(yaml).unwrap_err();
    assert!(err.to_string().contains("invalid config format"));
}

#[tokio::test]
#[serial]
async fn config_file_expands_env_vars() {
    std::env::set_var("TOKEN_CACHE_TEST_LEVEL", "warn");
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
settings:
  logging:
    level: ${{TOKEN_CACHE_TEST_LEVEL}}
    format: ${{TOKEN_CACHE_TEST_FORMAT:json}}
  output:
    keep_unknown_sections: false
"#
    )
    .unwrap();

    let tool_config = file_to_config(Some(file.path())).await.unwrap();
    std::env::remove_var("TOKEN_CACHE_TEST_LEVEL");

    let logging = tool_config.settings.logging.unwrap();
    assert_eq!(logging.level, "warn");
    assert_eq!(logging.format, LogFormat::Json);
    assert!(!tool_config.settings.output.unwrap().keep_unknown_sections);
}

#[tokio::test]
async fn unreadable_config_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    let err = file_to_config(Some(path.as_path())).await.unwrap_err();
    assert!(err.to_string().contains("cannot read config"));
}

#[test]
#[serial]
fn unset_env_var_without_default_expands_to_empty() {
    std::env::remove_var("TOKEN_CACHE_TEST_UNSET");
    assert_eq!(expand_env_vars("level: '${TOKEN_CACHE_TEST_UNSET}'"), "level: ''");
}

#[test]
fn cli_log_level_overrides_config() {
    let tool_config = parse_config("settings:\n  logging:\n    level: debug\n    format: json\n").unwrap();

    let resolved = resolve(&tool_config, Some(LogLevel::ERROR));
    assert_eq!(resolved.level, "ERROR");
    assert_eq!(resolved.format, LogFormat::Json);

    assert_eq!(resolve(&tool_config, None).level, "debug");
}
