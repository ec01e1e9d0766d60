use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use token_cache_schema::cache::entity::EntityKind;
use token_cache_schema::config::loader::file_to_config;
use token_cache_schema::utils::logging::{self, LogLevel};
use token_cache_schema::CacheCodec;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "TOKEN_CACHE_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the number of entities in every section
    Inspect { file: PathBuf },
    /// Read a cache file and write it back in canonical form
    Normalize {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load config and logging
    // -------------------------------

    let args = Args::parse();
    let tool_config = file_to_config(args.config.as_deref()).await?;
    logging::run(&tool_config, args.log_level);

    let output = tool_config.settings.output.clone().unwrap_or_default();

    // -------------------------------
    // 2. Run command
    // -------------------------------

    match args.command {
        Command::Inspect { file } => {
            let text = read_cache_file(&file).await?;
            let (cache, extra) = CacheCodec::new().read(text.as_deref())?;
            info!(path = %file.display(), entities = cache.len(), "cache loaded");
            for kind in EntityKind::ALL {
                println!("{:<13} {}", kind.section_name(), cache.section_len(kind));
            }
            if !extra.is_empty() {
                let names: Vec<&str> = extra.keys().map(|k| k.as_str()).collect();
                println!("unknown sections: {}", names.join(", "));
            }
        }
        Command::Normalize { file, output: target, pretty } => {
            let text = read_cache_file(&file).await?;
            let (cache, extra) = CacheCodec::new().read(text.as_deref())?;

            let mut codec = CacheCodec::new().pretty(pretty || output.pretty);
            if output.keep_unknown_sections {
                codec = codec.with_extra_sections(extra);
            }
            let rendered = codec.to_json(&cache)?;

            let target = target.unwrap_or(file);
            tokio::fs::write(&target, rendered.as_bytes())
                .await
                .with_context(|| format!("cannot write '{}'", target.display()))?;
            info!(path = %target.display(), entities = cache.len(), "cache written");
        }
    }

    Ok(())
}

/// A missing file reads as an empty cache.
async fn read_cache_file(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "cache file not found, nothing cached yet");
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("cannot read '{}'", path.display())),
    }
}
