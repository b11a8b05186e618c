use crate::app::cli::Cli;
use crate::app::error::StripError;
use crate::app::models::{RuntimeConfig, Source};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PresetConfig {
    pub prefix: Option<String>,
    pub replacement: Option<String>,
    pub include_directories: Option<bool>,
    pub recursive: Option<bool>,
    pub exclude: Option<Vec<String>>,
}

fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home
        .join(".config")
        .join("prefix_strip")
        .join("presets.toml"))
}

pub fn load_presets_file(path: &Path) -> Result<HashMap<String, PresetConfig>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let content =
        fs::read_to_string(path).context(format!("Failed to read config at {:?}", path))?;

    let parsed: PresetsFile = toml::from_str(&content).context("Failed to parse presets.toml")?;

    Ok(parsed.presets)
}

fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    // Deduplicate while keeping order
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

fn has_separator(s: &str) -> bool {
    s.chars().any(std::path::is_separator)
}

pub fn resolve_config(cli: Cli, current_dir: &Path) -> Result<RuntimeConfig> {
    let presets = load_presets_file(&presets_path()?)?;
    resolve_with_presets(cli, current_dir, &presets)
}

pub fn resolve_with_presets(
    cli: Cli,
    current_dir: &Path,
    presets: &HashMap<String, PresetConfig>,
) -> Result<RuntimeConfig> {
    let source = if cli.files.is_empty() {
        Source::Directory(
            cli.source_directory
                .clone()
                .unwrap_or_else(|| current_dir.to_path_buf()),
        )
    } else {
        Source::Files(cli.files.clone())
    };

    // Preset: CLI flag > name of the source directory > None
    let preset = match cli.preset.as_deref() {
        Some(name) => presets
            .get(name)
            .cloned()
            .ok_or_else(|| StripError::InvalidArguments(format!("unknown preset '{}'", name)))?,
        None => {
            let dir = match &source {
                Source::Directory(dir) => dir.as_path(),
                Source::Files(_) => current_dir,
            };
            let dir = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
            dir.file_name()
                .and_then(|n| n.to_str())
                .and_then(|k| presets.get(k))
                .cloned()
                .unwrap_or_default()
        }
    };

    let config = RuntimeConfig {
        prefix: cli.prefix.or(preset.prefix),
        replacement: cli.replacement.or(preset.replacement).unwrap_or_default(),
        source,
        include_directories: cli.include_directories || preset.include_directories.unwrap_or(false),
        recursive: cli.recursive || preset.recursive.unwrap_or(false),
        exclude: merge_vecs(preset.exclude, cli.exclude),
        assume_yes: cli.assume_yes,
        dry_run: cli.dry_run,
    };

    validate(&config)?;
    Ok(config)
}

fn validate(config: &RuntimeConfig) -> Result<(), StripError> {
    if let Some(prefix) = &config.prefix {
        if prefix.is_empty() {
            return Err(StripError::InvalidArguments(
                "prefix must not be empty".into(),
            ));
        }
        if has_separator(prefix) {
            return Err(StripError::InvalidArguments(format!(
                "prefix '{}' must not contain a path separator",
                prefix
            )));
        }
    }
    if has_separator(&config.replacement) {
        return Err(StripError::InvalidArguments(format!(
            "replacement '{}' must not contain a path separator",
            config.replacement
        )));
    }
    if matches!(config.source, Source::Files(_)) && config.recursive {
        return Err(StripError::InvalidArguments(
            "--recursive cannot be used with an explicit file list".into(),
        ));
    }
    Ok(())
}
