//! `kiln config` reads and writes configuration values.

use std::{fs, path::Path};

use kiln_core::{
    domain::{StyleLanguage, TemplateSetVersion},
    error::KilnError,
};

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::{AppConfig, KEYS, insert_dotted, parse_value},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config
                .get(&key)
                .ok_or(CliError::UnknownConfigKey { key })?;
            output.data(&display_value(&value))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::target_path(global.config.as_deref());
            set_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.data(&serde_json::to_string_pretty(&config)?)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(&config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            let path = AppConfig::target_path(global.config.as_deref());
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Update one key in the file at `path`, leaving the other keys untouched.
fn set_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    if !KEYS.contains(&key) {
        return Err(CliError::UnknownConfigKey { key: key.into() });
    }
    validate_value(key, raw)?;

    let mut table = if path.exists() {
        let text = fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str::<toml::Table>(&text)
            .with_cli_context(|| format!("Failed to parse '{}'", path.display()))?
    } else {
        toml::Table::new()
    };

    insert_dotted(&mut table, key, parse_value(raw)).map_err(|message| {
        CliError::ConfigError {
            message,
            source: None,
        }
    })?;

    // The merged file must still describe a valid configuration.
    toml::Value::Table(table.clone())
        .try_into::<AppConfig>()
        .with_cli_context(|| format!("'{raw}' is not a valid value for {key}"))?;

    let text = toml::to_string_pretty(&table).with_cli_context(|| "Failed to serialise config")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    fs::write(path, text).with_cli_context(|| format!("Failed to write '{}'", path.display()))
}

/// Values with a domain meaning are checked with the core parsers.
fn validate_value(key: &str, raw: &str) -> CliResult<()> {
    match key {
        "defaults.style" => {
            raw.parse::<StyleLanguage>().map_err(KilnError::from)?;
        }
        "defaults.template_version" => {
            let number = raw.parse::<u32>().map_err(|e| CliError::InvalidInput {
                message: format!("'{raw}' is not a version number"),
                source: Some(Box::new(e)),
            })?;
            TemplateSetVersion::try_from(number).map_err(KilnError::from)?;
        }
        "output.format" => {
            if !["auto", "human", "plain", "json"].contains(&raw) {
                return Err(CliError::InvalidInput {
                    message: format!("'{raw}' is not one of auto, human, plain, json"),
                    source: None,
                });
            }
        }
        _ => {}
    }
    Ok(())
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
