//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `KILN_*` environment variables, `__` between sections
//!    (`KILN_DEFAULTS__STYLE=scss`); a `.env` file is loaded first
//! 3. Config file (`--config FILE` or [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Every key accepted by `kiln config get|set`.
pub const KEYS: &[&str] = &[
    "defaults.style",
    "defaults.pure",
    "defaults.stateless",
    "defaults.no_styles",
    "defaults.template_version",
    "output.no_color",
    "output.format",
    "templates.dir",
];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallbacks for flags not given on the command line.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub style: Option<String>,
    pub pure: bool,
    pub stateless: bool,
    pub no_styles: bool,
    pub template_version: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; used when `--output-format` is
    /// left at `auto`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template override directory, used when `--templates` is absent.
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::load_from(path, true),
            None => Self::load_from(&Self::config_path(), false),
        }
    }

    /// Like [`Self::load`], but a missing explicit file yields defaults.
    ///
    /// Used by commands that create the file.
    pub fn load_optional(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = Self::target_path(config_file.map(PathBuf::as_path));
        Self::load_from(&path, false)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("KILN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kiln.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "kiln", "kiln")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kiln.toml"))
    }

    /// The file `init` and `config set` write to.
    pub fn target_path(explicit: Option<&Path>) -> PathBuf {
        explicit.map(Path::to_path_buf).unwrap_or_else(Self::config_path)
    }

    /// Value stored under a dotted key, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        if !KEYS.contains(&key) {
            return None;
        }
        let root = serde_json::to_value(self).ok()?;
        key.split('.')
            .try_fold(&root, |node, segment| node.get(segment))
            .cloned()
    }
}

/// Parse a `config set` value: booleans and integers keep their type,
/// anything else is stored as a string.
pub fn parse_value(raw: &str) -> toml::Value {
    if let Ok(flag) = raw.parse::<bool>() {
        return toml::Value::Boolean(flag);
    }
    if let Ok(number) = raw.parse::<i64>() {
        return toml::Value::Integer(number);
    }
    toml::Value::String(raw.to_string())
}

/// Insert `value` at a dotted `key`, creating intermediate tables.
pub fn insert_dotted(table: &mut toml::Table, key: &str, value: toml::Value) -> Result<(), String> {
    let (sections, leaf) = match key.rsplit_once('.') {
        Some((sections, leaf)) => (sections, leaf),
        None => ("", key),
    };

    let mut current = table;
    for section in sections.split('.').filter(|s| !s.is_empty()) {
        current = current
            .entry(section)
            .or_insert(toml::Value::Table(toml::Table::new()))
            .as_table_mut()
            .ok_or_else(|| format!("'{section}' is not a table"))?;
    }
    current.insert(leaf.to_string(), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_leave_style_unset() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.style.is_none());
        assert!(!cfg.defaults.pure);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_is_layered_over_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kiln.toml");
        fs::write(&path, "[defaults]\nstyle = \"scss\"\npure = true\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.style.as_deref(), Some("scss"));
        assert!(cfg.defaults.pure);
        assert!(!cfg.defaults.stateless);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn optional_load_tolerates_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        let cfg = AppConfig::load_optional(Some(&missing)).unwrap();
        assert_eq!(cfg.output, OutputConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kiln.toml");
        fs::write(&path, "[defaults\nstyle=").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let mut cfg = AppConfig::default();
        cfg.defaults.style = Some("less".into());

        assert_eq!(cfg.get("defaults.style"), Some(serde_json::json!("less")));
        assert_eq!(cfg.get("output.no_color"), Some(serde_json::json!(false)));
        assert_eq!(cfg.get("templates.dir"), Some(serde_json::Value::Null));
        assert_eq!(cfg.get("defaults.language"), None);
    }

    #[test]
    fn parse_value_keeps_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("4"), toml::Value::Integer(4));
        assert_eq!(parse_value("scss"), toml::Value::String("scss".into()));
    }

    #[test]
    fn insert_dotted_creates_sections() {
        let mut table = toml::Table::new();
        insert_dotted(&mut table, "defaults.style", parse_value("sass")).unwrap();

        let cfg: AppConfig = toml::Value::Table(table).try_into().unwrap();
        assert_eq!(cfg.defaults.style.as_deref(), Some("sass"));
    }

    #[test]
    fn insert_dotted_rejects_scalar_section() {
        let mut table = toml::Table::new();
        table.insert("defaults".into(), toml::Value::Integer(1));
        assert!(insert_dotted(&mut table, "defaults.style", parse_value("css")).is_err());
    }
}
