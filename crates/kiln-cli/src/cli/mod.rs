//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "kiln",
    bin_name = "kiln",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f525} React component scaffolding",
    long_about = "Kiln generates a React component, its stylesheet and its test \
                  from a single name, in a folder named after the component.",
    after_help = "EXAMPLES:\n\
        \x20 kiln component peer-groups\n\
        \x20 kiln component NavBar --style scss --pure\n\
        \x20 kiln settings peer-groups | jq .component\n\
        \x20 kiln completions bash > /usr/share/bash-completion/completions/kiln",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a component, its style and its test.
    #[command(
        visible_alias = "c",
        about = "Generate a component",
        after_help = "EXAMPLES:\n\
            \x20 kiln component peer-groups\n\
            \x20 kiln component PeerGroups --style sass --stateless\n\
            \x20 kiln component button --no-styles --root ./web --dry-run"
    )]
    Component(ComponentArgs),

    /// Print the resolved settings for a component name.
    #[command(
        about = "Show resolved component settings as JSON",
        after_help = "EXAMPLES:\n\
            \x20 kiln settings peer-groups\n\
            \x20 kiln settings NavBar --style stylus --pure"
    )]
    Settings(SettingsArgs),

    /// List the supported style languages.
    #[command(
        about = "List supported style languages",
        after_help = "EXAMPLES:\n\
            \x20 kiln styles\n\
            \x20 kiln styles --format json"
    )]
    Styles(StylesArgs),

    /// Initialise a Kiln configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 kiln init\n\
            \x20 kiln init --force\n\
            \x20 kiln --config ./kiln.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kiln completions bash > ~/.local/share/bash-completion/completions/kiln\n\
            \x20 kiln completions zsh  > ~/.zfunc/_kiln\n\
            \x20 kiln completions fish > ~/.config/fish/completions/kiln.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Kiln configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kiln config get defaults.style\n\
            \x20 kiln config set defaults.style scss\n\
            \x20 kiln config list"
    )]
    Config(ConfigCommands),
}

// ── resolver options ──────────────────────────────────────────────────────────

/// Options shared by every command that resolves component settings.
///
/// Flags left unset fall back to `[defaults]` in the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct ResolveArgs {
    /// Component name (`peer-groups` or `PeerGroups`).
    #[arg(value_name = "NAME", help = "Component name")]
    pub name: String,

    /// Style language of the generated stylesheet.
    #[arg(
        short = 's',
        long = "style",
        value_name = "STYLE",
        help = "Style language (css, sass, scss, less, stylus)"
    )]
    pub style: Option<String>,

    /// Extend `React.PureComponent` instead of `React.Component`.
    #[arg(long = "pure", help = "Extend React.PureComponent")]
    pub pure: bool,

    /// Template-set version.
    #[arg(
        long = "template-version",
        value_name = "N",
        help = "Template-set version (default: current)"
    )]
    pub template_version: Option<u32>,
}

// ── component ─────────────────────────────────────────────────────────────────

/// Arguments for `kiln component`.
#[derive(Debug, Clone, Args)]
pub struct ComponentArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Generate a function component without state.
    #[arg(long = "stateless", help = "Generate a stateless function component")]
    pub stateless: bool,

    /// Skip the stylesheet and its import.
    #[arg(long = "no-styles", help = "Do not generate a style file")]
    pub no_styles: bool,

    /// Project root the component paths are relative to.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub root: PathBuf,

    /// Directory of template overrides.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Directory with template overrides"
    )]
    pub templates: Option<PathBuf>,

    /// Show what would be generated without writing.
    #[arg(long = "dry-run", help = "Preview without writing files")]
    pub dry_run: bool,

    /// Overwrite existing files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── settings ──────────────────────────────────────────────────────────────────

/// Arguments for `kiln settings`.
#[derive(Debug, Clone, Args)]
pub struct SettingsArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,
}

// ── styles ────────────────────────────────────────────────────────────────────

/// Arguments for `kiln styles`.
#[derive(Debug, Clone, Args)]
pub struct StylesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for `kiln styles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Aligned table.
    Table,
    /// One key per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `kiln init`.
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kiln completions`.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kiln config`.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.style`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path, e.g. `defaults.style`.
        key: String,
        /// New value.
        value: String,
    },
    /// Print the effective configuration.
    List,
    /// Print the path of the configuration file.
    Path,
}
