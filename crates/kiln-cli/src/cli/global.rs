//! Flags accepted before or after any `kiln` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Verbosity, colour, config file and output format.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more: -v info, -vv debug (resolved names, rendered files), -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing but errors and requested data (settings JSON, config values)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never colour output (also set by NO_COLOR)
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user kiln config
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results and errors are printed
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Results and errors should be emitted as JSON.
    pub fn wants_json(&self) -> bool {
        self.output_format == OutputFormat::Json
    }
}

/// Rendering of command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped
    #[default]
    Auto,
    /// Coloured, with status symbols
    Human,
    /// Uncoloured text, one item per line
    Plain,
    /// A single JSON document per command
    Json,
}

impl OutputFormat {
    /// Settle `Auto` for the current stdout; explicit formats pass through.
    pub fn resolve(self, stdout_is_terminal: bool) -> Self {
        match self {
            Self::Auto if stdout_is_terminal => Self::Human,
            Self::Auto => Self::Plain,
            explicit => explicit,
        }
    }

    pub fn is_colored(self) -> bool {
        self == Self::Human
    }
}
