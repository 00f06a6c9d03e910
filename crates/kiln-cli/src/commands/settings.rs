//! `kiln settings` prints the resolved file set as JSON.
//!
//! The output is the exact context templates are rendered against, so it
//! doubles as a reference when writing template overrides.

use kiln_core::{domain::resolve, error::KilnError};

use crate::{
    cli::SettingsArgs,
    commands::build_request,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: SettingsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(&args.resolve, false, false, &config.defaults)?;

    let file_set = resolve(
        &request.name,
        request.style,
        request.is_pure,
        request.version,
    )
    .map_err(KilnError::from)?;

    output.data(&serde_json::to_string_pretty(&file_set)?)?;
    Ok(())
}
