//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core requests and display the
//! results. No business logic lives here.

pub mod completions;
pub mod component;
pub mod config;
pub mod init;
pub mod settings;
pub mod styles;

use kiln_core::{
    application::ComponentRequest,
    domain::{ComponentKind, StyleLanguage, StyleUsage, TemplateSetVersion},
    error::KilnError,
};

use crate::{
    cli::ResolveArgs,
    config::Defaults,
    error::{CliError, CliResult},
};

/// Merge resolver flags over the configured defaults into a request.
///
/// Style and version strings are parsed here so that unknown values surface
/// as the core's `UnknownStyle` / `UnsupportedVersion` errors.
pub(crate) fn build_request(
    args: &ResolveArgs,
    stateless: bool,
    no_styles: bool,
    defaults: &Defaults,
) -> CliResult<ComponentRequest> {
    validate_component_name(&args.name)?;

    let mut request = ComponentRequest::new(args.name.clone())
        .pure(args.pure || defaults.pure)
        .with_kind(ComponentKind::from_stateless(stateless || defaults.stateless))
        .with_style_usage(StyleUsage::from_flag(!(no_styles || defaults.no_styles)));

    if let Some(style) = args.style.as_deref().or(defaults.style.as_deref()) {
        let style: StyleLanguage = style.parse().map_err(KilnError::from)?;
        request = request.with_style(style);
    }

    if let Some(number) = args.template_version.or(defaults.template_version) {
        let version = TemplateSetVersion::try_from(number).map_err(KilnError::from)?;
        request = request.with_version(version);
    }

    Ok(request)
}

fn validate_component_name(name: &str) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidComponentName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    Ok(())
}
