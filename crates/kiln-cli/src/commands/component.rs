//! Implementation of the `kiln component` command.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use kiln_adapters::{BuiltinTemplates, DirectoryTemplates, LocalFilesystem, SimpleRenderer};
use kiln_core::{
    application::{ComponentService, ports::TemplateStore},
    domain::RenderedComponent,
};

use crate::{
    cli::ComponentArgs,
    commands::build_request,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `kiln component` command.
///
/// 1. Merge flags with configured defaults into a request
/// 2. Pick the template store (`--templates`, config, or built-ins)
/// 3. Render only (`--dry-run`) or render and write
/// 4. Report the files
#[instrument(skip_all, fields(component = %args.resolve.name))]
pub fn execute(args: ComponentArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(
        &args.resolve,
        args.stateless,
        args.no_styles,
        &config.defaults,
    )?;

    if !args.root.is_dir() {
        return Err(CliError::DirectoryNotFound {
            kind: "Project root",
            path: args.root,
        });
    }

    let templates_dir = args.templates.or(config.templates.dir);
    let service = ComponentService::new(
        template_store(templates_dir.as_deref())?,
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    debug!(?request, root = %args.root.display(), "Request built");

    if args.dry_run {
        let rendered = service.render(&request, &args.root)?;
        return report(&output, &rendered, true);
    }

    let rendered = service.generate(&request, &args.root, args.force)?;
    info!(files = rendered.file_count(), "Component written");
    report(&output, &rendered, false)
}

fn template_store(dir: Option<&Path>) -> CliResult<Box<dyn TemplateStore>> {
    match dir {
        Some(dir) if !dir.is_dir() => Err(CliError::DirectoryNotFound {
            kind: "Templates",
            path: PathBuf::from(dir),
        }),
        Some(dir) => {
            let store = DirectoryTemplates::load(dir)?;
            debug!(overrides = store.override_count(), "Loaded template overrides");
            Ok(Box::new(store))
        }
        None => Ok(Box::new(BuiltinTemplates::new())),
    }
}

fn report(output: &OutputManager, rendered: &RenderedComponent, dry_run: bool) -> CliResult<()> {
    if output.is_json() {
        let files: Vec<_> = rendered
            .files()
            .iter()
            .map(|f| serde_json::json!({ "path": f.path.to_string(), "bytes": f.size() }))
            .collect();
        let payload = serde_json::json!({
            "root": rendered.root().display().to_string(),
            "dryRun": dry_run,
            "files": files,
        });
        output.data(&serde_json::to_string_pretty(&payload)?)?;
        return Ok(());
    }

    if dry_run {
        output.info(&format!(
            "Dry run: would create {} files under {}",
            rendered.file_count(),
            rendered.root().display()
        ))?;
        for (file, target) in rendered.files().iter().zip(rendered.targets()) {
            output.item(&file.path.to_string())?;
            if target.exists() {
                output.warning(&format!("{} already exists", file.path))?;
            }
        }
        return Ok(());
    }

    output.success(&format!("Created {} files", rendered.file_count()))?;
    for file in rendered.files() {
        output.item(&file.path.to_string())?;
    }
    Ok(())
}
