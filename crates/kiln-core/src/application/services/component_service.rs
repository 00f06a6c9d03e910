//! Component Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Resolve settings for the component name
//! 2. Plan which files to produce
//! 3. Render each template against the settings
//! 4. Write to filesystem, rolling back on failure

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    },
    domain::{
        ComponentKind, GeneratedFileSet, RenderPlan, RenderedComponent, StyleLanguage, StyleUsage,
        TemplateId, TemplateSetVersion, resolve,
    },
    error::{KilnError, KilnResult},
};

/// Everything needed to generate one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRequest {
    pub name: String,
    pub style: Option<StyleLanguage>,
    pub is_pure: Option<bool>,
    pub version: Option<TemplateSetVersion>,
    pub kind: ComponentKind,
    pub style_usage: StyleUsage,
}

impl ComponentRequest {
    /// Request with every option left at its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: None,
            is_pure: None,
            version: None,
            kind: ComponentKind::default(),
            style_usage: StyleUsage::default(),
        }
    }

    pub fn with_style(mut self, style: StyleLanguage) -> Self {
        self.style = Some(style);
        self
    }

    pub fn pure(mut self, is_pure: bool) -> Self {
        self.is_pure = Some(is_pure);
        self
    }

    pub fn with_version(mut self, version: TemplateSetVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_kind(mut self, kind: ComponentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_style_usage(mut self, usage: StyleUsage) -> Self {
        self.style_usage = usage;
        self
    }

    fn style_or_default(&self) -> StyleLanguage {
        self.style.unwrap_or_default()
    }

    fn version_or_default(&self) -> TemplateSetVersion {
        self.version.unwrap_or_default()
    }
}

/// Main generation service.
pub struct ComponentService {
    templates: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ComponentService {
    /// Create a new service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use kiln_core::application::ComponentService;
    ///
    /// let service = ComponentService::new(
    ///     templates,  // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        templates: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            templates,
            renderer,
            filesystem,
        }
    }

    /// Resolve the file set without planning or rendering.
    pub fn settings(&self, request: &ComponentRequest) -> KilnResult<GeneratedFileSet> {
        Ok(resolve(
            &request.name,
            request.style,
            request.is_pure,
            request.version,
        )?)
    }

    /// Files the request would produce and their templates.
    pub fn plan(&self, request: &ComponentRequest) -> KilnResult<RenderPlan> {
        let file_set = self.settings(request)?;
        self.plan_for(request, &file_set)
    }

    /// Render every planned file without touching the filesystem.
    #[instrument(skip_all, fields(component = %request.name, root = %root.as_ref().display()))]
    pub fn render(
        &self,
        request: &ComponentRequest,
        root: impl AsRef<Path>,
    ) -> KilnResult<RenderedComponent> {
        let file_set = self.settings(request)?;
        let plan = self.plan_for(request, &file_set)?;
        let context = file_set
            .to_context()
            .map_err(|e| ApplicationError::RenderingFailed {
                template: "context".into(),
                reason: e.to_string(),
            })?;

        let mut rendered = RenderedComponent::new(root.as_ref());
        for planned in plan.files() {
            let source = self.templates.get(&planned.template)?;
            let content = self
                .renderer
                .render(&source, &context)
                .map_err(|e| attach_template(e, &planned.template))?;

            debug!(path = %planned.path, template = %planned.template, "Rendered file");
            rendered.add_file(planned.path.clone(), content);
        }

        rendered.validate()?;
        Ok(rendered)
    }

    /// Render and write the component under `root`.
    ///
    /// Refuses to touch existing files unless `overwrite` is set. When a
    /// write fails, files created so far are removed and overwritten files
    /// get their previous content back.
    #[instrument(skip_all, fields(component = %request.name, root = %root.as_ref().display(), overwrite = overwrite))]
    pub fn generate(
        &self,
        request: &ComponentRequest,
        root: impl AsRef<Path>,
        overwrite: bool,
    ) -> KilnResult<RenderedComponent> {
        info!("Generating component");

        let rendered = self.render(request, root)?;

        if !overwrite {
            if let Some(existing) = rendered.targets().find(|p| self.filesystem.exists(p)) {
                return Err(ApplicationError::FileExists { path: existing }.into());
            }
        }

        let mut written = Vec::with_capacity(rendered.file_count());
        match self.write_all(&rendered, &mut written) {
            Ok(()) => {
                info!(files = rendered.file_count(), "Component generated");
                Ok(rendered)
            }
            Err(e) => {
                warn!(error = %e, "Write failed, attempting rollback");
                self.rollback(written, &e)?;
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn plan_for(
        &self,
        request: &ComponentRequest,
        file_set: &GeneratedFileSet,
    ) -> KilnResult<RenderPlan> {
        Ok(RenderPlan::build(
            file_set,
            request.version_or_default(),
            request.style_or_default(),
            request.kind,
            request.style_usage,
        )?)
    }

    /// Write every file, recording each one with its previous content.
    fn write_all(
        &self,
        rendered: &RenderedComponent,
        written: &mut Vec<WrittenFile>,
    ) -> KilnResult<()> {
        for (file, path) in rendered.files().iter().zip(rendered.targets()) {
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            let previous = if self.filesystem.exists(&path) {
                Some(self.filesystem.read_file(&path)?)
            } else {
                None
            };

            // Recorded before the write: a failed write may already have
            // truncated the file.
            written.push(WrittenFile {
                path: path.clone(),
                previous,
            });
            self.filesystem.write_file(&path, &file.content)?;
            debug!(path = %path.display(), bytes = file.size(), "Wrote file");
        }
        Ok(())
    }

    /// Best-effort rollback, newest file first.
    ///
    /// `cause` is the write error that triggered the rollback; it is kept in
    /// the `RollbackFailed` reason.
    fn rollback(&self, written: Vec<WrittenFile>, cause: &KilnError) -> KilnResult<()> {
        let mut first_failure = None;

        for file in written.into_iter().rev() {
            let result = match &file.previous {
                Some(content) => self.filesystem.write_file(&file.path, content),
                None if self.filesystem.exists(&file.path) => {
                    self.filesystem.remove_file(&file.path)
                }
                None => Ok(()),
            };
            if let Err(e) = result {
                warn!(error = %e, path = %file.path.display(), "Rollback failed");
                first_failure.get_or_insert(ApplicationError::RollbackFailed {
                    path: file.path,
                    reason: format!("{e} (while undoing: {cause})"),
                });
            }
        }

        match first_failure {
            Some(err) => Err(err.into()),
            None => {
                info!("Rollback successful");
                Ok(())
            }
        }
    }
}

struct WrittenFile {
    path: PathBuf,
    previous: Option<String>,
}

fn attach_template(err: KilnError, template: &TemplateId) -> KilnError {
    match err {
        KilnError::Application(ApplicationError::RenderingFailed { reason, .. }) => {
            ApplicationError::RenderingFailed {
                template: template.to_string(),
                reason,
            }
            .into()
        }
        other => other,
    }
}
