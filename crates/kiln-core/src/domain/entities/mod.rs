pub mod common;
pub mod render_plan;

pub use crate::domain::DomainError;
pub use common::RelativePath;
pub use render_plan::{FileToWrite, PlannedFile, RenderPlan, RenderedComponent, TemplateId};
