//! Application services - orchestrate use cases.

pub mod component_service;

pub use component_service::{ComponentRequest, ComponentService};
