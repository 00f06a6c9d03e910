//! Destination helpers for files that live outside a component directory.
//!
//! Actions, stores and similar files are addressed by a free-form name that
//! may contain `/`-separated parent folders (`my/peer_groups`). These helpers
//! turn such names into cleaned paths and class names using the slug helpers
//! from [`naming`](crate::domain::naming).

use std::path::Path;

use crate::domain::{
    catalog::{ChoiceCategory, ChoiceProvider},
    error::DomainError,
    naming::{camelize, capitalize_first, humanize, slugify},
    value_objects::{ComponentKind, StyleUsage},
};

/// Final segment of the working directory.
pub fn base_dir(cwd: &Path) -> String {
    cwd.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Clean every segment of `path` and append the capitalized `suffix`.
///
/// `my/peer_groups` + `store` → `my/peerGroupsStore`.
pub fn cleaned_path_name(path: &str, suffix: Option<&str>) -> String {
    let cleaned = path
        .split('/')
        .map(|segment| camelize(&slugify(&humanize(segment))))
        .collect::<Vec<_>>()
        .join("/");

    format!("{cleaned}{}", capitalize_first(suffix.unwrap_or_default()))
}

/// Style class name for a component path: `nav_bar` → `nav-bar-component`.
pub fn component_style_name(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or_default().to_lowercase();
    format!("{}-component", slugify(&humanize(&file_name)))
}

/// Slugged application name, taken from the working directory when absent.
pub fn app_name(name: Option<&str>, cwd: &Path) -> String {
    let name = match name {
        Some(name) => name.to_string(),
        None => base_dir(cwd),
    };
    slugify(&humanize(&name))
}

/// Destination file for `name` under the catalog path registered for `kind`.
///
/// Parent segments of `name` are kept as folders and the leaf becomes a
/// capitalized `.js` file: `my/peer_groups` as a `store` →
/// `src/stores/my/PeerGroupsStore.js`.
///
/// # Errors
///
/// `MissingChoice` when `kind` is not a registered path.
pub fn destination_path<P: ChoiceProvider + ?Sized>(
    catalog: &P,
    name: &str,
    kind: &str,
    suffix: Option<&str>,
) -> Result<String, DomainError> {
    let cleaned = cleaned_path_name(name, suffix);
    let (parents, leaf) = match cleaned.rsplit_once('/') {
        Some((parents, leaf)) => (parents, leaf),
        None => ("", cleaned.as_str()),
    };

    let choice = catalog.choice_by_key(ChoiceCategory::Path, kind)?;
    let base = choice.require_path(ChoiceCategory::Path)?.trim_end_matches('/');

    let mut parts = vec![base];
    if !parents.is_empty() {
        parts.push(parents);
    }
    let leaf = capitalize_first(leaf);
    parts.push(&leaf);

    Ok(format!("{}.js", parts.join("/")))
}

/// Class name of the file [`destination_path`] would produce.
pub fn destination_class_name<P: ChoiceProvider + ?Sized>(
    catalog: &P,
    name: &str,
    kind: &str,
    suffix: Option<&str>,
) -> Result<String, DomainError> {
    let path = destination_path(catalog, name, kind, suffix)?;
    let file = path.rsplit('/').next().unwrap_or_default();
    let stem = file.split(".js").next().unwrap_or_default();
    Ok(capitalize_first(stem))
}

/// Component template identifier, e.g. `StatelessNoStyles`.
pub fn component_template_name(kind: ComponentKind, usage: StyleUsage) -> String {
    format!("{}{}", kind.as_str(), usage.as_str())
}
