//! Public-API tests for kiln-core: settings resolution, destination helpers
//! and the component service driven by small in-test adapters.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use kiln_core::application::{ApplicationError, ports::Filesystem};
use kiln_core::domain::{
    ClassBase, ComponentKind, DomainError, StaticCatalog, StyleLanguage, StyleUsage, TemplateId,
    TemplateSetVersion, destination, resolve,
};
use kiln_core::error::{KilnError, KilnResult};
use kiln_core::prelude::*;

// ============================================================================
// Test adapters
// ============================================================================

#[derive(Clone, Default)]
struct SharedFs(Arc<Mutex<HashMap<PathBuf, String>>>);

impl SharedFs {
    fn get(&self, path: &str) -> Option<String> {
        self.0.lock().unwrap().get(Path::new(path)).cloned()
    }

    fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

impl Filesystem for SharedFs {
    fn create_dir_all(&self, _path: &Path) -> KilnResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()> {
        self.0
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> KilnResult<String> {
        self.0.lock().unwrap().get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not found".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.0.lock().unwrap().contains_key(path)
    }

    fn remove_file(&self, path: &Path) -> KilnResult<()> {
        self.0.lock().unwrap().remove(path);
        Ok(())
    }
}

struct NameStore;

impl TemplateStore for NameStore {
    fn get(&self, id: &TemplateId) -> KilnResult<String> {
        Ok(id.name().to_string())
    }

    fn list(&self, _version: TemplateSetVersion) -> KilnResult<Vec<TemplateId>> {
        Ok(Vec::new())
    }
}

struct EchoRenderer;

impl TemplateRenderer for EchoRenderer {
    fn render(&self, source: &str, context: &serde_json::Value) -> KilnResult<String> {
        Ok(format!(
            "{source}:{}",
            context["component"]["className"].as_str().unwrap_or_default()
        ))
    }
}

fn service(fs: &SharedFs) -> ComponentService {
    ComponentService::new(
        Box::new(NameStore),
        Box::new(EchoRenderer),
        Box::new(fs.clone()),
    )
}

// ============================================================================
// Resolver
// ============================================================================

#[test]
fn peer_groups_example() {
    let set = resolve("peer-groups", None, None, None).unwrap();

    assert_eq!(set.component.component_name, "PeerGroups");
    assert_eq!(set.component.file_name, "peer-groups.tsx");
    assert_eq!(set.component.class_base, ClassBase::Component);
    assert_eq!(set.style.class_name, "PeerGroups");
    assert_eq!(set.component.path, "src/components/peer-groups/");
}

#[test]
fn both_input_forms_give_same_identifiers() {
    let kebab = resolve("peer-groups", None, None, None).unwrap();
    let pascal = resolve("PeerGroups", None, None, None).unwrap();

    assert_eq!(kebab.component.component_name, pascal.component.component_name);
    assert_eq!(kebab.component.file_name, pascal.component.file_name);
    assert_eq!(kebab.test.file_name, pascal.test.file_name);
}

#[test]
fn slash_is_invalid_name() {
    assert!(matches!(
        resolve("peer/groups", None, None, None),
        Err(DomainError::InvalidName { .. })
    ));
}

#[test]
fn pure_flag_selects_pure_component() {
    let set = resolve("peer-groups", Some(StyleLanguage::Less), Some(true), None).unwrap();
    assert_eq!(set.component.class_base.identifier(), "React.PureComponent");
    assert_eq!(set.style.file_name, "peer-groups.less");
}

#[test]
fn unsupported_version_is_explicit() {
    assert_eq!(
        TemplateSetVersion::try_from(5),
        Err(DomainError::UnsupportedVersion { version: 5 })
    );
}

#[test]
fn settings_json_uses_template_field_names() {
    let json = serde_json::to_value(resolve("NavBar", None, None, None).unwrap()).unwrap();

    for field in ["path", "fileName", "className", "suffix"] {
        assert!(json["style"].get(field).is_some(), "style.{field}");
    }
    for field in [
        "path",
        "styleFileName",
        "fileName",
        "className",
        "classBase",
        "displayName",
        "componentName",
        "suffix",
    ] {
        assert!(json["component"].get(field).is_some(), "component.{field}");
    }
    for field in ["path", "styleFileName", "className", "fileName"] {
        assert!(json["test"].get(field).is_some(), "test.{field}");
    }
}

// ============================================================================
// Destination helpers
// ============================================================================

#[test]
fn destination_helpers_agree() {
    let catalog = StaticCatalog::global();
    let path = destination::destination_path(catalog, "todo/items", "action", Some("actions")).unwrap();
    let class = destination::destination_class_name(catalog, "todo/items", "action", Some("actions")).unwrap();

    assert_eq!(path, "src/actions/todo/ItemsActions.js");
    assert_eq!(class, "ItemsActions");
}

// ============================================================================
// Component service
// ============================================================================

#[test]
fn generates_files_under_root() {
    let fs = SharedFs::default();
    let request = ComponentRequest::new("nav-bar").with_style(StyleLanguage::Scss);

    let rendered = service(&fs).generate(&request, "app", false).unwrap();

    assert_eq!(rendered.file_count(), 3);
    assert_eq!(
        fs.get("app/src/components/nav-bar/nav-bar.tsx").as_deref(),
        Some("components/StatefulWithStyles:NavBar")
    );
    assert_eq!(
        fs.get("app/src/components/nav-bar/nav-bar.scss").as_deref(),
        Some("styles/Braces:NavBar")
    );
}

#[test]
fn second_generation_needs_overwrite() {
    let fs = SharedFs::default();
    let request = ComponentRequest::new("nav-bar")
        .with_kind(ComponentKind::Stateless)
        .with_style_usage(StyleUsage::NoStyles);

    service(&fs).generate(&request, "app", false).unwrap();
    let err = service(&fs).generate(&request, "app", false).unwrap_err();
    assert!(matches!(
        err,
        KilnError::Application(ApplicationError::FileExists { .. })
    ));

    service(&fs).generate(&request, "app", true).unwrap();
    assert_eq!(fs.len(), 2);
}
