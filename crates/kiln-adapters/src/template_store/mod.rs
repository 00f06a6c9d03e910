//! Template stores.

mod builtin;
mod directory;

pub use builtin::{BUILTIN_V4, BuiltinTemplates};
pub use directory::DirectoryTemplates;
