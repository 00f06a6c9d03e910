//! Simple placeholder substitution renderer.
//!
//! Replaces `{{ dotted.path }}` with the value found at that path in the
//! render context. There are no loops, conditionals or filters. A literal
//! `{{` is written as `\{{`.

use kiln_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    error::KilnResult,
};
use serde_json::Value;
use tracing::instrument;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Renderer using plain placeholder substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(bytes = source.len()))]
    fn render(&self, source: &str, context: &Value) -> KilnResult<String> {
        let mut out = String::with_capacity(source.len());
        let mut rest = source;

        while let Some(start) = rest.find(OPEN) {
            let (before, after_open) = (&rest[..start], &rest[start + OPEN.len()..]);

            if let Some(literal) = before.strip_suffix('\\') {
                out.push_str(literal);
                out.push_str(OPEN);
                rest = after_open;
                continue;
            }
            out.push_str(before);

            let end = after_open.find(CLOSE).ok_or_else(|| {
                failed(format!(
                    "unterminated placeholder at byte {}",
                    source.len() - rest.len() + start
                ))
            })?;
            let path = after_open[..end].trim();
            out.push_str(&lookup(context, path)?);

            rest = &after_open[end + CLOSE.len()..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

fn lookup(context: &Value, path: &str) -> KilnResult<String> {
    if path.is_empty() {
        return Err(failed("empty placeholder".into()));
    }

    let value = path
        .split('.')
        .try_fold(context, |value, key| value.get(key))
        .ok_or_else(|| failed(format!("unknown field '{path}'")))?;

    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => {
            Err(failed(format!("field '{path}' is not a plain value")))
        }
    }
}

fn failed(reason: String) -> kiln_core::error::KilnError {
    ApplicationError::RenderingFailed {
        template: "<inline>".into(),
        reason,
    }
    .into()
}
