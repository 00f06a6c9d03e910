//! Implementation of the `kiln styles` command.

use serde::Serialize;

use kiln_core::domain::{ChoiceCategory, ChoiceProvider, StaticCatalog, StyleLanguage};

use crate::{
    cli::{ListFormat, StylesArgs},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct StyleRow {
    key: String,
    suffix: String,
    indented: bool,
}

pub fn execute(args: StylesArgs, output: OutputManager) -> CliResult<()> {
    let rows = style_rows(StaticCatalog::global());

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available Styles:")?;
            for row in &rows {
                let syntax = if row.indented { "indented" } else { "braces" };
                output.print(&format!("  {:<8} {:<7} {syntax}", row.key, row.suffix))?;
            }
        }
        ListFormat::List => {
            for row in &rows {
                output.data(&row.key)?;
            }
        }
        ListFormat::Json => {
            output.data(&serde_json::to_string_pretty(&rows)?)?;
        }
    }

    Ok(())
}

fn style_rows<P: ChoiceProvider + ?Sized>(catalog: &P) -> Vec<StyleRow> {
    catalog
        .choices(ChoiceCategory::Style)
        .into_iter()
        .map(|choice| StyleRow {
            indented: choice
                .key
                .parse::<StyleLanguage>()
                .is_ok_and(|style| style.is_indented()),
            suffix: choice.suffix.unwrap_or_default(),
            key: choice.key,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_registry_order() {
        let rows = style_rows(StaticCatalog::global());
        let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["css", "sass", "scss", "less", "stylus"]);
    }

    #[test]
    fn stylus_is_indented_with_styl_suffix() {
        let rows = style_rows(StaticCatalog::global());
        let stylus = rows.iter().find(|r| r.key == "stylus").unwrap();
        assert_eq!(stylus.suffix, ".styl");
        assert!(stylus.indented);
        assert!(!rows.iter().find(|r| r.key == "scss").unwrap().indented);
    }
}
