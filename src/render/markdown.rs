//! GitHub-flavored markdown renderer, one function per category.
//!
//! The `api` fragments carry panvimdoc markers so the same README can be
//! converted into a vim help file.

use crate::model::*;

/// Language tag used for fenced Lua code.
const CODE_LANG: &str = "lua";

pub fn render_action(doc: &ActionDoc) -> String {
    render_bullet(&doc.name, &doc.desc)
}

pub fn render_autocmd(doc: &AutocmdDoc) -> String {
    render_bullet(&doc.name, &doc.desc)
}

fn render_bullet(name: &str, desc: &str) -> String {
    format!("- `{}`\n  - {}", name, desc)
}

/// Render a source: heading, description, options table and example.
pub fn render_source(doc: &SourceDoc) -> String {
    let options = match doc.options.as_deref() {
        Some(options) if !options.is_empty() => {
            let mut lines = vec![
                "| Name | Type | Default |Description|".to_string(),
                "|------|------|---------|-----------|".to_string(),
            ];
            for option in options {
                lines.push(format!(
                    "| {} | {} | {} | {} |",
                    escape_table(&option.name),
                    escape_table(&option.ty),
                    escape_table(option.default.as_deref().unwrap_or("")),
                    escape_table(option.desc.as_deref().unwrap_or("")),
                ));
            }
            lines.join("\n")
        }
        _ => "_No options_".to_string(),
    };

    let example = match doc.example.as_deref() {
        Some(example) if !example.is_empty() => {
            format!("```{}\n{}\n```", CODE_LANG, example)
        }
        _ => String::new(),
    };

    format!("### {}\n\n{}\n\n{}\n\n{}", doc.name, doc.desc, options, example)
}

/// Render an API function: panvimdoc markers, heading, description, args.
pub fn render_api(doc: &ApiDoc) -> String {
    let args = match doc.args.as_deref() {
        Some(args) if !args.is_empty() => {
            let mut lines = vec![
                "| Name | Type | Description |".to_string(),
                "|------|------|-------------|".to_string(),
            ];
            for arg in args {
                lines.push(format!(
                    "| {} | {} | {} |",
                    escape_table(&arg.name),
                    escape_table(&arg.ty),
                    escape_table(&arg.desc),
                ));
            }
            lines.join("\n")
        }
        _ => "_No arguments_".to_string(),
    };

    let lines = [
        String::new(),
        format!("<!-- panvimdoc-include-comment {} ~ -->", doc.name),
        String::new(),
        "<!-- panvimdoc-ignore-start -->".to_string(),
        format!("### {}", doc.name),
        "<!-- panvimdoc-ignore-end -->".to_string(),
        String::new(),
        doc.desc.clone(),
        String::new(),
        args,
        "&nbsp;".to_string(),
    ];
    lines.join("\n")
}

/// Render a type: a vimdoc help tag followed by the raw definition.
pub fn render_type(doc: &TypeDoc) -> String {
    format!(
        "```vimdoc\n*{}*\n```\n```{}\n{}\n```",
        doc.name, CODE_LANG, doc.definition
    )
}

/// Escape `|` so the text can sit inside a markdown table cell.
///
/// Only pipes are escaped. Already-escaped pipes are escaped again.
pub fn escape_table(s: &str) -> String {
    s.replace('|', "\\|")
}
