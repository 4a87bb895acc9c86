//! Renderer module — turn doc records into README fragments.

pub mod markdown;

use crate::model::{Category, DocRecord};

/// Render every record of `category`, preserving input order.
///
/// Each fragment becomes one element of the README line buffer; fragments
/// may themselves contain newlines.
pub fn render_category(docs: &[DocRecord], category: Category) -> Vec<String> {
    docs.iter()
        .filter(|doc| doc.category() == category)
        .map(render)
        .collect()
}

/// Render a single record with its category's renderer.
pub fn render(doc: &DocRecord) -> String {
    match doc {
        DocRecord::Action(action) => markdown::render_action(action),
        DocRecord::Source(source) => markdown::render_source(source),
        DocRecord::Autocmd(autocmd) => markdown::render_autocmd(autocmd),
        DocRecord::Api(api) => markdown::render_api(api),
        DocRecord::Type(ty) => markdown::render_type(ty),
    }
}
