//! Parser module — extract doc records from a Lua source file.
//!
//! Two independent line scans run over the same text:
//!
//! - [`config`] — `--[=[@doc` … `]=]` blocks holding TOML
//! - [`types`] — `---@doc.type` blocks closed by an empty line

pub mod config;
pub mod types;

use crate::error::Result;
use crate::model::DocRecord;
use std::path::Path;

/// Extract every doc record from one file.
///
/// Config-block records come first in file order, followed by type-block
/// records in file order.
pub fn parse_file(path: &Path, content: &str) -> Result<Vec<DocRecord>> {
    // Split on '\n' rather than `lines()`: a trailing newline yields a final
    // empty line, which closes an open type block.
    let lines: Vec<&str> = content.split('\n').collect();

    let mut docs = config::scan(path, &lines)?;
    docs.extend(types::scan(&lines));
    Ok(docs)
}
