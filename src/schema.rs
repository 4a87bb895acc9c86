//! TOML parsing and strict validation of `@doc` block bodies.

use crate::error::{DocError, Result};
use crate::model::DocRecord;
use std::path::Path;

/// Parse a block body as TOML and validate it into a [`DocRecord`].
///
/// Both failure kinds carry the file path and the raw body so the block can
/// be located from the error message alone.
pub fn parse_block(path: &Path, body: &str) -> Result<DocRecord> {
    let table: toml::Table = body.parse().map_err(|source| DocError::Parse {
        path: path.to_path_buf(),
        body: body.to_string(),
        source,
    })?;
    validate(path, body, table)
}

/// Dispatch an untyped table on its `category` literal.
pub fn validate(path: &Path, body: &str, table: toml::Table) -> Result<DocRecord> {
    toml::Value::Table(table)
        .try_into()
        .map_err(|source| DocError::Validation {
            path: path.to_path_buf(),
            body: body.to_string(),
            source,
        })
}
