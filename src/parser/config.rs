//! `@doc` config blocks — a multi-line Lua comment with TOML inside.
//!
//! ```lua
//! --[=[@doc
//!   category = "source"
//!   name = "recent_files"
//!   desc = "Recently opened files."
//! --]=]
//! ```

use crate::error::Result;
use crate::model::DocRecord;
use crate::schema;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static RE_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*--\[=\[\s*@doc$").unwrap());

static RE_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(--)?\]=\]$").unwrap());

enum State {
    Idle,
    Collecting(String),
}

/// Scan lines for config blocks, validating each one as it closes.
///
/// The first invalid block aborts the scan. A block left open at end of
/// input is dropped.
pub fn scan(path: &Path, lines: &[&str]) -> Result<Vec<DocRecord>> {
    let mut docs = Vec::new();
    let mut state = State::Idle;

    for line in lines {
        state = match state {
            // An open sentinel always starts a fresh block, discarding any
            // unclosed one.
            _ if RE_OPEN.is_match(line) => State::Collecting(String::new()),
            State::Idle => State::Idle,
            State::Collecting(body) if RE_CLOSE.is_match(line) => {
                match schema::parse_block(path, &body) {
                    Ok(doc) => docs.push(doc),
                    Err(e) => {
                        tracing::error!("Error parsing doc in {}: {}", path.display(), body);
                        return Err(e);
                    }
                }
                State::Idle
            }
            State::Collecting(mut body) => {
                body.push_str(line);
                body.push('\n');
                State::Collecting(body)
            }
        };
    }

    if let State::Collecting(body) = state {
        tracing::debug!(
            "Dropping unterminated doc block in {}: {}",
            path.display(),
            body
        );
    }

    Ok(docs)
}
