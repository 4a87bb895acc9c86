//! `@doc.type` blocks — LuaCATS annotations exported as README type docs.
//!
//! ```lua
//! ---@doc.type
//! ---@class picker.Item
//! ---@field value string
//!
//! ```
//!
//! The block runs until the first empty line. Only blocks carrying a
//! `@class NAME` tag produce a record.

use crate::model::{DocRecord, TypeDoc};
use regex::Regex;
use std::sync::LazyLock;

static RE_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*---@doc\.type$").unwrap());

static RE_CLASS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@class\s+([^:\n]+)").unwrap());

enum State {
    Idle,
    Collecting(String),
}

/// Scan lines for type blocks.
///
/// A block still open at end of input is dropped without a record.
pub fn scan(lines: &[&str]) -> Vec<DocRecord> {
    let mut docs = Vec::new();
    let mut state = State::Idle;

    for line in lines {
        state = match state {
            // An open sentinel always starts a fresh block, discarding any
            // unclosed one.
            _ if RE_OPEN.is_match(line) => State::Collecting(String::new()),
            State::Idle => State::Idle,
            State::Collecting(body) if line.is_empty() => {
                if let Some(doc) = finish(&body) {
                    docs.push(doc);
                }
                State::Idle
            }
            State::Collecting(mut body) => {
                body.push_str(line.trim());
                body.push('\n');
                State::Collecting(body)
            }
        };
    }

    if let State::Collecting(body) = state {
        tracing::debug!("Dropping unterminated type block: {}", body.trim());
    }

    docs
}

fn finish(body: &str) -> Option<DocRecord> {
    let definition = body.trim();
    if definition.is_empty() {
        return None;
    }
    let caps = RE_CLASS.captures(definition)?;
    let name = caps[1].trim();
    if name.is_empty() {
        return None;
    }
    Some(DocRecord::Type(TypeDoc {
        name: name.to_string(),
        definition: definition.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> Vec<DocRecord> {
        let lines: Vec<&str> = input.split('\n').collect();
        scan(&lines)
    }

    #[test]
    fn class_block() {
        let docs = run("---@doc.type\n  ---@class Foo\n  ---@field bar string\n\nlocal x = 1");
        assert_eq!(
            docs,
            vec![DocRecord::Type(TypeDoc {
                name: "Foo".into(),
                definition: "---@class Foo\n---@field bar string".into(),
            })]
        );
    }

    #[test]
    fn name_stops_at_colon() {
        let docs = run("---@doc.type\n---@class picker.Source: picker.Base\n\n");
        assert_eq!(docs[0].name(), "picker.Source");
    }

    #[test]
    fn block_without_class_emits_nothing() {
        let docs = run("---@doc.type\n---@alias Mode 'n'|'i'\n\n");
        assert!(docs.is_empty());
    }

    #[test]
    fn empty_block_emits_nothing() {
        assert!(run("---@doc.type\n\n").is_empty());
    }

    #[test]
    fn whitespace_only_line_does_not_close() {
        let docs = run("---@doc.type\n---@class A\n   \n---@field x integer\n\n");
        assert_eq!(docs.len(), 1);
        match &docs[0] {
            DocRecord::Type(t) => assert!(t.definition.ends_with("---@field x integer")),
            other => panic!("expected type record, got {:?}", other),
        }
    }

    #[test]
    fn whitespace_only_class_name_emits_nothing() {
        assert!(run("---@doc.type\n---@class  : Base\n\n").is_empty());
    }

    #[test]
    fn reopen_discards_unclosed_block() {
        let docs = run("---@doc.type\n---@class Old\n---@doc.type\n---@class New\n\n");
        assert_eq!(
            docs,
            vec![DocRecord::Type(TypeDoc {
                name: "New".into(),
                definition: "---@class New".into(),
            })]
        );
    }

    #[test]
    fn unterminated_block_dropped() {
        let docs = run("---@doc.type\n---@class Foo\n---@field a string");
        assert!(docs.is_empty());
    }

    #[test]
    fn unterminated_after_complete_block() {
        let docs = run("---@doc.type\n---@class A\n\n---@doc.type\n---@class B");
        let names: Vec<_> = docs.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["A"]);
    }
}
