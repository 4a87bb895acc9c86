//! Source file discovery.

use crate::error::{DocError, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect files under `root` whose file name matches `pattern`.
///
/// Directory entries are visited sorted by file name, so the result is
/// deterministic for a given tree.
pub fn discover_sources(root: &Path, pattern: &Pattern) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| DocError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| pattern.matches(name));
        if matches {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn lua() -> Pattern {
        Pattern::new("*.lua").unwrap()
    }

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn finds_nested_matches_only() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "lua/plugin/init.lua");
        touch(dir.path(), "lua/plugin/source/files.lua");
        touch(dir.path(), "README.md");
        touch(dir.path(), "scripts/docs.rs");

        let files = discover_sources(dir.path(), &lua()).unwrap();
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("lua/plugin/init.lua"),
                PathBuf::from("lua/plugin/source/files.lua"),
            ]
        );
    }

    #[test]
    fn deterministic_order() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.lua");
        touch(dir.path(), "a.lua");
        touch(dir.path(), "c/a.lua");
        let first = discover_sources(dir.path(), &lua()).unwrap();
        let second = discover_sources(dir.path(), &lua()).unwrap();
        assert_eq!(first, second);
        assert!(first[0].ends_with("a.lua"));
    }

    #[test]
    fn directory_named_like_pattern_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("weird.lua")).unwrap();
        assert!(discover_sources(dir.path(), &lua()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(discover_sources(&missing, &lua()).is_err());
    }
}
