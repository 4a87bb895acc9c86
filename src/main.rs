//! docgen — regenerate README reference sections from Lua doc comments.
//!
//! Scans the repository for `--[=[@doc` TOML blocks and `---@doc.type`
//! annotation blocks, validates them, and rewrites the README regions between
//! `<!-- auto-generate-s:CATEGORY -->` / `<!-- auto-generate-e:CATEGORY -->`
//! markers. Run from the repository root with no arguments.

mod discover;
mod error;
mod model;
mod parser;
mod render;
mod schema;
mod splice;

use anyhow::{Context, Result};
use clap::Parser;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "docgen",
    about = "Regenerate README reference sections from Lua doc comments"
)]
struct Cli {
    /// Repository root containing the README and the Lua sources
    #[arg(short = 'r', long, default_value = ".")]
    root: PathBuf,

    /// README path, relative to the root
    #[arg(long, default_value = "README.md")]
    readme: PathBuf,

    /// File-name glob selecting source files
    #[arg(short = 'p', long, default_value = "*.lua")]
    pattern: String,

    /// Do not write; fail if the README is out of date
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docgen=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let pattern = Pattern::new(&cli.pattern)
        .with_context(|| format!("invalid file pattern: {}", cli.pattern))?;

    let docs = collect_docs(&cli.root, &pattern)?;

    let readme_path = cli.root.join(&cli.readme);
    let readme = read_lossy(&readme_path)
        .with_context(|| format!("failed to read {}", readme_path.display()))?;

    let updated = splice::update_readme(&readme, &docs)
        .with_context(|| format!("failed to update {}", readme_path.display()))?;

    if cli.check {
        if updated != readme {
            anyhow::bail!(
                "{} is out of date; run docgen to regenerate it",
                readme_path.display()
            );
        }
        tracing::info!("{} is up to date", readme_path.display());
        return Ok(());
    }

    fs::write(&readme_path, &updated)
        .with_context(|| format!("failed to write {}", readme_path.display()))?;
    tracing::info!("Wrote {}", readme_path.display());

    Ok(())
}

/// Discover, parse and sort every doc record below `root`.
fn collect_docs(root: &Path, pattern: &Pattern) -> error::Result<Vec<model::DocRecord>> {
    let files = discover::discover_sources(root, pattern)?;
    tracing::info!("Found {} source file(s) under {}", files.len(), root.display());

    let mut docs = Vec::new();
    for path in &files {
        let content = read_lossy(path)?;
        let found = parser::parse_file(path, &content)?;
        tracing::debug!("{}: {} doc(s)", path.display(), found.len());
        docs.extend(found);
    }

    model::sort_records(&mut docs);
    tracing::info!("Collected {} doc record(s)", docs.len());
    Ok(docs)
}

/// Read a whole file, replacing invalid UTF-8 with U+FFFD.
fn read_lossy(path: &Path) -> error::Result<String> {
    let bytes = fs::read(path).map_err(|source| error::DocError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
