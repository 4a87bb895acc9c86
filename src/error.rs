//! Error taxonomy for the extract → validate → splice pipeline.

use crate::model::Category;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocError {
    /// The text inside a `@doc` block is not valid TOML.
    #[error("failed to parse doc block in {}:\n{body}", path.display())]
    Parse {
        path: PathBuf,
        body: String,
        #[source]
        source: toml::de::Error,
    },

    /// The TOML parsed but matches none of the record shapes.
    #[error("invalid doc block in {}:\n{body}", path.display())]
    Validation {
        path: PathBuf,
        body: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("marker not found for {category}: {marker}")]
    MarkerMissing { category: Category, marker: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

pub type Result<T> = std::result::Result<T, DocError>;
