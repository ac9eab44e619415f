use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Option chain error: {0}")]
    Io(#[from] io::Error),
    #[error("Option chain error: {0}")]
    Csv(#[from] csv::Error),
    #[error("No option chain snapshots for [{prefix}] in {}", .directory.display())]
    NoSnapshots {
        directory: PathBuf,
        prefix: String
    },
    #[error("Option chain snapshot {} has no rows", .path.display())]
    EmptySnapshot {
        path: PathBuf
    }
}

impl ChainError {
    pub fn no_snapshots(directory: &Path, prefix: impl Into<String>) -> Self {
        Self::NoSnapshots {
            directory: directory.to_path_buf(),
            prefix: prefix.into()
        }
    }
}
