use std::path::PathBuf;

use thiserror::Error;

/// Run-level failures. Each one aborts the build before any output is written,
/// except `Write`, which is the output step itself failing.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Directory '{}' not found", .0.display())]
    InputDirMissing(PathBuf),

    #[error("No resume data files found in '{}'", .0.display())]
    NoCandidates(PathBuf),

    #[error("Failed to load required YAML files: {}", display_paths(.0))]
    LoadFailed(Vec<PathBuf>),

    #[error("Input closed before a resume file was chosen")]
    InputClosed,

    #[error("Console I/O error: {0}")]
    Console(#[from] std::io::Error),

    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing output file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
