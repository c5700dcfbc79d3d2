/// Error types for OV3D model loading
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using OV3D's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a model
#[derive(Error, Debug)]
pub enum Error {
    /// The OBJ file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A numeric token under a recognized tag failed to parse
    #[error("invalid numeric literal {token:?} on line {line}")]
    InvalidNumericLiteral { line: usize, token: String },

    /// A face references a vertex index outside the parsed position list
    #[error("face {face} references vertex {index} but only {vertex_count} vertices were parsed")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    /// IO error while reading the file body
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
