// src/error.rs

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, PageViewsError>;

#[derive(Debug, thiserror::Error)]
pub enum PageViewsError {
    #[error("file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("file is empty: {}", path.display())]
    EmptyFile { path: PathBuf },

    #[error("malformed line {line_number} in {}: {line:?}", path.display())]
    MalformedLine {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
