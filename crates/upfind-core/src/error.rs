use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("failed to get absolute path of {what} directory {}", path.display())]
    PathResolution {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("target file name must not be empty")]
    InvalidTarget,
    #[error("file not found: {}", target.display())]
    NotFound { target: PathBuf },
}
