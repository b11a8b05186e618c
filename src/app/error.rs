use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StripError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Cannot read source {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot rename {} to {}: target already exists", from.display(), to.display())]
    RenameCollision { from: PathBuf, to: PathBuf },
    #[error("Failed to rename {} to {}: {source}", from.display(), to.display())]
    RenameIo {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
