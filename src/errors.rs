use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in `reword`.
///
/// Every variant is fatal: the run stops at the first error and nothing
/// already written is rolled back.
#[derive(Error, Debug)]
pub enum Error {
    /// An error related to file system I/O.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A phrase that could not be compiled into a byte matcher.
    #[error("Pattern compilation failed: {0}")]
    Regex(#[from] regex::Error),

    /// An error from the `ignore` crate, which is used for directory traversal.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// An exclusion pattern that is not a valid glob.
    #[error("Invalid exclude pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// An error related to persisting a temporary file.
    #[error("Tempfile error: {0}")]
    TempFile(#[from] tempfile::PersistError),

    /// The confirmation prompt could not read an answer.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// A before/after phrase that cannot be used.
    #[error("Invalid phrase: {0}")]
    InvalidPhrase(String),

    /// Discovery found no eligible file under any target directory.
    #[error("no target files")]
    NoTargetFiles,

    /// An error that occurred while reading or writing a single file.
    #[error("File processing failed for {path}: {source}")]
    Processing {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A rename whose destination is already taken.
    #[error("cannot rename {from} to {to}: destination already exists")]
    RenameCollision { from: PathBuf, to: PathBuf },

    /// The OS refused a rename.
    #[error("cannot rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// A convenient type alias for `Result<T, reword::errors::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an I/O error with the path of the file being processed.
    pub fn processing(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Processing {
            path: path.into(),
            source,
        }
    }
}
