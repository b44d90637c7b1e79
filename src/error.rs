use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A node violated a rendering invariant
    #[error("structural error: {0}")]
    Structural(String),

    /// A leaf node carried a tag outside the supported set
    #[error("unsupported tag: {0}")]
    UnsupportedTag(String),

    /// The document contains no level-1 heading
    #[error("no level-1 heading found")]
    TitleNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
