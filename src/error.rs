use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("malformed edge key {0:?}, expected `from-to`")]
    MalformedKey(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("edge table: {0}")]
    Table(#[from] TableError),
}
