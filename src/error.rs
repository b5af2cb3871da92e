use thiserror::Error;

pub type SplitResult<T> = Result<T, SplitError>;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Invalid sheet name: {0}")]
    SheetName(String),
}
