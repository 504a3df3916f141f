use std::fmt;

#[derive(Debug)]
pub enum StorageError {
    PageNotFound { page_no: u64 },

    OutOfSpace,

    Io { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::PageNotFound { page_no } => {
                write!(f, "storage error: page {} not found", page_no)
            }

            StorageError::OutOfSpace => {
                write!(f, "storage error: no space for a new page")
            }

            StorageError::Io { message } => {
                write!(f, "storage IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

pub type StorageResult<T> = Result<T, StorageError>;
