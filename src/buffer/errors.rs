use std::fmt;

use crate::storage::errors::StorageError;

#[derive(Debug)]
pub enum BufferError {
    PageNotFound { file_id: u64, page_no: u64 },

    DuplicateEntry { file_id: u64, page_no: u64 },

    BufferExceeded,

    PageNotPinned { file_id: u64, page_no: u64 },

    PagePinned { file_id: u64, page_no: u64 },

    BadBuffer { frame_no: usize },

    Storage(StorageError),
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::PageNotFound { file_id, page_no } => {
                write!(
                    f,
                    "buffer error: page {} of file {} is not resident",
                    page_no, file_id
                )
            }

            BufferError::DuplicateEntry { file_id, page_no } => {
                write!(
                    f,
                    "buffer error: page {} of file {} already has a directory entry",
                    page_no, file_id
                )
            }

            BufferError::BufferExceeded => {
                write!(f, "buffer error: every frame is pinned")
            }

            BufferError::PageNotPinned { file_id, page_no } => {
                write!(
                    f,
                    "buffer error: page {} of file {} is not pinned",
                    page_no, file_id
                )
            }

            BufferError::PagePinned { file_id, page_no } => {
                write!(
                    f,
                    "buffer error: page {} of file {} is still pinned",
                    page_no, file_id
                )
            }

            BufferError::BadBuffer { frame_no } => {
                write!(
                    f,
                    "buffer error: frame {} is inconsistent with the directory",
                    frame_no
                )
            }

            BufferError::Storage(err) => {
                write!(f, "buffer error: {}", err)
            }
        }
    }
}

impl std::error::Error for BufferError {}

impl From<StorageError> for BufferError {
    fn from(err: StorageError) -> Self {
        BufferError::Storage(err)
    }
}

pub type BufferResult<T> = Result<T, BufferError>;
