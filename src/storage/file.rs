use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

use crate::storage::{
    errors::StorageResult,
    page::{Page, PageId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(pub u64);

static NEXT_FILE_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique file identity, handed out at open time. Directory keys
/// are built from it, so two handles to the same open file must share one.
pub fn next_file_id() -> FileId {
    FileId(NEXT_FILE_ID.fetch_add(1, Ordering::Relaxed))
}

/// The capability contract the buffer pool consumes. The pool never opens,
/// closes, or otherwise owns the backing storage.
pub trait PageFile: Send + Sync {
    fn id(&self) -> FileId;
    fn read_page(&mut self, page_no: PageId, page: &mut Page) -> StorageResult<()>;
    fn write_page(&mut self, page_no: PageId, page: &Page) -> StorageResult<()>;
    fn allocate_page(&mut self) -> StorageResult<PageId>;
    fn dispose_page(&mut self, page_no: PageId) -> StorageResult<()>;
}

pub type FileHandle = Arc<Mutex<dyn PageFile>>;
