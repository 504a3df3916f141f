use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::storage::{
    errors::{StorageError, StorageResult},
    file::{next_file_id, FileHandle, FileId, PageFile},
    page::{Page, PageId},
};

/// In-memory page file. Stands in for real storage wherever the `PageFile`
/// contract is all that matters; the read/write counters let tests assert
/// exactly how often the cache went to its backing store.
pub struct MemFile {
    id: FileId,
    pages: HashMap<PageId, Page>,
    next_page_no: u64,
    free_pages: Vec<PageId>,
    max_pages: Option<usize>,

    pub reads: usize,
    pub writes: usize,
}

impl MemFile {
    pub fn new() -> Self {
        Self {
            id: next_file_id(),
            pages: HashMap::new(),
            next_page_no: 0,
            free_pages: Vec::new(),
            max_pages: None,
            reads: 0,
            writes: 0,
        }
    }

    /// Caps the number of live pages; `allocate_page` reports `OutOfSpace`
    /// beyond it.
    pub fn with_capacity(max_pages: usize) -> Self {
        Self {
            max_pages: Some(max_pages),
            ..Self::new()
        }
    }

    pub fn into_handle(self) -> FileHandle {
        Arc::new(Mutex::new(self))
    }
}

impl Default for MemFile {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFile for MemFile {
    fn id(&self) -> FileId {
        self.id
    }

    fn read_page(&mut self, page_no: PageId, page: &mut Page) -> StorageResult<()> {
        let stored = self
            .pages
            .get(&page_no)
            .ok_or(StorageError::PageNotFound { page_no: page_no.0 })?;

        page.data.copy_from_slice(&stored.data);
        self.reads += 1;
        Ok(())
    }

    fn write_page(&mut self, page_no: PageId, page: &Page) -> StorageResult<()> {
        let stored = self
            .pages
            .get_mut(&page_no)
            .ok_or(StorageError::PageNotFound { page_no: page_no.0 })?;

        stored.data.copy_from_slice(&page.data);
        self.writes += 1;
        Ok(())
    }

    fn allocate_page(&mut self) -> StorageResult<PageId> {
        if let Some(max) = self.max_pages {
            if self.pages.len() >= max {
                return Err(StorageError::OutOfSpace);
            }
        }

        let page_no = match self.free_pages.pop() {
            Some(p) => p,
            None => {
                let p = PageId(self.next_page_no);
                self.next_page_no += 1;
                p
            }
        };

        self.pages.insert(page_no, Page::zeroed());
        Ok(page_no)
    }

    fn dispose_page(&mut self, page_no: PageId) -> StorageResult<()> {
        if self.pages.remove(&page_no).is_some() {
            self.free_pages.push(page_no);
        }
        Ok(())
    }
}
