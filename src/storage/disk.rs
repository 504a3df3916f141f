use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::Path,
    sync::{Arc, Mutex},
};

use crate::storage::{
    errors::{StorageError, StorageResult},
    file::{next_file_id, FileHandle, FileId, PageFile},
    page::{Page, PageId, PAGE_SIZE},
};

/// Page file backed by an ordinary file on disk. Page `n` lives at byte
/// offset `n * PAGE_SIZE`. Disposed page numbers go on a free list and are
/// handed out again before the file is grown.
#[derive(Debug)]
pub struct DiskFile {
    id: FileId,
    file: File,
    next_page_no: u64,
    free_pages: Vec<PageId>,
}

impl DiskFile {
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;

        let size = file.metadata()?.len();
        let next_page_no = size / PAGE_SIZE as u64;

        Ok(Self {
            id: next_file_id(),
            file,
            next_page_no,
            free_pages: Vec::new(),
        })
    }

    pub fn into_handle(self) -> FileHandle {
        Arc::new(Mutex::new(self))
    }
}

impl PageFile for DiskFile {
    fn id(&self) -> FileId {
        self.id
    }

    fn read_page(&mut self, page_no: PageId, page: &mut Page) -> StorageResult<()> {
        if page_no.0 >= self.next_page_no {
            return Err(StorageError::PageNotFound { page_no: page_no.0 });
        }

        let offset = page_no.0 * PAGE_SIZE as u64;
        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|e| StorageError::Io {
                message: e.to_string(),
            })?;
        self.file
            .read_exact(&mut page.data)
            .map_err(|e| StorageError::Io {
                message: e.to_string(),
            })?;

        Ok(())
    }

    fn write_page(&mut self, page_no: PageId, page: &Page) -> StorageResult<()> {
        let offset = page_no.0 * PAGE_SIZE as u64;
        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|e| StorageError::Io {
                message: e.to_string(),
            })?;
        self.file
            .write_all(&page.data)
            .map_err(|e| StorageError::Io {
                message: e.to_string(),
            })?;

        Ok(())
    }

    fn allocate_page(&mut self) -> StorageResult<PageId> {
        if let Some(page_no) = self.free_pages.pop() {
            return Ok(page_no);
        }

        let page_no = PageId(self.next_page_no);
        self.next_page_no += 1;

        // Extend the file now so the slot is readable before first write.
        let offset = page_no.0 * PAGE_SIZE as u64;
        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|e| StorageError::Io {
                message: e.to_string(),
            })?;
        self.file
            .write_all(&[0u8; PAGE_SIZE])
            .map_err(|e| StorageError::Io {
                message: e.to_string(),
            })?;

        Ok(page_no)
    }

    fn dispose_page(&mut self, page_no: PageId) -> StorageResult<()> {
        self.free_pages.push(page_no);
        Ok(())
    }
}
