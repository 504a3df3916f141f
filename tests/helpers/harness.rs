use std::path::Path;

use neon::buffer::pool::BufferPool;
use neon::storage::disk::DiskFile;
use neon::storage::file::FileHandle;
use neon::storage::page::PageId;

pub struct TestPool {
    pub pool: BufferPool,
    pub file: FileHandle,
    pub path: String,
}

impl TestPool {
    pub fn new(frames: usize) -> Self {
        let path = format!("/tmp/neon_test_{}.db", rand::random::<u64>());
        let file = DiskFile::open(Path::new(&path)).unwrap().into_handle();
        Self {
            pool: BufferPool::new(frames),
            file,
            path,
        }
    }

    /// Fresh pool and file handle over the same backing path. The old pool
    /// is dropped first so its teardown write-back lands on disk.
    pub fn reopen(self, frames: usize) -> Self {
        let path = self.path.clone();
        drop(self);

        let file = DiskFile::open(Path::new(&path)).unwrap().into_handle();
        Self {
            pool: BufferPool::new(frames),
            file,
            path,
        }
    }

    pub fn allocate(&mut self, value: u8) -> Result<PageId, anyhow::Error> {
        let (page_no, page) = self.pool.allocate_page(&self.file)?;
        page.data[0] = value;
        self.pool.unpin_page(&self.file, page_no, true)?;
        Ok(page_no)
    }

    pub fn write_byte(&mut self, page_no: PageId, value: u8) -> Result<(), anyhow::Error> {
        let page = self.pool.fetch_page(&self.file, page_no)?;
        page.data[0] = value;
        self.pool.unpin_page(&self.file, page_no, true)?;
        Ok(())
    }

    pub fn read_byte(&mut self, page_no: PageId) -> Result<u8, anyhow::Error> {
        let page = self.pool.fetch_page(&self.file, page_no)?;
        let value = page.data[0];
        self.pool.unpin_page(&self.file, page_no, false)?;
        Ok(value)
    }
}
