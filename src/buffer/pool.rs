use std::sync::{Arc, Mutex};

use crate::{
    buffer::{
        clock::ClockReplacer,
        directory::PageDirectory,
        errors::{BufferError, BufferResult},
        frame::{FrameDesc, FrameId},
    },
    db_debug, db_error, db_trace, db_warn,
    storage::{
        file::FileHandle,
        page::{Page, PageId},
    },
};

pub type BufferPoolHandle = Arc<Mutex<BufferPool>>;

/// Fixed-size page cache between page-oriented clients and their backing
/// files. Write-back: modified pages are persisted on eviction, flush, or
/// teardown, never on every update.
///
/// Each pool is self-contained; any number of pools can coexist. Concurrent
/// clients share one through a [`BufferPoolHandle`], which serializes whole
/// operations, keeping pin accounting and eviction decisions atomic with
/// respect to each other.
pub struct BufferPool {
    pub(crate) frames: Vec<FrameDesc>,
    pub(crate) pool: Vec<Page>,
    pub(crate) directory: PageDirectory,
    replacer: ClockReplacer,
}

impl BufferPool {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frames: (0..frame_count).map(FrameDesc::new).collect(),
            pool: (0..frame_count).map(|_| Page::zeroed()).collect(),
            directory: PageDirectory::new(frame_count),
            replacer: ClockReplacer::new(frame_count),
        }
    }

    pub fn into_handle(self) -> BufferPoolHandle {
        Arc::new(Mutex::new(self))
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Pins the page and returns its buffer. A resident page costs no I/O;
    /// a miss claims a frame (possibly writing back a victim) and reads the
    /// page in. The buffer stays valid until the matching unpin.
    pub fn fetch_page(&mut self, file: &FileHandle, page_no: PageId) -> BufferResult<&mut Page> {
        let file_id = file.lock().unwrap().id();

        if let Some(frame_no) = self.directory.lookup(file_id, page_no) {
            let desc = &mut self.frames[frame_no];
            desc.refbit = true;
            desc.pin_count += 1;
            return Ok(&mut self.pool[frame_no]);
        }

        db_trace!(
            "bufpool",
            "page {} of file {} faulted in",
            page_no.0,
            file_id.0
        );
        let frame_no = self
            .replacer
            .allocate(&mut self.frames, &mut self.pool, &mut self.directory)?;

        file.lock()
            .unwrap()
            .read_page(page_no, &mut self.pool[frame_no])?;

        self.directory.insert(file_id, page_no, frame_no)?;
        self.frames[frame_no].set(file.clone(), file_id, page_no);

        Ok(&mut self.pool[frame_no])
    }

    /// Drops one pin. `mark_dirty` records that the caller modified the
    /// buffer. Unpinning a page that is not pinned fails without touching
    /// any state, the dirty flag included.
    pub fn unpin_page(
        &mut self,
        file: &FileHandle,
        page_no: PageId,
        mark_dirty: bool,
    ) -> BufferResult<()> {
        let file_id = file.lock().unwrap().id();

        let frame_no =
            self.directory
                .lookup(file_id, page_no)
                .ok_or(BufferError::PageNotFound {
                    file_id: file_id.0,
                    page_no: page_no.0,
                })?;

        let desc = &mut self.frames[frame_no];
        if desc.pin_count == 0 {
            return Err(BufferError::PageNotPinned {
                file_id: file_id.0,
                page_no: page_no.0,
            });
        }

        if mark_dirty {
            desc.dirty = true;
        }
        desc.pin_count -= 1;
        Ok(())
    }

    /// Allocates a new page in `file` and pins it in a fresh, zeroed frame.
    pub fn allocate_page(&mut self, file: &FileHandle) -> BufferResult<(PageId, &mut Page)> {
        let (file_id, page_no) = {
            let mut file_guard = file.lock().unwrap();
            (file_guard.id(), file_guard.allocate_page()?)
        };

        let frame_no = self
            .replacer
            .allocate(&mut self.frames, &mut self.pool, &mut self.directory)?;

        self.pool[frame_no] = Page::zeroed();
        self.directory.insert(file_id, page_no, frame_no)?;
        self.frames[frame_no].set(file.clone(), file_id, page_no);

        db_debug!(
            "bufpool",
            "page {} of file {} allocated into frame {}",
            page_no.0,
            file_id.0,
            frame_no
        );
        Ok((page_no, &mut self.pool[frame_no]))
    }

    /// Drops the page from the cache and reclaims its number in `file`.
    ///
    /// The frame is cleared even while pinned; outstanding references to
    /// the buffer are invalidated by contract.
    pub fn dispose_page(&mut self, file: &FileHandle, page_no: PageId) -> BufferResult<()> {
        let file_id = file.lock().unwrap().id();

        if let Some(frame_no) = self.directory.lookup(file_id, page_no) {
            if self.frames[frame_no].pin_count > 0 {
                db_warn!(
                    "bufpool",
                    "disposing page {} of file {} while pinned {} times",
                    page_no.0,
                    file_id.0,
                    self.frames[frame_no].pin_count
                );
            }

            self.frames[frame_no].clear();
            self.directory.remove(file_id, page_no)?;
        }

        file.lock().unwrap().dispose_page(page_no)?;
        Ok(())
    }

    /// Writes back and invalidates every resident page of `file`, in frame
    /// order. Stops at the first pinned page with `PagePinned`; frames
    /// handled before that point stay flushed.
    pub fn flush_file(&mut self, file: &FileHandle) -> BufferResult<()> {
        let file_id = file.lock().unwrap().id();
        db_debug!("bufpool", "flushing file {}", file_id.0);

        for frame_no in 0..self.frames.len() {
            let desc = &mut self.frames[frame_no];

            if desc.valid && desc.file_id == file_id {
                if desc.pin_count > 0 {
                    return Err(BufferError::PagePinned {
                        file_id: file_id.0,
                        page_no: desc.page_no.0,
                    });
                }

                if desc.dirty {
                    file.lock()
                        .unwrap()
                        .write_page(desc.page_no, &self.pool[frame_no])?;
                    desc.dirty = false;
                }

                let page_no = desc.page_no;
                desc.clear();
                self.directory.remove(file_id, page_no)?;
            } else if !desc.valid && desc.file.is_some() && desc.file_id == file_id {
                return Err(BufferError::BadBuffer { frame_no });
            }
        }

        Ok(())
    }

    /// Debug aid: one line per frame. Not a stable format.
    pub fn dump(&self) {
        eprintln!("buffer pool ({} frames):", self.frames.len());
        for (frame_no, desc) in self.frames.iter().enumerate() {
            let preview = String::from_utf8_lossy(&self.pool[frame_no].data[..16]);
            eprintln!(
                "  {}\tpin: {}\tvalid: {}\t{:?}",
                frame_no, desc.pin_count, desc.valid, preview
            );
        }
    }

    /// Frame currently holding the page, if resident.
    pub fn frame_of(&self, file: &FileHandle, page_no: PageId) -> Option<FrameId> {
        let file_id = file.lock().unwrap().id();
        self.directory.lookup(file_id, page_no)
    }

    pub fn pin_count(&self, file: &FileHandle, page_no: PageId) -> Option<usize> {
        self.frame_of(file, page_no)
            .map(|frame_no| self.frames[frame_no].pin_count)
    }
}

impl Drop for BufferPool {
    /// Last-resort durability pass: every valid-and-dirty frame is written
    /// out, pinned or not. Failures are logged; teardown cannot abort.
    fn drop(&mut self) {
        for frame_no in 0..self.frames.len() {
            let desc = &self.frames[frame_no];
            if !desc.valid || !desc.dirty {
                continue;
            }

            let Some(file) = &desc.file else { continue };
            if let Err(err) = file
                .lock()
                .unwrap()
                .write_page(desc.page_no, &self.pool[frame_no])
            {
                db_error!(
                    "bufpool",
                    "teardown write-back of page {} of file {} failed: {}",
                    desc.page_no.0,
                    desc.file_id.0,
                    err
                );
            }
        }
    }
}
