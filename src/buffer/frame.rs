use crate::storage::{
    file::{FileHandle, FileId},
    page::PageId,
};

pub type FrameId = usize;

/// Bookkeeping for one pool slot. The descriptor never moves; `frame_no`
/// always equals its index in the frame table, which is also the index of
/// its page buffer in the pool.
pub struct FrameDesc {
    pub frame_no: FrameId,
    pub file: Option<FileHandle>,
    pub file_id: FileId,
    pub page_no: PageId,
    pub valid: bool,
    pub pin_count: usize,
    pub dirty: bool,
    pub refbit: bool,
}

impl FrameDesc {
    pub fn new(frame_no: FrameId) -> Self {
        Self {
            frame_no,
            file: None,
            file_id: FileId(0),
            page_no: PageId(0),
            valid: false,
            pin_count: 0,
            dirty: false,
            refbit: false,
        }
    }

    /// Called right after a page lands in this frame's pool slot. The new
    /// resident starts pinned once and referenced.
    pub fn set(&mut self, file: FileHandle, file_id: FileId, page_no: PageId) {
        self.file = Some(file);
        self.file_id = file_id;
        self.page_no = page_no;
        self.valid = true;
        self.pin_count = 1;
        self.dirty = false;
        self.refbit = true;
    }

    pub fn clear(&mut self) {
        self.file = None;
        self.file_id = FileId(0);
        self.page_no = PageId(0);
        self.valid = false;
        self.pin_count = 0;
        self.dirty = false;
        self.refbit = false;
    }
}
