pub const PAGE_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub u64);

/// A fixed-size page buffer. Content is opaque to the cache layer.
#[derive(Debug, Clone)]
pub struct Page {
    pub data: [u8; PAGE_SIZE],
}

impl Page {
    pub fn zeroed() -> Self {
        Self {
            data: [0u8; PAGE_SIZE],
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::zeroed()
    }
}
