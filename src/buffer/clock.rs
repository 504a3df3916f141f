use crate::{
    buffer::{
        directory::PageDirectory,
        errors::{BufferError, BufferResult},
        frame::{FrameDesc, FrameId},
    },
    db_debug, db_trace, db_warn,
    storage::page::Page,
};

/// Clock (second-chance) replacement. The only state it owns is the scan
/// cursor, which persists across calls; frame table, pool and directory are
/// borrowed from the pool for the duration of one allocation.
pub struct ClockReplacer {
    hand: FrameId,
}

impl ClockReplacer {
    pub fn new(frame_count: usize) -> Self {
        // The first advance wraps the hand to frame 0.
        Self {
            hand: frame_count.saturating_sub(1),
        }
    }

    /// Selects a frame for reuse, evicting its resident page if it holds
    /// one. The returned frame is cleared and ready to fill.
    pub fn allocate(
        &mut self,
        frames: &mut [FrameDesc],
        pool: &mut [Page],
        directory: &mut PageDirectory,
    ) -> BufferResult<FrameId> {
        let frame_count = frames.len();
        let mut selected = None;
        let mut scanned = 0;

        // Two revolutions: the first clears outstanding reference bits, the
        // second picks up any frame that became evictable. Failing both
        // means every frame is pinned.
        while scanned < 2 * frame_count {
            self.hand = (self.hand + 1) % frame_count;
            scanned += 1;

            let desc = &mut frames[self.hand];

            if !desc.valid {
                selected = Some(self.hand);
                break;
            }

            if desc.refbit {
                // Second chance.
                desc.refbit = false;
                continue;
            }

            if desc.pin_count == 0 {
                selected = Some(self.hand);
                break;
            }
        }

        let Some(frame_no) = selected else {
            db_warn!("clock", "no evictable frame after {} steps", 2 * frame_count);
            return Err(BufferError::BufferExceeded);
        };

        let desc = &mut frames[frame_no];
        if desc.valid {
            // Write-back comes before any directory or descriptor
            // mutation; a failed write leaves both intact.
            if desc.dirty {
                if let Some(file) = &desc.file {
                    db_debug!(
                        "clock",
                        "writing back page {} of file {} from frame {}",
                        desc.page_no.0,
                        desc.file_id.0,
                        frame_no
                    );
                    file.lock().unwrap().write_page(desc.page_no, &pool[frame_no])?;
                }
            }

            db_trace!(
                "clock",
                "evicting page {} of file {} from frame {}",
                desc.page_no.0,
                desc.file_id.0,
                frame_no
            );
            directory.remove(desc.file_id, desc.page_no)?;
        }

        frames[frame_no].clear();
        Ok(frame_no)
    }
}
