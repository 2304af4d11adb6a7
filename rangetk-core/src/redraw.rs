//! Redraw flags for the embedding renderer.
//!
//! Drag operations return a [Redraw] set describing which parts of the
//! slider visual are stale. An empty set means the operation was a no-op
//! and nothing needs repainting.

use bitflags::bitflags;

bitflags! {
    /// What the embedding renderer must repaint after a slider mutation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Redraw: u8 {
        /// The filled track segment between the thumbs.
        const TRACK = 1 << 0;
        /// The lower thumb.
        const LOWER_THUMB = 1 << 1;
        /// The upper thumb.
        const UPPER_THUMB = 1 << 2;
    }
}
