//! Per-frame rendering statistics
//!
//! Pure observability: the counters never influence control flow. Write
//! access is restricted to the renderer's Begin/Push/End sequence; consumers
//! read a copy via [`crate::render::Renderer::stats`].

/// Counters for the most recently completed batch frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStatistics {
    /// Vertices accumulated during the frame
    pub vertices_count: u64,
    /// Indices accumulated during the frame
    pub indices_count: u64,
    /// Indexed draw calls issued at flush
    pub draw_calls: u32,
    /// Wall-clock time between Begin and End in nanoseconds, always >= 1
    pub time_spent: u64,
}

impl FrameStatistics {
    /// Zero the accumulation counters at frame Begin.
    ///
    /// `time_spent` keeps the previous frame's value until the new frame is
    /// finalized, so readers polling mid-frame never observe a zero duration.
    pub(crate) fn reset_counters(&mut self) {
        self.vertices_count = 0;
        self.indices_count = 0;
        self.draw_calls = 0;
    }
}
