/// Inputs longer than this are counted and measured in parallel.
pub const PAR_THRESHOLD: usize = 64_000;
/// 16k is pretty much the sweet spot for chunk size.
pub const CHUNK_SIZE: usize = 16_000;

/// Tuning options for encoding. None of these change the encoded result, only how fast we get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffOpts {
    /// Inputs longer than this many bytes use rayon for the frequency count and the bit length sum
    pub par_threshold: usize,
    /// Size of each slice handed to a rayon worker
    pub chunk_size: usize,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            par_threshold: PAR_THRESHOLD,
            chunk_size: CHUNK_SIZE,
        }
    }

    /// Set the input length above which the parallel paths are used.
    pub fn with_par_threshold(mut self, threshold: usize) -> Self {
        self.par_threshold = threshold;
        self
    }

    /// Set the parallel chunk size. A size of 0 is bumped to 1.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }

    /// True when data of this length should take the parallel path.
    pub fn use_parallel(&self, len: usize) -> bool {
        len > self.par_threshold
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}
