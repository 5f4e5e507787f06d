//! The tools module provides the helper stages used ahead of the huffman tree build.
//!
//! The tools are:
//! - freq_count: Frequency count of the 256 byte values.
//! - options: Tuning knobs for the parallel paths.
//!
pub mod freq_count;
pub mod options;
