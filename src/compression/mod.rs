//! The compression module ties the stages together into the `Encoded` value.
//!
//! Encoding happens in the following steps:
//! - Frequency count: Tally the 256 byte values.
//! - Huffman tree: Merge the least frequent nodes until only the root is left.
//! - Code table: Record the root-to-leaf path of every byte value in the tree.
//! - Bit packing: Size the output exactly, then append the path of every input byte, in order.
//!
//! Decoding is the inverse. Starting at the root, each bit picks the left (0) or right (1) child.
//! Reaching a leaf emits its byte and jumps back to the root.
//!
//! The `Encoded` value is never modified after it is built, so any number of threads may decode
//! the same value at once.
//!

pub mod compress;
pub mod decompress;
