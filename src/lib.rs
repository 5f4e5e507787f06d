//! Byte oriented Huffman compression.
//!
//! Version 0.1.0
//!
//! Builds a prefix-free code from the byte frequencies of the input, and keeps the code tree and the
//! packed bitstream together in one in-memory value (`Encoded`). Decoding walks the bitstream back
//! through the same tree to restore the exact input bytes.
//!
//! Compression happens in the following steps:
//! - Frequency count: Count how often each of the 256 byte values occurs.
//! - Tree build: Merge the two least frequent nodes until one root remains.
//! - Code table: Walk the tree once to record the path to every leaf.
//! - Bit packing: Concatenate the path of each input byte, in order.
//!
//! Basic usage:
//!
//! ```
//! let encoded = huffpack::encode("abracadabra");
//! assert_eq!(huffpack::decode(&encoded), b"abracadabra");
//! ```
//!
//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

pub mod bitstream;
pub mod compression;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::Encoded;
pub use huffman_coding::huffman::{Node, NodeIdx, Tree, MAX_NODES};
pub use tools::options::HuffOpts;

/// Encode any byte source (slice, Vec, &str, String) with default options.
pub fn encode<T: AsRef<[u8]>>(data: T) -> Encoded {
    Encoded::encode(data)
}

/// Restore the original bytes from an `Encoded` value.
pub fn decode(encoded: &Encoded) -> Vec<u8> {
    encoded.decode()
}
