//! The bitstream module packs and unpacks the huffman coded bits.
//!
//! Codes are written most significant bit first, in the order the tree is descended from the root.
//! The packer pads the final byte with zeros; the reader is told the exact bit length so the
//! padding is never decoded.
//!
pub mod bitpacker;
pub mod bitreader;
