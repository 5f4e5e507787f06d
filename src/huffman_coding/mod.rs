//! The huffman module builds the prefix code used by the compressor.
//!
//! The tree is kept as a flat arena of nodes that point at their children by index. Leaves are
//! added first (one per byte value that occurs in the input), then every merge appends one internal
//! node, so the root always ends up as the last node. At most 256 leaves and 255 merges can exist.
//!
//! The code table is derived from the tree by a single depth-first walk and is used only while
//! encoding. Decoding follows the tree directly.
//!

pub mod code_table;
pub mod huffman;
