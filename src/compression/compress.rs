use log::{error, info, trace};
use rayon::prelude::*;

use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::BitReader;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::huffman::{Node, NodeIdx, Tree};
use crate::tools::freq_count::freqs_with;
use crate::tools::options::HuffOpts;

/// Compressed data: the code tree plus the packed bitstream it was used to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    tree: Tree,
    packed: Vec<u8>,
    bit_len: usize,
}

impl Encoded {
    /// Encode a byte source (slice, Vec, &str, String) with default options.
    pub fn encode<T: AsRef<[u8]>>(data: T) -> Self {
        Self::encode_with(data, &HuffOpts::default())
    }

    /// Encode a byte source. The options only decide when to go parallel, the result is the same.
    pub fn encode_with<T: AsRef<[u8]>>(data: T, opts: &HuffOpts) -> Self {
        let data = data.as_ref();

        // Build the tree, then the table of paths we will write for each byte
        let tree = Tree::from_freqs(&freqs_with(data, opts));
        let table = CodeTable::new(&tree);
        trace!("Code table holds {} symbols.", table.len());

        // Size the output exactly before writing anything
        let bit_len = total_bits(data, &table, opts);
        let mut bp = BitPacker::new(bit_len);

        // Now write each byte's path, in input order
        for &byte in data {
            match table.get(byte) {
                Some(path) => bp.out_bits(path),
                None => {
                    error!("No code for byte {} at {}.", byte, bp.loc());
                    panic!("byte {} was not counted when the tree was built", byte);
                }
            }
        }
        bp.flush();
        assert_eq!(
            bp.bit_count(),
            bit_len,
            "bitstream length does not match the code table"
        );

        info!(
            "Encoded {} bytes into {} bits using {} nodes.",
            data.len(),
            bit_len,
            tree.nodes().len()
        );

        Encoded {
            tree,
            packed: bp.output,
            bit_len,
        }
    }

    /// Reassemble an encoded value from its parts, eg. after a caller has stored them somewhere.
    /// Panics if the packed buffer is too short for bit_len.
    pub fn from_parts(tree: Tree, packed: Vec<u8>, bit_len: usize) -> Self {
        assert!(
            bit_len <= packed.len() * 8,
            "{} bits do not fit in {} packed bytes",
            bit_len,
            packed.len()
        );
        Encoded {
            tree,
            packed,
            bit_len,
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn nodes(&self) -> &[Node] {
        self.tree.nodes()
    }

    pub fn root_index(&self) -> NodeIdx {
        self.tree.root_index()
    }

    /// Length of the bitstream in bits (padding excluded).
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// The bitstream packed MSB first, last byte zero padded.
    pub fn packed(&self) -> &[u8] {
        &self.packed
    }

    /// Iterate over the bitstream, true for a 1 bit.
    pub fn bits(&self) -> BitReader<'_> {
        BitReader::new(&self.packed, self.bit_len)
    }

    /// True when there are no bits, ie. the input was empty.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }
}

/// Sum of the code lengths of every byte of the input. Order does not matter, so big inputs
/// are summed in parallel chunks.
fn total_bits(data: &[u8], table: &CodeTable, opts: &HuffOpts) -> usize {
    if opts.use_parallel(data.len()) {
        data.par_chunks(opts.chunk_size)
            .map(|chunk| chunk.iter().map(|&b| table.code_len(b)).sum::<usize>())
            .sum()
    } else {
        data.iter().map(|&b| table.code_len(b)).sum()
    }
}

impl Default for Encoded {
    fn default() -> Self {
        Self::encode(b"")
    }
}

impl From<&[u8]> for Encoded {
    fn from(data: &[u8]) -> Self {
        Self::encode(data)
    }
}

impl From<&str> for Encoded {
    fn from(text: &str) -> Self {
        Self::encode(text)
    }
}
