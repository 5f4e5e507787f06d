//! Turns a huffman tree into a lookup table of bit paths, one per leaf.
//!
//! Each path is read from the root down: false means "take the left child", true means
//! "take the right child". The table is only needed while encoding; decoding walks the tree.

use super::huffman::{NodeIdx, Tree};

/// Bit path from the root to the leaf of every byte value present in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Vec<bool>>; 256],
}

impl CodeTable {
    /// Walk the tree once and record the path to every leaf.
    pub fn new(tree: &Tree) -> Self {
        let mut table = CodeTable {
            codes: std::array::from_fn(|_| None),
        };
        // One path buffer for the whole walk. Depth can never exceed the leaf count.
        let mut path = Vec::with_capacity(256);
        table.walk(tree, Some(tree.root_index()), &mut path);
        table
    }

    /// Recursively walk the tree, growing and shrinking the path as we go down and back up.
    fn walk(&mut self, tree: &Tree, idx: Option<NodeIdx>, path: &mut Vec<bool>) {
        // Missing child (single symbol trees only). Nothing to record.
        let Some(idx) = idx else {
            return;
        };
        let node = tree.node(idx);
        if node.is_leaf() {
            self.codes[node.value as usize] = Some(path.clone());
            return;
        }
        path.push(false);
        self.walk(tree, node.left, path);
        path.pop();
        path.push(true);
        self.walk(tree, node.right, path);
        path.pop();
    }

    /// Path for a byte value, or None if the byte was not in the input.
    pub fn get(&self, byte: u8) -> Option<&[bool]> {
        self.codes[byte as usize].as_deref()
    }

    /// Code length in bits. Zero for bytes that have no code.
    pub fn code_len(&self, byte: u8) -> usize {
        self.get(byte).map_or(0, |path| path.len())
    }

    /// All (byte, path) entries in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(byte, code)| code.as_deref().map(|path| (byte as u8, path)))
    }

    /// Number of bytes with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::CodeTable;
    use crate::huffman_coding::huffman::Tree;

    fn table_for(data: &[u8]) -> CodeTable {
        CodeTable::new(&Tree::from_bytes(data))
    }

    #[test]
    fn empty_input_test() {
        // The lone leaf of an empty tree is byte 0 with an empty path
        let table = table_for(&[]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0), Some(&[][..]));
    }

    #[test]
    fn single_symbol_test() {
        let table = table_for("aaaa".as_bytes());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(b'a'), Some(&[true][..]));
        assert_eq!(table.get(b'b'), None);
        assert_eq!(table.code_len(b'b'), 0);
    }

    #[test]
    fn tied_codes_test() {
        let table = table_for("aabbcc".as_bytes());
        assert_eq!(table.get(b'c'), Some(&[false][..]));
        assert_eq!(table.get(b'a'), Some(&[true, false][..]));
        assert_eq!(table.get(b'b'), Some(&[true, true][..]));
    }

    #[test]
    fn prefix_free_test() {
        let mut data: Vec<u8> = (0..=255).collect();
        // skew the distribution a little so the code lengths vary
        data.extend(std::iter::repeat(b'e').take(300));
        data.extend(std::iter::repeat(b't').take(120));
        let table = table_for(&data);
        assert_eq!(table.len(), 256);
        let codes: Vec<&[bool]> = table.iter().map(|(_, path)| path).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "code {} is a prefix of code {}", i, j);
                }
            }
        }
        assert!(table.code_len(b'e') < table.code_len(b'q'));
    }
}
