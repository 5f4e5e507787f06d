use log::{debug, error, trace};

use crate::tools::freq_count::freqs;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Most nodes a tree can hold: 256 leaves plus 255 merges.
pub const MAX_NODES: usize = 511;

/// Index of a node in the tree arena. Always below MAX_NODES.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIdx(u16);

impl NodeIdx {
    /// Wrap an arena index. Panics if the index could not belong to a huffman tree.
    pub fn new(idx: usize) -> Self {
        assert!(
            idx < MAX_NODES,
            "node index {} is outside the {} node arena",
            idx,
            MAX_NODES
        );
        NodeIdx(idx as u16)
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

/// One vertex of the tree. Children are indexes into the same arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub left: Option<NodeIdx>,
    pub right: Option<NodeIdx>,
    /// Byte value, only meaningful for leaves
    pub value: u8,
}

impl Node {
    /// Create a new leaf
    pub fn leaf(value: u8) -> Node {
        Node {
            left: None,
            right: None,
            value,
        }
    }

    /// Create a new internal node
    pub fn internal(left: Option<NodeIdx>, right: Option<NodeIdx>) -> Node {
        Node {
            left,
            right,
            value: 0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The child taken for a bit: true goes right, false goes left.
    pub fn child(&self, go_right: bool) -> Option<NodeIdx> {
        if go_right {
            self.right
        } else {
            self.left
        }
    }
}

/// Huffman tree stored as a flat arena. The root is always the last node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Build the tree for a frequency table (as returned by freq_count).
    pub fn from_freqs(freqs: &[usize; 256]) -> Tree {
        // Leaves go in first, in byte order. Counts are only needed while we build, so they live
        // in their own vec that runs parallel to the nodes.
        let mut nodes: Vec<Node> = Vec::with_capacity(MAX_NODES);
        let mut counts: Vec<usize> = Vec::with_capacity(MAX_NODES);
        for (byte, &count) in freqs.iter().enumerate() {
            if count > 0 {
                nodes.push(Node::leaf(byte as u8));
                counts.push(count);
            }
        }
        debug!("Building huffman tree from {} distinct bytes.", nodes.len());

        // 0 and 1 symbols are trivial cases that the merge loop does not handle.
        match nodes.len() {
            0 => {
                return Tree {
                    nodes: vec![Node::leaf(0)],
                }
            }
            1 => {
                // The lone symbol hangs off the right side so its code is a single 1 bit.
                nodes.push(Node::internal(None, Some(NodeIdx::new(0))));
                return Tree { nodes };
            }
            _ => {}
        }

        // Min-queue on (count, index). Equal counts pop the lower (older) index first, which
        // keeps the tree shape stable from run to run.
        let mut queue: BinaryHeap<Reverse<(usize, NodeIdx)>> = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| Reverse((count, NodeIdx::new(i))))
            .collect();

        loop {
            let Some(Reverse((left_count, left))) = queue.pop() else {
                break;
            };
            // A lone survivor is the last node we made, i.e. the root.
            let Some(Reverse((right_count, right))) = queue.pop() else {
                debug_assert_eq!(left.get(), nodes.len() - 1);
                break;
            };
            let weight = left_count + right_count;
            nodes.push(Node::internal(Some(left), Some(right)));
            counts.push(weight);
            let idx = NodeIdx::new(nodes.len() - 1);
            trace!(
                "Merged {} ({}) and {} ({}) into {} ({})",
                left.get(),
                left_count,
                right.get(),
                right_count,
                idx.get(),
                weight
            );
            queue.push(Reverse((weight, idx)));
        }

        debug!("Huffman tree has {} nodes.", nodes.len());
        Tree { nodes }
    }

    /// Count the bytes of the input and build the tree.
    pub fn from_bytes(data: &[u8]) -> Tree {
        Tree::from_freqs(&freqs(data))
    }

    /// Adopt a node arena built elsewhere (eg. rebuilt from a caller's own storage format).
    /// Panics if the arena breaks the tree invariants: non-empty, at most MAX_NODES, and every
    /// child pointing at a lower index than its parent.
    pub fn from_nodes(nodes: Vec<Node>) -> Tree {
        assert!(!nodes.is_empty(), "a huffman tree needs at least one node");
        assert!(
            nodes.len() <= MAX_NODES,
            "{} nodes is more than a huffman tree can hold",
            nodes.len()
        );
        for (i, node) in nodes.iter().enumerate() {
            for child in [node.left, node.right].into_iter().flatten() {
                if child.get() >= i {
                    error!("Node {} points forward to node {}.", i, child.get());
                    panic!("node {} has a child that was not built before it", i);
                }
            }
        }
        Tree { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn root_index(&self) -> NodeIdx {
        NodeIdx::new(self.nodes.len() - 1)
    }

    pub fn root(&self) -> &Node {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.get()]
    }
}

#[cfg(test)]
mod test {
    use super::{Node, NodeIdx, Tree, MAX_NODES};

    #[test]
    fn empty_input_test() {
        let tree = Tree::from_bytes(&[]);
        assert_eq!(tree.nodes(), &[Node::leaf(0)]);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.root_index().get(), 0);
    }

    #[test]
    fn single_symbol_test() {
        let tree = Tree::from_bytes(&[65, 65, 65]);
        assert_eq!(tree.nodes().len(), 2);
        assert_eq!(tree.nodes()[0], Node::leaf(65));
        let root = tree.root();
        assert!(!root.is_leaf());
        assert_eq!(root.left, None);
        assert_eq!(root.right, Some(NodeIdx::new(0)));
    }

    #[test]
    fn skewed_pair_test() {
        // b (count 1) pops first and goes left, a (count 4) goes right
        let tree = Tree::from_bytes("aaaab".as_bytes());
        assert_eq!(tree.nodes().len(), 3);
        assert_eq!(tree.nodes()[0], Node::leaf(b'a'));
        assert_eq!(tree.nodes()[1], Node::leaf(b'b'));
        assert_eq!(
            tree.nodes()[2],
            Node::internal(Some(NodeIdx::new(1)), Some(NodeIdx::new(0)))
        );
    }

    #[test]
    fn tie_break_test() {
        // All counts equal: the oldest nodes merge first.
        let tree = Tree::from_bytes("aabbcc".as_bytes());
        let n = |i| Some(NodeIdx::new(i));
        assert_eq!(
            tree.nodes(),
            &[
                Node::leaf(b'a'),
                Node::leaf(b'b'),
                Node::leaf(b'c'),
                Node::internal(n(0), n(1)),
                Node::internal(n(2), n(3)),
            ]
        );
    }

    #[test]
    fn full_alphabet_test() {
        let data: Vec<u8> = (0..=255).collect();
        let tree = Tree::from_bytes(&data);
        assert_eq!(tree.nodes().len(), MAX_NODES);
        assert_eq!(tree.nodes().iter().filter(|n| n.is_leaf()).count(), 256);
        // every internal node has both children
        assert!(tree
            .nodes()
            .iter()
            .filter(|n| !n.is_leaf())
            .all(|n| n.left.is_some() && n.right.is_some()));
    }

    #[test]
    fn deterministic_test() {
        let data = "the quick brown fox jumps over the lazy dog".as_bytes();
        assert_eq!(Tree::from_bytes(data), Tree::from_bytes(data));
    }

    #[test]
    fn from_nodes_test() {
        let built = Tree::from_bytes("abcabd".as_bytes());
        let adopted = Tree::from_nodes(built.nodes().to_vec());
        assert_eq!(built, adopted);
    }

    #[test]
    #[should_panic]
    fn from_nodes_forward_child_test() {
        Tree::from_nodes(vec![Node::internal(Some(NodeIdx::new(1)), None), Node::leaf(3)]);
    }

    #[test]
    #[should_panic]
    fn index_bound_test() {
        NodeIdx::new(MAX_NODES);
    }

    #[test]
    #[should_panic(expected = "more than a huffman tree can hold")]
    fn from_nodes_too_many_test() {
        // leaves only, so the size check is the one that trips
        Tree::from_nodes(vec![Node::leaf(1); MAX_NODES + 1]);
    }
}
