use log::{error, info};

use super::compress::Encoded;
use std::string::FromUtf8Error;

impl Encoded {
    /// Walk the bitstream through the tree and return the original bytes.
    pub fn decode(&self) -> Vec<u8> {
        let tree = self.tree();
        let root = tree.root_index();
        let mut output = Vec::new();

        // Start at the root. 1 goes right, 0 goes left. Every leaf we land on is one output byte.
        let mut node = root;
        let mut br = self.bits();
        while let Some(go_right) = br.bool_bit() {
            node = match tree.node(node).child(go_right) {
                Some(next) => next,
                None => {
                    error!(
                        "Node {} has no {} child, bitstream at {}.",
                        node.get(),
                        if go_right { "right" } else { "left" },
                        br.loc()
                    );
                    panic!("bitstream does not belong to this tree");
                }
            };
            let current = tree.node(node);
            if current.is_leaf() {
                output.push(current.value);
                node = root;
            }
        }

        info!(
            "Decoded {} bits into {} bytes.",
            self.bit_len(),
            output.len()
        );
        output
    }

    /// Decode and convert to a String, for data that was encoded from text.
    pub fn decode_to_string(&self) -> Result<String, FromUtf8Error> {
        String::from_utf8(self.decode())
    }
}
