//! Post-parse tree expansion.

use crate::builder::Parser;
use crate::dom::{Node, Tag};

/// Cap on nested include resolution; past it a placeholder paragraph is
/// injected instead of recursing (a self-including file would otherwise
/// exhaust the stack).
const MAX_INCLUDE_DEPTH: usize = 16;

const DEPTH_MESSAGE: &str = "Include depth limit exceeded.";

impl Parser {
    /// Expand a built tree in place.
    ///
    /// Paragraph text is re-run through variable expansion (idempotent if
    /// already expanded). Each `include` node's raw content is parsed into a
    /// subtree which is appended to the include node's parent; the
    /// placeholder node is retained, not replaced. Appended subtrees are
    /// visited by the same walk, so nested includes resolve, bounded by a
    /// fixed depth limit. Structural-node titles are not expanded.
    pub fn expand(&self, root: &mut Node) {
        self.expand_node(root, 0);
    }

    fn expand_node(&self, node: &mut Node, include_depth: usize) {
        let mut i = 0;
        while i < node.children.len() {
            match node.children[i].tag {
                Tag::P => {
                    let expanded = self.macros().expand_variables(&node.children[i].text);
                    node.children[i].text = expanded;
                }
                Tag::Include => {
                    if include_depth >= MAX_INCLUDE_DEPTH {
                        node.add_child(Node::with_text(Tag::P, DEPTH_MESSAGE));
                    } else {
                        let subtree = self.build(&node.children[i].text);
                        node.add_child(subtree);
                    }
                }
                // A nested root only appears as an appended include subtree,
                // so descending into one is what deepens include nesting.
                Tag::Root => self.expand_node(&mut node.children[i], include_depth + 1),
                _ => self.expand_node(&mut node.children[i], include_depth),
            }
            i += 1;
        }
    }
}
