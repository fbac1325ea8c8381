//! XML serialization of document trees.

use quick_xml::escape::partial_escape;

use crate::dom::Node;

/// Render a document tree as a single-line XML string.
///
/// Each node becomes an element named by its tag, with no attributes and no
/// XML declaration. Node text is trimmed of surrounding whitespace; if
/// nothing remains it is omitted. Text content escapes `&`, `<`, and `>`
/// per standard XML text rules. An element with no text and no children
/// renders self-closing.
///
/// # Examples
///
/// ```
/// use butterxml::{Node, Tag, to_xml};
///
/// let mut root = Node::new(Tag::Root);
/// root.add_child(Node::with_text(Tag::P, "  Hi  "));
/// assert_eq!(to_xml(&root), "<root><p>Hi</p></root>");
/// ```
pub fn to_xml(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    let tag = node.tag.as_str();
    let text = node.text.trim();

    if text.is_empty() && node.children.is_empty() {
        out.push('<');
        out.push_str(tag);
        out.push_str("/>");
        return;
    }

    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(&partial_escape(text));
    for child in &node.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
