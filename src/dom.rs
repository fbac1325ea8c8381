//! Document tree types.

/// Kind of a document node.
///
/// The tag set is closed: every node the builder or expander produces is one
/// of these, and the XML serializer emits the element name from [`Tag::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Root document node.
    Root,
    /// Paragraph leaf carrying expanded or verbatim text.
    P,
    /// Top-level structural node.
    Section,
    /// Second-level structural node.
    Subsection,
    /// Third-level structural node.
    Subsubsection,
    /// Deferred file inclusion; `text` holds the raw loaded content until
    /// the expander builds a subtree from it.
    Include,
}

impl Tag {
    /// The XML element name for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Root => "root",
            Tag::P => "p",
            Tag::Section => "section",
            Tag::Subsection => "subsection",
            Tag::Subsubsection => "subsubsection",
            Tag::Include => "include",
        }
    }

    /// Map a command name to a structural tag, if it is one.
    pub fn structural(name: &str) -> Option<Tag> {
        match name {
            "section" => Some(Tag::Section),
            "subsection" => Some(Tag::Subsection),
            "subsubsection" => Some(Tag::Subsubsection),
            _ => None,
        }
    }
}

/// A node in the document tree.
///
/// Each node exclusively owns its children; the tree is acyclic and
/// single-rooted. `text` is the paragraph body for [`Tag::P`], the raw
/// content for [`Tag::Include`], and the title for structural nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: Tag,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty node with the given tag.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Create a node with text content.
    pub fn with_text(tag: Tag, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Append a child node, preserving document order.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }
}
