//! Document tree construction.

use memchr::memchr;

use crate::dom::{Node, Tag};
use crate::loader::{ContentLoader, FsLoader};
use crate::macros::MacroTable;
use crate::scanner::{next_command_pos, parse_braces, parse_command};

/// Parses markup into a document tree and expands it.
///
/// Holds the one piece of mutable state the transform needs, the
/// [`MacroTable`], together with the [`ContentLoader`] used to resolve
/// `\#include` references. Define variables and macros up front, then
/// [`build`](Parser::build), [`expand`](Parser::expand), and serialize, or
/// run all three with [`process`](Parser::process).
///
/// # Examples
///
/// ```
/// use butterxml::Parser;
///
/// let mut parser = Parser::new();
/// parser.define_macro("greet", Some(1), "Hello, #1!");
/// let xml = parser.process(r"\section{Intro}\greet{World}");
/// assert_eq!(
///     xml,
///     "<root><section>Intro<p>Hello, World!</p></section></root>"
/// );
/// ```
pub struct Parser {
    macros: MacroTable,
    loader: Box<dyn ContentLoader>,
}

impl Parser {
    /// Parser with an empty macro table, resolving includes against the
    /// current directory.
    pub fn new() -> Self {
        Self::with_loader(Box::new(FsLoader::default()))
    }

    /// Parser with a custom include loader.
    pub fn with_loader(loader: Box<dyn ContentLoader>) -> Self {
        Self {
            macros: MacroTable::new(),
            loader,
        }
    }

    /// See [`MacroTable::define_variable`].
    pub fn define_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.macros.define_variable(name, value);
    }

    /// See [`MacroTable::define_macro`].
    pub fn define_macro(
        &mut self,
        name: impl Into<String>,
        arity: Option<usize>,
        template: impl Into<String>,
    ) {
        self.macros.define_macro(name, arity, template);
    }

    /// The macro table backing this parser.
    pub fn macros(&self) -> &MacroTable {
        &self.macros
    }

    /// Build a raw document tree from `input`.
    ///
    /// Commands dispatch in order: `#`-prefixed directives, then defined
    /// macros (a macro may shadow a structural name), then
    /// `section`/`subsection`/`subsubsection`, then the verbatim-echo
    /// fallback for unrecognized names. Structural nodes never close: each
    /// one becomes the insertion point for everything that follows, so depth
    /// only grows through the document.
    ///
    /// Include content is loaded here but stored raw; expansion of it is
    /// deferred to [`expand`](Parser::expand).
    pub fn build(&self, input: &str) -> Node {
        let mut root = Node::new(Tag::Root);
        // Path of child indices from the root to the current insertion node.
        let mut path: Vec<usize> = Vec::new();
        let mut text = input.trim();

        while !text.is_empty() {
            if text.starts_with('\\') {
                if let Some((name, args, rest)) = parse_command(text) {
                    text = rest;

                    if let Some(directive) = name.strip_prefix('#') {
                        // #comment and unknown directives consume their
                        // arguments and produce nothing.
                        if directive == "include" {
                            if let Some(reference) = args.first() {
                                let content = self.load_include(reference);
                                node_at(&mut root, &path)
                                    .add_child(Node::with_text(Tag::Include, content));
                            }
                        }
                        continue;
                    }

                    if self.macros.contains_macro(&name) {
                        let expanded = self.macros.expand_macro(&name, &args);
                        node_at(&mut root, &path).add_child(Node::with_text(Tag::P, expanded));
                    } else if let Some(tag) = Tag::structural(&name) {
                        let title = args.into_iter().next().unwrap_or_default();
                        let parent = node_at(&mut root, &path);
                        parent.add_child(Node::with_text(tag, title));
                        path.push(parent.children.len() - 1);
                    } else {
                        let echo = format!("\\{name} {}", args.join(" "));
                        node_at(&mut root, &path).add_child(Node::with_text(Tag::P, echo));
                    }
                    continue;
                }
            }

            // Plain text: one brace-delimited block if a group opens before
            // the next command, otherwise everything that remains.
            let brace = memchr(b'{', text.as_bytes());
            let command = next_command_pos(text);
            let (block, rest) = match (brace, command) {
                (Some(b), c) if c.is_none_or(|c| b < c) => parse_braces(text),
                _ => (text.to_string(), ""),
            };
            text = rest;

            let expanded = self.macros.expand_variables(&block);
            node_at(&mut root, &path).add_child(Node::with_text(Tag::P, expanded));
        }

        root
    }

    /// Run the full pipeline over `input`: build, expand, serialize.
    pub fn process(&self, input: &str) -> String {
        let mut root = self.build(input);
        self.expand(&mut root);
        crate::xml::to_xml(&root)
    }

    /// Load include content, recovering a failed load as the in-document
    /// `File <reference> not found.` message.
    fn load_include(&self, reference: &str) -> String {
        match self.loader.load(reference) {
            Ok(content) => content,
            Err(_) => format!("File {reference} not found."),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk `path` down from `root` to the current insertion node.
fn node_at<'a>(root: &'a mut Node, path: &[usize]) -> &'a mut Node {
    let mut node = root;
    for &i in path {
        node = &mut node.children[i];
    }
    node
}
