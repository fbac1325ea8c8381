//! # butterxml
//!
//! A converter for a LaTeX-like markup into compact, single-line XML.
//!
//! The input language has commands (`\name{arg}...`), variable references
//! (`${name}`), parametrized macro calls (`${name}[a,b]`), `#`-prefixed
//! directives (`\#comment{...}`, `\#include{path}`), and balanced-brace
//! grouping with the escapes `\\ \{ \} \# \$` inside groups.
//!
//! Processing is a pure, synchronous three-step pipeline: build a document
//! tree, expand it in place (paragraph re-expansion and deferred file
//! inclusion), then serialize. Every malformed construct is recovered
//! in-document: an undefined macro echoes its raw call, and a missing
//! include renders as a message. The only fatal failure is an unreadable
//! input file, which the CLI owns.
//!
//! ## Quick Start
//!
//! ```
//! use butterxml::Parser;
//!
//! let mut parser = Parser::new();
//! parser.define_variable("name", "Alice");
//! parser.define_macro("greet", Some(1), "Hello, #1!");
//!
//! let xml = parser.process(r"\section{Intro}\greet{${name}}");
//! assert_eq!(
//!     xml,
//!     "<root><section>Intro<p>Hello, Alice!</p></section></root>"
//! );
//! ```
//!
//! ## Working with the tree
//!
//! The build and expand steps are also available separately when the tree
//! itself is of interest:
//!
//! ```
//! use butterxml::{Parser, Tag, to_xml};
//!
//! let parser = Parser::new();
//! let mut root = parser.build(r"\section{S1}\subsection{S2}text");
//! parser.expand(&mut root);
//!
//! assert_eq!(root.children[0].tag, Tag::Section);
//! assert_eq!(
//!     to_xml(&root),
//!     "<root><section>S1<subsection>S2<p>text</p></subsection></section></root>"
//! );
//! ```

pub mod builder;
pub mod dom;
pub mod error;
mod expand;
pub mod loader;
pub mod macros;
pub mod scanner;
pub mod xml;

pub use builder::Parser;
pub use dom::{Node, Tag};
pub use error::{Error, Result};
pub use loader::{ContentLoader, FsLoader, MemoryLoader};
pub use macros::MacroTable;
pub use xml::to_xml;
