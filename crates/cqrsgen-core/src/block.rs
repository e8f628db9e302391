//! Composable text blocks
//!
//! A [`CodeBlock`] is a tree: literal text leaves and nested blocks, joined by a
//! separator and wrapped in a prefix/suffix. Blocks with [`Layout::Indented`] put
//! every item on its own line and indent it one level, so indentation follows from
//! nesting depth alone.
//!
//! ```
//! use cqrsgen_core::CodeBlock;
//!
//! let args = CodeBlock::new("(", ")", ", ").with_text("1").with_text("2");
//! assert_eq!(args.to_string(), "(1, 2)");
//!
//! let body = CodeBlock::braces().with_text("return 1;");
//! assert_eq!(body.to_string(), "{\n    return 1;\n}");
//! ```

use std::fmt;

/// One indentation level.
pub const INDENT: &str = "    ";

/// How the contents of a block are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `prefix + join(separator) + suffix`
    Inline,
    /// each item on its own indented line
    Indented,
}

/// A content node of a [`CodeBlock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Block(CodeBlock),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => f.write_str(text),
            Node::Block(block) => block.fmt(f),
        }
    }
}

/// Prefix/suffix/separator composition of text and nested blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    prefix: String,
    suffix: String,
    separator: String,
    layout: Layout,
    contents: Vec<Node>,
}

impl CodeBlock {
    /// An inline block.
    pub fn new(prefix: &str, suffix: &str, separator: &str) -> Self {
        Self::with_layout(prefix, suffix, separator, Layout::Inline)
    }

    /// A multiline block indenting its contents one level.
    pub fn indented(prefix: &str, suffix: &str, separator: &str) -> Self {
        Self::with_layout(prefix, suffix, separator, Layout::Indented)
    }

    /// An indented block delimited by `{` and `}`.
    pub fn braces() -> Self {
        Self::indented("{", "}", "")
    }

    /// A `/** ... */` doc comment, one line per content item.
    pub fn doc_comment() -> Self {
        Self::new("/**\n * ", "\n */\n", "\n * ")
    }

    fn with_layout(prefix: &str, suffix: &str, separator: &str, layout: Layout) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            separator: separator.to_string(),
            layout,
            contents: Vec::new(),
        }
    }

    pub fn push_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.contents.push(Node::Text(text.into()));
        self
    }

    pub fn push_block(&mut self, block: CodeBlock) -> &mut Self {
        self.contents.push(Node::Block(block));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    pub fn with_block(mut self, block: CodeBlock) -> Self {
        self.push_block(block);
        self
    }

    pub fn contents(&self) -> &[Node] {
        &self.contents
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of indented blocks on the deepest path through this tree.
    pub fn indent_depth(&self) -> usize {
        let own = usize::from(self.layout == Layout::Indented);
        let nested = self
            .contents
            .iter()
            .filter_map(|node| match node {
                Node::Block(block) => Some(block.indent_depth()),
                Node::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        own + nested
    }

    /// The rendered contents without prefix and suffix.
    pub fn render_contents(&self) -> String {
        let items: Vec<String> = self.contents.iter().map(Node::to_string).collect();
        match self.layout {
            Layout::Inline => items.join(&self.separator),
            Layout::Indented => {
                let joined = items.join(&format!("{}\n", self.separator));
                format!("\n{INDENT}{}\n", joined.replace('\n', &format!("\n{INDENT}")))
            }
        }
    }
}

impl Default for CodeBlock {
    fn default() -> Self {
        Self::braces()
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.render_contents(), self.suffix)
    }
}
