//! Error tree formatting utilities.

use std::fmt::{self, Display, Write};

use crate::types::error_node::Leaf;
use crate::types::{ErrorNode, Location};

/// Trait for customizing error tree formatting.
pub trait ErrorFormatter {
    fn path_separator(&self) -> &str {
        "."
    }

    fn separator(&self) -> &str {
        "; "
    }

    fn format_path(&self, path: &[&Location]) -> String {
        let mut out = String::new();
        for (i, loc) in path.iter().enumerate() {
            if i > 0 {
                out.push_str(self.path_separator());
            }
            let _ = write!(out, "{loc}");
        }
        out
    }

    fn format_leaf(&self, leaf: &Leaf<'_>) -> String {
        if leaf.path.is_empty() {
            leaf.message.to_owned()
        } else {
            format!("{}: {}", self.format_path(&leaf.path), leaf.message)
        }
    }

    fn format_tree(&self, node: &ErrorNode) -> String {
        node.leaves().map(|leaf| self.format_leaf(&leaf)).collect::<Vec<_>>().join(self.separator())
    }
}

/// Configuration-based error formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub path_separator: String,
    pub message_separator: String,
    pub multiline: bool,
    pub indent: String,
    pub show_kind: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: "; ".into(),
            path_separator: ".".into(),
            message_separator: ": ".into(),
            multiline: false,
            indent: "  ".into(),
            show_kind: false,
        }
    }
}

impl ErrorFormatConfig {
    /// Indented tree, one location per line.
    #[inline]
    pub fn pretty() -> Self {
        Self { separator: "\n".into(), multiline: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    #[inline]
    pub fn with_kinds() -> Self {
        Self { show_kind: true, ..Default::default() }
    }

    fn write_message(&self, out: &mut String, kind: crate::ErrorKind, message: &str) {
        out.push_str(message);
        if self.show_kind {
            let _ = write!(out, " [{kind}]");
        }
    }

    fn write_tree(&self, out: &mut String, node: &ErrorNode, depth: usize) {
        let ErrorNode::Nested(children) = node else {
            if let ErrorNode::Message { kind, message } = node {
                self.write_message(out, *kind, message);
            }
            return;
        };

        for (loc, child) in children {
            if !out.is_empty() {
                out.push_str(&self.separator);
            }
            for _ in 0..depth {
                out.push_str(&self.indent);
            }
            let _ = write!(out, "{loc}");
            match child {
                ErrorNode::Message { kind, message } => {
                    out.push_str(&self.message_separator);
                    self.write_message(out, *kind, message);
                }
                ErrorNode::Nested(_) => {
                    out.push_str(self.message_separator.trim_end());
                    self.write_tree(out, child, depth + 1);
                }
            }
        }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn path_separator(&self) -> &str {
        &self.path_separator
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_leaf(&self, leaf: &Leaf<'_>) -> String {
        let mut out = String::new();
        if !leaf.path.is_empty() {
            out.push_str(&self.format_path(&leaf.path));
            out.push_str(&self.message_separator);
        }
        self.write_message(&mut out, leaf.kind, leaf.message);
        out
    }

    fn format_tree(&self, node: &ErrorNode) -> String {
        if self.multiline {
            let mut out = String::new();
            self.write_tree(&mut out, node, 0);
            return out;
        }
        node.leaves().map(|leaf| self.format_leaf(&leaf)).collect::<Vec<_>>().join(&self.separator)
    }
}

/// Builder for customizing error display output.
///
/// # Examples
///
/// ```
/// use schema_rail::{DataError, ErrorKind};
///
/// let err = DataError::new(ErrorKind::RequiredFieldMissing, "is required").located("name");
///
/// assert_eq!(err.to_string(), "name: is required");
/// assert_eq!(err.fmt().show_kind(true).to_string(), "name: is required [required_field_missing]");
/// ```
pub struct ErrorFormatBuilder<'a> {
    pub(crate) node: &'a ErrorNode,
    pub(crate) config: ErrorFormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(node: &'a ErrorNode) -> Self {
        Self { node, config: ErrorFormatConfig::default() }
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn with_path_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.path_separator = separator.into();
        self
    }

    pub fn show_kind(mut self, show: bool) -> Self {
        self.config.show_kind = show;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = ErrorFormatConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }
}

impl<'a> Display for ErrorFormatBuilder<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.config.format_tree(self.node))
    }
}
