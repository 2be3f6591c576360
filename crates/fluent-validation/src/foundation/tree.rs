//! Hierarchical validation results
//!
//! A [`ValidationErrorTreeBuilder`] collects rendered messages per member while
//! constraints are evaluated, then freezes them into an immutable
//! [`ValidationErrorTree`]. Trees nest: a message that contains other messages
//! attaches their trees as children.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_fluent_validation::foundation::ValidationErrorTreeBuilder;
//!
//! let mut builder = ValidationErrorTreeBuilder::new();
//! builder.add_message("Age", "too young");
//! let tree = builder.build_error_tree();
//! assert_eq!(tree.errors_for("Age"), ["too young"]);
//! ```

use crate::foundation::{ErrorMessage, ErrorMessageConsumer};
use indexmap::IndexMap;
use std::fmt;

// ============================================================================
// ERROR TREE
// ============================================================================

/// Errors of one validated message plus the trees of nested messages.
///
/// Member order follows the order in which the first error of each member was
/// reported; messages of a member keep their reporting order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationErrorTree {
    errors: IndexMap<String, Vec<String>>,
    children: Vec<ValidationErrorTree>,
}

impl ValidationErrorTree {
    /// Creates a tree without errors.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the errors of this level, keyed by member name.
    #[must_use]
    pub fn errors(&self) -> &IndexMap<String, Vec<String>> {
        &self.errors
    }

    /// Returns the trees of nested messages.
    #[must_use]
    pub fn children(&self) -> &[ValidationErrorTree] {
        &self.children
    }

    /// Returns the messages reported for `member`, or an empty slice.
    #[must_use]
    pub fn errors_for(&self, member: &str) -> &[String] {
        self.errors.get(member).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the names of the members with errors on this level.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Returns true if neither this level nor any child holds an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.children.iter().all(ValidationErrorTree::is_valid)
    }

    /// Returns the number of messages, including nested ones.
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum::<usize>()
            + self
                .children
                .iter()
                .map(ValidationErrorTree::total_error_count)
                .sum::<usize>()
    }

    /// Converts to a `Result`, failing if the tree holds any error.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationErrorTree> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }

    /// Converts the tree to a JSON value.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        json!({
            "errors": self.errors,
            "children": self
                .children
                .iter()
                .map(ValidationErrorTree::to_json_value)
                .collect::<Vec<_>>(),
        })
    }

    fn fmt_level(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        for (member, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{indent}{member}: {message}")?;
            }
        }
        for child in &self.children {
            child.fmt_level(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for ValidationErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_level(f, 0)
    }
}

impl std::error::Error for ValidationErrorTree {}

// ============================================================================
// BUILDER
// ============================================================================

/// Accumulates errors during one validation pass.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrorTreeBuilder {
    errors: IndexMap<String, Vec<String>>,
    children: Vec<ValidationErrorTree>,
}

impl ValidationErrorTreeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `message` and appends it to the errors of `member`.
    pub fn add_message(&mut self, member: &str, message: impl Into<ErrorMessage>) {
        let message = message.into();
        self.push(member, message.render());
    }

    /// Formats `template` with `args` and appends it to the errors of `member`.
    pub fn add_formatted<A>(
        &mut self,
        member: &str,
        template: &str,
        args: impl IntoIterator<Item = A>,
    ) where
        A: fmt::Display + Send + Sync + 'static,
    {
        let message = ErrorMessage::new(template.to_owned()).with_args(args);
        self.push(member, message.render());
    }

    /// Nests an already built tree.
    pub fn add_child_errors(&mut self, tree: ValidationErrorTree) {
        self.children.push(tree);
    }

    /// Returns the number of messages recorded so far, children included.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum::<usize>()
            + self
                .children
                .iter()
                .map(ValidationErrorTree::total_error_count)
                .sum::<usize>()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.children.is_empty()
    }

    /// Snapshots the accumulated state.
    ///
    /// Later additions to the builder do not affect the returned tree.
    #[must_use]
    pub fn build_error_tree(&self) -> ValidationErrorTree {
        ValidationErrorTree {
            errors: self.errors.clone(),
            children: self.children.clone(),
        }
    }

    fn push(&mut self, member: &str, rendered: String) {
        if let Some(messages) = self.errors.get_mut(member) {
            messages.push(rendered);
        } else {
            self.errors.insert(member.to_owned(), vec![rendered]);
        }
    }
}

impl ErrorMessageConsumer for ValidationErrorTreeBuilder {
    fn add(&mut self, member_name: &str, message: &ErrorMessage) {
        self.push(member_name, message.render());
    }
}

// ============================================================================
// TESTS
// ============================================================================
