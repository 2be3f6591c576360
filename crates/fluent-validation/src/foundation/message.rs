//! Lazily formatted error messages
//!
//! An [`ErrorMessage`] is a template plus positional arguments. Nothing is
//! formatted until the message is rendered, so one message can be attached to
//! many constraints without cost.
//!
//! Placeholders are written `{0}`, `{1}`, ... and refer to the arguments in
//! the order they were added. `{{` and `}}` render literal braces. A
//! placeholder without a matching argument is rendered verbatim.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_fluent_validation::foundation::ErrorMessage;
//!
//! let message = ErrorMessage::new("must be between {0} and {1}")
//!     .with_arg(18)
//!     .with_arg(65);
//! assert_eq!(message.to_string(), "must be between 18 and 65");
//! ```

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt::{self, Display, Write};
use std::sync::Arc;

type MessageArg = Arc<dyn Display + Send + Sync>;

/// An immutable message template with positional arguments.
#[derive(Clone)]
pub struct ErrorMessage {
    template: Cow<'static, str>,
    /// Typically 0-2 arguments.
    args: SmallVec<[MessageArg; 2]>,
}

impl ErrorMessage {
    /// Creates a message without arguments.
    ///
    /// Static strings are borrowed, dynamic ones are moved in.
    pub fn new(template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            template: template.into(),
            args: SmallVec::new(),
        }
    }

    /// Appends a positional argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_arg(mut self, arg: impl Display + Send + Sync + 'static) -> Self {
        self.args.push(Arc::new(arg));
        self
    }

    /// Appends several positional arguments of the same type.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_args<A>(mut self, args: impl IntoIterator<Item = A>) -> Self
    where
        A: Display + Send + Sync + 'static,
    {
        self.args
            .extend(args.into_iter().map(|arg| Arc::new(arg) as MessageArg));
        self
    }

    /// Returns the unformatted template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the number of positional arguments.
    #[must_use]
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Formats the template with its arguments.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_placeholder(&self, f: &mut fmt::Formatter<'_>, index: &str) -> fmt::Result {
        match index.parse::<usize>().ok().and_then(|i| self.args.get(i)) {
            Some(arg) => write!(f, "{arg}"),
            None => write!(f, "{{{index}}}"),
        }
    }
}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() && !self.template.contains(['{', '}']) {
            return f.write_str(&self.template);
        }

        let mut chars = self.template.char_indices().peekable();
        while let Some((start, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                    chars.next();
                    f.write_char('{')?;
                }
                '}' if chars.peek().is_some_and(|&(_, next)| next == '}') => {
                    chars.next();
                    f.write_char('}')?;
                }
                '{' => {
                    let rest = &self.template[start + 1..];
                    match rest.find('}') {
                        Some(end)
                            if end > 0 && rest[..end].bytes().all(|b| b.is_ascii_digit()) =>
                        {
                            self.write_placeholder(f, &rest[..end])?;
                            // Skip the digits and the closing brace.
                            for _ in 0..=end {
                                chars.next();
                            }
                        }
                        _ => f.write_char('{')?,
                    }
                }
                other => f.write_char(other)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
        f.debug_struct("ErrorMessage")
            .field("template", &self.template)
            .field("args", &args)
            .finish()
    }
}

/// Messages compare by their rendering.
impl PartialEq for ErrorMessage {
    fn eq(&self, other: &Self) -> bool {
        self.render() == other.render()
    }
}

impl Eq for ErrorMessage {}

impl From<&'static str> for ErrorMessage {
    fn from(template: &'static str) -> Self {
        Self::new(template)
    }
}

impl From<String> for ErrorMessage {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

impl From<Cow<'static, str>> for ErrorMessage {
    fn from(template: Cow<'static, str>) -> Self {
        Self::new(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_template() {
        let message = ErrorMessage::new("too young");
        assert_eq!(message.render(), "too young");
        assert!(matches!(message.template, Cow::Borrowed(_)));
    }

    #[test]
    fn test_positional_args() {
        let message = ErrorMessage::new("{0} must be between {1} and {2}")
            .with_arg("Age")
            .with_arg(18)
            .with_arg(65);
        assert_eq!(message.render(), "Age must be between 18 and 65");
        assert_eq!(message.arg_count(), 3);
    }

    #[test]
    fn test_args_reused_and_reordered() {
        let message = ErrorMessage::new("{1}-{0}-{1}").with_args(["a", "b"]);
        assert_eq!(message.render(), "b-a-b");
    }

    #[test]
    fn test_escaped_braces() {
        let message = ErrorMessage::new("{{literal}} {0}").with_arg(1);
        assert_eq!(message.render(), "{literal} 1");
    }

    #[test]
    fn test_missing_arg_rendered_verbatim() {
        let message = ErrorMessage::new("value {0} vs {1}").with_arg(5);
        assert_eq!(message.render(), "value 5 vs {1}");
    }

    #[test]
    fn test_non_numeric_placeholder_left_alone() {
        let message = ErrorMessage::new("{name} {}").with_arg(1);
        assert_eq!(message.render(), "{name} {}");
    }

    #[test]
    fn test_template_untouched_by_rendering() {
        let message = ErrorMessage::new("at least {0}").with_arg(3);
        let _ = message.render();
        assert_eq!(message.template(), "at least {0}");
    }

    #[test]
    fn test_equality_by_rendering() {
        let a = ErrorMessage::new("at least {0}").with_arg(3);
        let b = ErrorMessage::new("at least 3");
        assert_eq!(a, b);
    }
}
