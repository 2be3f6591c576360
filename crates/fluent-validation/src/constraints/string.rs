//! String constraints

use crate::foundation::{ErrorMessage, SpecificationError, SpecificationResult};
use crate::member::Member;
use regex::Regex;

/// Named constraints on text members.
///
/// Lengths are counted in characters, not bytes.
pub trait StringConstraints: Sized {
    /// Requires at least one character.
    fn is_not_empty(self, message: impl Into<ErrorMessage>) -> Self;

    /// Requires at least one non-whitespace character.
    fn is_not_blank(self, message: impl Into<ErrorMessage>) -> Self;

    /// Requires at least `min` characters.
    fn has_min_length(self, min: usize, message: impl Into<ErrorMessage>) -> Self;

    /// Requires at most `max` characters.
    fn has_max_length(self, max: usize, message: impl Into<ErrorMessage>) -> Self;

    /// Requires between `min` and `max` characters, both included.
    ///
    /// Fails if `min > max`.
    fn has_length_between(
        self,
        min: usize,
        max: usize,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self>;

    /// Requires the text to start with `prefix`.
    fn starts_with(self, prefix: impl Into<String>, message: impl Into<ErrorMessage>) -> Self;

    /// Requires the text to end with `suffix`.
    fn ends_with(self, suffix: impl Into<String>, message: impl Into<ErrorMessage>) -> Self;

    /// Requires the text to contain `needle`.
    fn contains(self, needle: impl Into<String>, message: impl Into<ErrorMessage>) -> Self;

    /// Requires the text to match the regular expression `pattern`.
    ///
    /// Fails if `pattern` does not compile.
    fn matches(self, pattern: &str, message: impl Into<ErrorMessage>) -> SpecificationResult<Self>;
}

impl StringConstraints for Member<'_, String> {
    fn is_not_empty(self, message: impl Into<ErrorMessage>) -> Self {
        self.satisfies(|text| !text.is_empty(), message)
    }

    fn is_not_blank(self, message: impl Into<ErrorMessage>) -> Self {
        self.satisfies(|text| !text.trim().is_empty(), message)
    }

    fn has_min_length(self, min: usize, message: impl Into<ErrorMessage>) -> Self {
        self.satisfies(move |text| text.chars().count() >= min, message)
    }

    fn has_max_length(self, max: usize, message: impl Into<ErrorMessage>) -> Self {
        self.satisfies(move |text| text.chars().count() <= max, message)
    }

    fn has_length_between(
        self,
        min: usize,
        max: usize,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self> {
        if min > max {
            return Err(SpecificationError::invalid_interval(min, max));
        }
        Ok(self.satisfies(
            move |text| (min..=max).contains(&text.chars().count()),
            message,
        ))
    }

    fn starts_with(self, prefix: impl Into<String>, message: impl Into<ErrorMessage>) -> Self {
        let prefix = prefix.into();
        self.satisfies(move |text| text.starts_with(prefix.as_str()), message)
    }

    fn ends_with(self, suffix: impl Into<String>, message: impl Into<ErrorMessage>) -> Self {
        let suffix = suffix.into();
        self.satisfies(move |text| text.ends_with(suffix.as_str()), message)
    }

    fn contains(self, needle: impl Into<String>, message: impl Into<ErrorMessage>) -> Self {
        let needle = needle.into();
        self.satisfies(move |text| text.contains(needle.as_str()), message)
    }

    fn matches(self, pattern: &str, message: impl Into<ErrorMessage>) -> SpecificationResult<Self> {
        let regex = Regex::new(pattern)
            .map_err(|err| SpecificationError::invalid_pattern(pattern, err))?;
        Ok(self.satisfies(move |text| regex.is_match(text), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::{MemberSet, MemberValue};
    use rstest::rstest;

    fn passes(text: &str, declare: impl FnOnce(Member<'_, String>)) -> bool {
        let mut set = MemberSet::new();
        declare(set.add("Text", MemberValue::new(text.to_owned())).unwrap());
        let mut sink: Vec<(String, String)> = Vec::new();
        set.add_error_messages_to(&mut sink) == 0
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", true)]
    #[case("x", true)]
    fn test_is_not_empty(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(passes(text, |m| { m.is_not_empty("empty"); }), expected);
    }

    #[rstest]
    #[case("", false)]
    #[case(" \t\n", false)]
    #[case(" x ", true)]
    fn test_is_not_blank(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(passes(text, |m| { m.is_not_blank("blank"); }), expected);
    }

    #[rstest]
    #[case("ab", false)]
    #[case("abc", true)]
    #[case("äöü", true)]
    #[case("abcde", true)]
    #[case("abcdef", false)]
    fn test_length_bounds(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(
            passes(text, |m| { m.has_min_length(3, "short").has_max_length(5, "long"); }),
            expected
        );
        assert_eq!(
            passes(text, |m| { m.has_length_between(3, 5, "length").unwrap(); }),
            expected
        );
    }

    #[test]
    fn test_reversed_interval_rejected() {
        let mut set = MemberSet::new();
        let err = set
            .add("Text", MemberValue::new(String::new()))
            .unwrap()
            .has_length_between(5, 3, "length")
            .unwrap_err();
        assert_eq!(err, SpecificationError::invalid_interval(5, 3));
    }

    #[test]
    fn test_affixes() {
        let text = "nebula-workflow";
        assert!(passes(text, |m| { m.starts_with("nebula", "prefix"); }));
        assert!(!passes(text, |m| { m.starts_with("flow", "prefix"); }));
        assert!(passes(text, |m| { m.ends_with("flow", "suffix"); }));
        assert!(passes(text, |m| { m.contains("-work", "needle"); }));
        assert!(!passes(text, |m| { m.contains("engine", "needle"); }));
    }

    #[test]
    fn test_matches() {
        let slug = r"^[a-z][a-z0-9-]*$";
        assert!(passes("send-email", |m| { m.matches(slug, "slug").unwrap(); }));
        assert!(!passes("Send Email", |m| { m.matches(slug, "slug").unwrap(); }));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let mut set = MemberSet::new();
        let err = set
            .add("Text", MemberValue::new(String::new()))
            .unwrap()
            .matches("(unclosed", "never")
            .unwrap_err();
        assert_eq!(err.code(), "invalid_pattern");
    }
}
