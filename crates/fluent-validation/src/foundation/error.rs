//! Specification errors
//!
//! Misuse of the declaration API (duplicate member names, reversed ranges,
//! incomparable bounds, ...) is reported through [`SpecificationError`] at the
//! point of declaration. These errors are never mixed with business-rule
//! violations, which only ever show up as entries of a
//! [`ValidationErrorTree`](crate::foundation::ValidationErrorTree).
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_fluent_validation::prelude::*;
//!
//! let mut validator = FluentValidator::new();
//! validator.verify_that(15, "Age")?;
//! let err = validator.verify_that(16, "Age").unwrap_err();
//! assert!(err.is_duplicate_member());
//! ```

// ============================================================================
// SPECIFICATION ERROR
// ============================================================================

/// A programmer error detected while declaring members or constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SpecificationError {
    /// A member was registered with an empty name.
    #[error("member name must not be empty")]
    EmptyMemberName,

    /// A member with the same name is already registered in the set.
    #[error("member '{name}' already added")]
    DuplicateMember { name: String },

    /// A bound has no ordering with itself, so it cannot be compared.
    ///
    /// Raised for values such as `f64::NAN` when no explicit comparer is given.
    #[error("value of type '{type_name}' is not comparable")]
    NotComparable { type_name: &'static str },

    /// The left boundary of a range is greater than the right boundary.
    #[error("left boundary {left} is greater than right boundary {right}")]
    RangeBoundsReversed { left: String, right: String },

    /// An exclusive range whose boundaries coincide contains no value.
    #[error("range {range} is empty: exclusive boundaries must differ")]
    DegenerateRange { range: String },

    /// A length or count interval whose minimum exceeds its maximum.
    #[error("minimum {min} is greater than maximum {max}")]
    InvalidInterval { min: usize, max: usize },

    /// A regular expression failed to compile.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

// ============================================================================
// CONSTRUCTOR HELPERS
// ============================================================================

impl SpecificationError {
    /// Creates a duplicate member error.
    pub fn duplicate_member(name: impl Into<String>) -> Self {
        Self::DuplicateMember { name: name.into() }
    }

    /// Creates a not-comparable error for `T`.
    #[must_use]
    pub fn not_comparable<T: ?Sized>() -> Self {
        Self::NotComparable {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Creates a reversed-bounds error.
    pub fn range_bounds_reversed(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::RangeBoundsReversed {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Creates a degenerate range error.
    pub fn degenerate_range(range: impl Into<String>) -> Self {
        Self::DegenerateRange {
            range: range.into(),
        }
    }

    /// Creates an invalid interval error.
    #[must_use]
    pub fn invalid_interval(min: usize, max: usize) -> Self {
        Self::InvalidInterval { min, max }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }
}

// ============================================================================
// UTILITY METHODS
// ============================================================================

impl SpecificationError {
    /// Returns a stable machine-readable code for the error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyMemberName => "empty_member_name",
            Self::DuplicateMember { .. } => "duplicate_member",
            Self::NotComparable { .. } => "not_comparable",
            Self::RangeBoundsReversed { .. } => "range_bounds_reversed",
            Self::DegenerateRange { .. } => "degenerate_range",
            Self::InvalidInterval { .. } => "invalid_interval",
            Self::InvalidPattern { .. } => "invalid_pattern",
        }
    }

    /// Returns true if a member name was registered twice.
    #[must_use]
    pub fn is_duplicate_member(&self) -> bool {
        matches!(self, Self::DuplicateMember { .. })
    }

    /// Returns true if the error comes from an invalid range declaration.
    ///
    /// Covers both reversed and degenerate ranges.
    #[must_use]
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::RangeBoundsReversed { .. } | Self::DegenerateRange { .. }
        )
    }

    /// Returns true if a bound could not be ordered.
    #[must_use]
    pub fn is_not_comparable(&self) -> bool {
        matches!(self, Self::NotComparable { .. })
    }
}

/// Result of a declaration that may be rejected.
pub type SpecificationResult<T> = Result<T, SpecificationError>;
