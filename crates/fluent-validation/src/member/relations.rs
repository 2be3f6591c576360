//! Equality, ordering and range constraints
//!
//! Each relation comes in three flavours: a raw bound compared naturally, a raw
//! bound with an explicit comparer (`*_by`), and a prepared adapter
//! (`*_equatable`, `*_comparable`, `is_in_bounds`). Natural orderings and
//! ranges are checked at declaration and fail with a
//! [`SpecificationError`](crate::foundation::SpecificationError).

use crate::compare::{
    Bounds, Comparable, CompareTo, Comparer, EqualTo, Equatable, EqualityComparer, Range,
    RangeOptions,
};
use crate::foundation::{ErrorMessage, SpecificationResult};
use crate::member::Member;
use std::cmp::Ordering;
use std::fmt;

impl<T: 'static> Member<'_, T> {
    // ========================================================================
    // EQUALITY
    // ========================================================================

    /// Requires the value to equal `other`.
    pub fn is_equal_to(self, other: T, message: impl Into<ErrorMessage>) -> Self
    where
        T: PartialEq,
    {
        self.is_equal_to_equatable(Equatable::new(other), message)
    }

    /// Requires the value to equal `other` under `comparer`.
    pub fn is_equal_to_by(
        self,
        other: T,
        comparer: impl EqualityComparer<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.is_equal_to_equatable(Equatable::with_comparer(other, comparer), message)
    }

    /// Requires the value to equal the adapter's value.
    pub fn is_equal_to_equatable(
        self,
        other: impl EqualTo<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.satisfies(move |value| other.equals(value), message)
    }

    /// Requires the value to differ from `other`.
    pub fn is_not_equal_to(self, other: T, message: impl Into<ErrorMessage>) -> Self
    where
        T: PartialEq,
    {
        self.is_not_equal_to_equatable(Equatable::new(other), message)
    }

    /// Requires the value to differ from `other` under `comparer`.
    pub fn is_not_equal_to_by(
        self,
        other: T,
        comparer: impl EqualityComparer<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.is_not_equal_to_equatable(Equatable::with_comparer(other, comparer), message)
    }

    /// Requires the value to differ from the adapter's value.
    pub fn is_not_equal_to_equatable(
        self,
        other: impl EqualTo<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.does_not_satisfy(move |value| other.equals(value), message)
    }

    // ========================================================================
    // ORDERING
    // ========================================================================

    /// Requires the value to be smaller than `bound`.
    ///
    /// Fails if `bound` cannot be ordered (e.g. `NaN`).
    pub fn is_smaller_than(
        self,
        bound: T,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self>
    where
        T: PartialOrd,
    {
        Ok(self.is_smaller_than_comparable(Comparable::new(bound)?, message))
    }

    /// Requires the value to be smaller than `bound` under `comparer`.
    pub fn is_smaller_than_by(
        self,
        bound: T,
        comparer: impl Comparer<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.is_smaller_than_comparable(Comparable::with_comparer(bound, comparer), message)
    }

    /// Requires the value to be smaller than the adapter's value.
    pub fn is_smaller_than_comparable(
        self,
        bound: impl CompareTo<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.ordered(bound, Ordering::is_lt, message)
    }

    /// Requires the value to be smaller than or equal to `bound`.
    ///
    /// Fails if `bound` cannot be ordered.
    pub fn is_smaller_than_or_equal_to(
        self,
        bound: T,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self>
    where
        T: PartialOrd,
    {
        Ok(self.is_smaller_than_or_equal_to_comparable(Comparable::new(bound)?, message))
    }

    /// Requires the value to be smaller than or equal to `bound` under `comparer`.
    pub fn is_smaller_than_or_equal_to_by(
        self,
        bound: T,
        comparer: impl Comparer<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.is_smaller_than_or_equal_to_comparable(
            Comparable::with_comparer(bound, comparer),
            message,
        )
    }

    /// Requires the value to be smaller than or equal to the adapter's value.
    pub fn is_smaller_than_or_equal_to_comparable(
        self,
        bound: impl CompareTo<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.ordered(bound, Ordering::is_le, message)
    }

    /// Requires the value to be greater than `bound`.
    ///
    /// Fails if `bound` cannot be ordered.
    pub fn is_greater_than(
        self,
        bound: T,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self>
    where
        T: PartialOrd,
    {
        Ok(self.is_greater_than_comparable(Comparable::new(bound)?, message))
    }

    /// Requires the value to be greater than `bound` under `comparer`.
    pub fn is_greater_than_by(
        self,
        bound: T,
        comparer: impl Comparer<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.is_greater_than_comparable(Comparable::with_comparer(bound, comparer), message)
    }

    /// Requires the value to be greater than the adapter's value.
    pub fn is_greater_than_comparable(
        self,
        bound: impl CompareTo<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.ordered(bound, Ordering::is_gt, message)
    }

    /// Requires the value to be greater than or equal to `bound`.
    ///
    /// Fails if `bound` cannot be ordered.
    pub fn is_greater_than_or_equal_to(
        self,
        bound: T,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self>
    where
        T: PartialOrd,
    {
        Ok(self.is_greater_than_or_equal_to_comparable(Comparable::new(bound)?, message))
    }

    /// Requires the value to be greater than or equal to `bound` under `comparer`.
    pub fn is_greater_than_or_equal_to_by(
        self,
        bound: T,
        comparer: impl Comparer<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.is_greater_than_or_equal_to_comparable(
            Comparable::with_comparer(bound, comparer),
            message,
        )
    }

    /// Requires the value to be greater than or equal to the adapter's value.
    pub fn is_greater_than_or_equal_to_comparable(
        self,
        bound: impl CompareTo<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.ordered(bound, Ordering::is_ge, message)
    }

    /// Appends a check on the ordering of the value relative to `bound`.
    ///
    /// A value that cannot be ordered against `bound` violates the check.
    fn ordered(
        self,
        bound: impl CompareTo<T> + 'static,
        accept: fn(Ordering) -> bool,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.satisfies(
            move |value| {
                bound
                    .compare_to(value)
                    .is_some_and(|ordering| accept(ordering.reverse()))
            },
            message,
        )
    }

    // ========================================================================
    // RANGES
    // ========================================================================

    /// Requires the value to lie within `[left, right]`.
    ///
    /// Fails if the boundaries are reversed or cannot be ordered.
    pub fn is_in_range(
        self,
        left: T,
        right: T,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self>
    where
        T: PartialOrd + fmt::Debug,
    {
        Ok(self.is_in_bounds(Range::new(left, right)?, message))
    }

    /// Requires the value to lie within the range described by `options`.
    ///
    /// Fails if the range is reversed, empty or cannot be ordered.
    pub fn is_in_range_with_options(
        self,
        left: T,
        right: T,
        options: RangeOptions,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self>
    where
        T: PartialOrd + fmt::Debug,
    {
        Ok(self.is_in_bounds(Range::with_options(left, right, options)?, message))
    }

    /// Requires the value to lie within the range ordered by `comparer`.
    pub fn is_in_range_by(
        self,
        left: T,
        right: T,
        options: RangeOptions,
        comparer: impl Comparer<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self>
    where
        T: fmt::Debug,
    {
        Ok(self.is_in_bounds(Range::with_comparer(left, right, options, comparer)?, message))
    }

    /// Requires the value to lie within `bounds`.
    pub fn is_in_bounds(
        self,
        bounds: impl Bounds<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.satisfies(move |value| bounds.contains(value), message)
    }

    /// Requires the value to lie outside `[left, right]`.
    ///
    /// Fails if the boundaries are reversed or cannot be ordered.
    pub fn is_not_in_range(
        self,
        left: T,
        right: T,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self>
    where
        T: PartialOrd + fmt::Debug,
    {
        Ok(self.is_not_in_bounds(Range::new(left, right)?, message))
    }

    /// Requires the value to lie outside the range described by `options`.
    pub fn is_not_in_range_with_options(
        self,
        left: T,
        right: T,
        options: RangeOptions,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self>
    where
        T: PartialOrd + fmt::Debug,
    {
        Ok(self.is_not_in_bounds(Range::with_options(left, right, options)?, message))
    }

    /// Requires the value to lie outside the range ordered by `comparer`.
    pub fn is_not_in_range_by(
        self,
        left: T,
        right: T,
        options: RangeOptions,
        comparer: impl Comparer<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self>
    where
        T: fmt::Debug,
    {
        Ok(self.is_not_in_bounds(Range::with_comparer(left, right, options, comparer)?, message))
    }

    /// Requires the value to lie outside `bounds`.
    pub fn is_not_in_bounds(
        self,
        bounds: impl Bounds<T> + 'static,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.does_not_satisfy(move |value| bounds.contains(value), message)
    }
}
