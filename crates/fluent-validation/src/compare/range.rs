//! Boundary pairs with per-side inclusivity

use crate::compare::{Bounds, CompareFn, Comparer, natural_order, with_comparer};
use crate::foundation::{SpecificationError, SpecificationResult};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Which boundaries of a [`Range`] are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeOptions {
    /// Both boundaries belong to the range.
    #[default]
    None,
    /// The left boundary is excluded.
    LeftExclusive,
    /// The right boundary is excluded.
    RightExclusive,
    /// Both boundaries are excluded.
    AllExclusive,
}

impl RangeOptions {
    /// Builds options from one flag per side.
    #[must_use]
    pub fn from_flags(left_exclusive: bool, right_exclusive: bool) -> Self {
        match (left_exclusive, right_exclusive) {
            (false, false) => Self::None,
            (true, false) => Self::LeftExclusive,
            (false, true) => Self::RightExclusive,
            (true, true) => Self::AllExclusive,
        }
    }

    /// Returns true if the left boundary is excluded.
    #[must_use]
    pub fn is_left_exclusive(self) -> bool {
        matches!(self, Self::LeftExclusive | Self::AllExclusive)
    }

    /// Returns true if the right boundary is excluded.
    #[must_use]
    pub fn is_right_exclusive(self) -> bool {
        matches!(self, Self::RightExclusive | Self::AllExclusive)
    }

    fn brackets(self) -> (char, char) {
        (
            if self.is_left_exclusive() { '<' } else { '[' },
            if self.is_right_exclusive() { '>' } else { ']' },
        )
    }
}

// ============================================================================
// RANGE
// ============================================================================

/// A validated interval `left..right` under some ordering.
///
/// Construction guarantees `left <= right`, and that a range with an
/// exclusive side is not empty. Rendering uses bracket notation: `[`/`]`
/// for inclusive and `<`/`>` for exclusive boundaries.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fluent_validation::compare::{Bounds, Range, RangeOptions};
///
/// let range = Range::with_options(0, 1000, RangeOptions::RightExclusive)?;
/// assert_eq!(range.to_string(), "[0, 1000>");
/// assert!(range.contains(&0));
/// assert!(!range.contains(&1000));
/// ```
pub struct Range<T> {
    left: T,
    right: T,
    options: RangeOptions,
    comparer: CompareFn<T>,
}

impl<T: fmt::Debug + 'static> Range<T> {
    /// Creates an inclusive range with `T`'s natural order.
    pub fn new(left: T, right: T) -> SpecificationResult<Self>
    where
        T: PartialOrd,
    {
        Self::with_options(left, right, RangeOptions::None)
    }

    /// Creates a range with `T`'s natural order.
    pub fn with_options(left: T, right: T, options: RangeOptions) -> SpecificationResult<Self>
    where
        T: PartialOrd,
    {
        Self::checked(left, right, options, natural_order())
    }

    /// Creates a range ordered by an explicit comparer.
    pub fn with_comparer(
        left: T,
        right: T,
        options: RangeOptions,
        comparer: impl Comparer<T> + 'static,
    ) -> SpecificationResult<Self> {
        Self::checked(left, right, options, with_comparer(comparer))
    }

    fn checked(
        left: T,
        right: T,
        options: RangeOptions,
        comparer: CompareFn<T>,
    ) -> SpecificationResult<Self> {
        match comparer(&left, &right) {
            None => Err(SpecificationError::not_comparable::<T>()),
            Some(Ordering::Greater) => Err(SpecificationError::range_bounds_reversed(
                format!("{left:?}"),
                format!("{right:?}"),
            )),
            Some(Ordering::Equal) if options != RangeOptions::None => {
                let (open, close) = options.brackets();
                Err(SpecificationError::degenerate_range(format!(
                    "{open}{left:?}, {right:?}{close}"
                )))
            }
            Some(_) => Ok(Self {
                left,
                right,
                options,
                comparer,
            }),
        }
    }
}

impl<T> Range<T> {
    /// Returns the left boundary.
    pub fn left(&self) -> &T {
        &self.left
    }

    /// Returns the right boundary.
    pub fn right(&self) -> &T {
        &self.right
    }

    /// Returns the exclusivity options.
    pub fn options(&self) -> RangeOptions {
        self.options
    }
}

impl<T> Bounds<T> for Range<T> {
    fn contains(&self, value: &T) -> bool {
        let above_left = match (self.comparer)(&self.left, value) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => !self.options.is_left_exclusive(),
            _ => false,
        };
        let below_right = match (self.comparer)(value, &self.right) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => !self.options.is_right_exclusive(),
            _ => false,
        };
        above_left && below_right
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = self.options.brackets();
        write!(f, "{open}{}, {}{close}", self.left, self.right)
    }
}

impl<T: fmt::Debug> fmt::Debug for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Range")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<T: Clone> Clone for Range<T> {
    fn clone(&self) -> Self {
        Self {
            left: self.left.clone(),
            right: self.right.clone(),
            options: self.options,
            comparer: Rc::clone(&self.comparer),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
