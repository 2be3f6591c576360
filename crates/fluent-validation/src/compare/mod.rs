//! Equality, ordering and range adapters
//!
//! Member constraints accept a raw bound (natural `PartialEq`/`PartialOrd`),
//! an explicit comparer, or a prepared adapter. Adapters resolve the comparer
//! once, at construction, so call sites never branch on which one was given.
//!
//! - [`Equatable`] implements [`EqualTo`]
//! - [`Comparable`] implements [`CompareTo`]
//! - [`Range`] implements [`Bounds`]
//!
//! Comparers are plain closures thanks to blanket impls:
//!
//! ```rust,ignore
//! use nebula_fluent_validation::compare::{Equatable, EqualTo};
//!
//! let name = Equatable::with_comparer("ADMIN".to_owned(), |a: &String, b: &String| {
//!     a.eq_ignore_ascii_case(b)
//! });
//! assert!(name.equals(&"admin".to_owned()));
//! ```

pub mod comparable;
pub mod equatable;
pub mod range;

pub use comparable::Comparable;
pub use equatable::Equatable;
pub use range::{Range, RangeOptions};

use std::cmp::Ordering;

// ============================================================================
// COMPARERS
// ============================================================================

/// Decides whether two values are equal.
pub trait EqualityComparer<T: ?Sized> {
    /// Returns true if `left` equals `right`.
    fn equals(&self, left: &T, right: &T) -> bool;
}

impl<T: ?Sized, F> EqualityComparer<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

/// Totally orders two values.
pub trait Comparer<T: ?Sized> {
    /// Returns the ordering of `left` relative to `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

// ============================================================================
// ADAPTER TRAITS
// ============================================================================

/// A value that can be checked for equality against another value.
pub trait EqualTo<T: ?Sized> {
    /// Returns true if `self` equals `other`.
    fn equals(&self, other: &T) -> bool;
}

/// A value that can be ordered against another value.
pub trait CompareTo<T: ?Sized> {
    /// Returns the ordering of `self` relative to `other`, or `None` if the
    /// two cannot be ordered.
    fn compare_to(&self, other: &T) -> Option<Ordering>;
}

/// A set of values described by its boundaries.
pub trait Bounds<T: ?Sized> {
    /// Returns true if `value` lies within the boundaries.
    fn contains(&self, value: &T) -> bool;
}

impl<T: PartialOrd> Bounds<T> for std::ops::Range<T> {
    fn contains(&self, value: &T) -> bool {
        std::ops::Range::contains(self, value)
    }
}

impl<T: PartialOrd> Bounds<T> for std::ops::RangeInclusive<T> {
    fn contains(&self, value: &T) -> bool {
        std::ops::RangeInclusive::contains(self, value)
    }
}

pub(crate) type CompareFn<T> = std::rc::Rc<dyn Fn(&T, &T) -> Option<Ordering>>;

/// Orders `T` naturally, rejecting values not comparable with themselves.
pub(crate) fn natural_order<T: PartialOrd + 'static>() -> CompareFn<T> {
    std::rc::Rc::new(|left: &T, right: &T| left.partial_cmp(right))
}

pub(crate) fn with_comparer<T: 'static>(comparer: impl Comparer<T> + 'static) -> CompareFn<T> {
    std::rc::Rc::new(move |left: &T, right: &T| Some(comparer.compare(left, right)))
}
