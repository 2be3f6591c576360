//! Ordering adapter

use crate::compare::{CompareFn, CompareTo, Comparer, natural_order, with_comparer};
use crate::foundation::{SpecificationError, SpecificationResult};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// A value paired with the ordering used to compare against it.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fluent_validation::compare::{Comparable, CompareTo};
///
/// let eighteen = Comparable::new(18)?;
/// assert_eq!(eighteen.compare_to(&21), Some(std::cmp::Ordering::Less));
///
/// // NaN has no order, even with itself.
/// assert!(Comparable::new(f64::NAN).is_err());
/// ```
pub struct Comparable<T> {
    value: T,
    comparer: CompareFn<T>,
}

impl<T: 'static> Comparable<T> {
    /// Orders with `T`'s natural order.
    ///
    /// Fails if `value` cannot be ordered against itself, since no
    /// comparison with it could ever succeed.
    pub fn new(value: T) -> SpecificationResult<Self>
    where
        T: PartialOrd,
    {
        if value.partial_cmp(&value).is_none() {
            return Err(SpecificationError::not_comparable::<T>());
        }
        Ok(Self {
            value,
            comparer: natural_order(),
        })
    }

    /// Orders with an explicit comparer.
    pub fn with_comparer(value: T, comparer: impl Comparer<T> + 'static) -> Self {
        Self {
            value,
            comparer: with_comparer(comparer),
        }
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> CompareTo<T> for Comparable<T> {
    fn compare_to(&self, other: &T) -> Option<Ordering> {
        (self.comparer)(&self.value, other)
    }
}

impl<T: Clone> Clone for Comparable<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            comparer: Rc::clone(&self.comparer),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Comparable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparable")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
