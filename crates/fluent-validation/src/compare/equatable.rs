//! Equality adapter

use crate::compare::{EqualTo, EqualityComparer};
use std::fmt;
use std::rc::Rc;

/// A value paired with the equality used to compare against it.
pub struct Equatable<T> {
    value: T,
    comparer: Rc<dyn Fn(&T, &T) -> bool>,
}

impl<T: 'static> Equatable<T> {
    /// Compares with `T`'s natural equality.
    pub fn new(value: T) -> Self
    where
        T: PartialEq,
    {
        Self {
            value,
            comparer: Rc::new(|left: &T, right: &T| left == right),
        }
    }

    /// Compares with an explicit comparer.
    pub fn with_comparer(value: T, comparer: impl EqualityComparer<T> + 'static) -> Self {
        Self {
            value,
            comparer: Rc::new(move |left: &T, right: &T| comparer.equals(left, right)),
        }
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> EqualTo<T> for Equatable<T> {
    fn equals(&self, other: &T) -> bool {
        (self.comparer)(&self.value, other)
    }
}

impl<T: Clone> Clone for Equatable<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            comparer: Rc::clone(&self.comparer),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Equatable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equatable")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
