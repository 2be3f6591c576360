//! Collection constraints

use crate::foundation::{ErrorMessage, SpecificationError, SpecificationResult};
use crate::member::Member;
use std::collections::HashSet;
use std::hash::Hash;

/// Named constraints on members holding a list of items.
pub trait CollectionConstraints<E>: Sized {
    /// Requires at least one item.
    fn is_not_empty(self, message: impl Into<ErrorMessage>) -> Self;

    /// Requires exactly `count` items.
    fn has_count(self, count: usize, message: impl Into<ErrorMessage>) -> Self;

    /// Requires between `min` and `max` items, both included.
    ///
    /// Fails if `min > max`.
    fn has_count_between(
        self,
        min: usize,
        max: usize,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self>;

    /// Requires `item` to be present.
    fn contains_item(self, item: E, message: impl Into<ErrorMessage>) -> Self
    where
        E: PartialEq;

    /// Requires every item to satisfy `predicate`.
    fn all_satisfy<P>(self, predicate: P, message: impl Into<ErrorMessage>) -> Self
    where
        P: Fn(&E) -> bool + 'static;

    /// Requires the items to be pairwise distinct.
    fn has_unique_items(self, message: impl Into<ErrorMessage>) -> Self
    where
        E: Eq + Hash;
}

impl<E: 'static> CollectionConstraints<E> for Member<'_, Vec<E>> {
    fn is_not_empty(self, message: impl Into<ErrorMessage>) -> Self {
        self.satisfies(|items| !items.is_empty(), message)
    }

    fn has_count(self, count: usize, message: impl Into<ErrorMessage>) -> Self {
        self.satisfies(move |items| items.len() == count, message)
    }

    fn has_count_between(
        self,
        min: usize,
        max: usize,
        message: impl Into<ErrorMessage>,
    ) -> SpecificationResult<Self> {
        if min > max {
            return Err(SpecificationError::invalid_interval(min, max));
        }
        Ok(self.satisfies(move |items| (min..=max).contains(&items.len()), message))
    }

    fn contains_item(self, item: E, message: impl Into<ErrorMessage>) -> Self
    where
        E: PartialEq,
    {
        self.satisfies(move |items| items.contains(&item), message)
    }

    fn all_satisfy<P>(self, predicate: P, message: impl Into<ErrorMessage>) -> Self
    where
        P: Fn(&E) -> bool + 'static,
    {
        self.satisfies(move |items| items.iter().all(&predicate), message)
    }

    fn has_unique_items(self, message: impl Into<ErrorMessage>) -> Self
    where
        E: Eq + Hash,
    {
        self.satisfies(
            |items| {
                let mut seen = HashSet::with_capacity(items.len());
                items.iter().all(|item| seen.insert(item))
            },
            message,
        )
    }
}
