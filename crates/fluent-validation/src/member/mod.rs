//! Members: named values and their constraint chains
//!
//! A [`Member`] is a typed handle into a [`MemberSet`]. Every constraint method
//! consumes the handle and returns it, so declarations read as one chain:
//!
//! ```rust,ignore
//! use nebula_fluent_validation::prelude::*;
//!
//! let mut set = MemberSet::new();
//! set.add("Age", MemberValue::new(15))?
//!     .is_greater_than_or_equal_to(0, "must not be negative")?
//!     .is_smaller_than(150, "implausible")?;
//! ```
//!
//! Narrowing methods ([`Member::narrow`], `is_not_null`, `is_instance_of`)
//! return a handle of a different type that replaces the original inside the
//! set under the same name.

mod dynamic;
mod nullable;
mod relations;
mod set;
mod value;

pub use dynamic::DynValue;
pub use set::{MemberKey, MemberSet, RegisteredMember};
pub use value::MemberValue;

use crate::constraint::{Constraint, PredicateConstraint};
use crate::foundation::ErrorMessage;
use std::fmt;
use std::rc::Rc;

/// A named member of a validation session.
///
/// The handle borrows its [`MemberSet`] mutably; constraints declared through
/// it are stored in the set, so dropping the handle loses nothing.
pub struct Member<'s, T: 'static> {
    set: &'s mut MemberSet,
    key: MemberKey,
    name: Rc<str>,
    value: MemberValue<T>,
}

impl<'s, T: 'static> Member<'s, T> {
    pub(crate) fn attach(
        set: &'s mut MemberSet,
        key: MemberKey,
        name: Rc<str>,
        value: MemberValue<T>,
    ) -> Self {
        Self {
            set,
            key,
            name,
            value,
        }
    }

    /// Returns the member name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the key of the member inside its set.
    pub fn key(&self) -> MemberKey {
        self.key
    }

    /// Returns the memoized value, evaluating it on first access.
    ///
    /// `None` means the member was narrowed and the narrowing did not apply.
    pub fn value(&self) -> Option<&T> {
        self.value.get()
    }

    /// Returns the constraint chain accumulated so far.
    pub fn constraint(&self) -> Constraint {
        self.set.constraint_of(self.key)
    }

    /// Appends a check reporting `message` when `predicate` returns false.
    ///
    /// Every named constraint is built on top of this.
    pub fn satisfies<P>(self, predicate: P, message: impl Into<ErrorMessage>) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let leaf = self.leaf(predicate, message);
        self.with_constraint(Constraint::leaf(leaf))
    }

    /// Appends a check reporting `message` when `predicate` returns true.
    pub fn does_not_satisfy<P>(self, predicate: P, message: impl Into<ErrorMessage>) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let leaf = self.leaf(predicate, message);
        self.with_constraint(Constraint::leaf(leaf).invert())
    }

    /// Appends an arbitrary constraint to the chain.
    ///
    /// Use it for composites built with [`Constraint::or`] or
    /// [`Constraint::invert`] over leaves from [`Member::leaf`].
    pub fn with_constraint(self, constraint: Constraint) -> Self {
        self.set.append(self.key, constraint);
        self
    }

    /// Builds a leaf over this member's value without appending it.
    pub fn leaf<P>(&self, predicate: P, message: impl Into<ErrorMessage>) -> PredicateConstraint<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        PredicateConstraint::new(Rc::clone(&self.name), self.value.clone(), predicate, message)
    }

    /// Narrows the member to `U` through `project`.
    ///
    /// A guard reporting `message` when the projection does not apply is
    /// checked first; the returned member then replaces this one in the set
    /// under the same name. Constraints declared on the narrowed member are
    /// skipped whenever the projection does not apply.
    pub fn narrow<U: 'static>(
        self,
        project: fn(&T) -> Option<&U>,
        message: impl Into<ErrorMessage>,
    ) -> Member<'s, U> {
        let guard = self.leaf(move |value: &T| project(value).is_some(), message);
        let value = self.value.project(project);
        let key = self.set.narrow(self.key, guard, value.clone());
        tracing::trace!(
            member = %self.name,
            from = std::any::type_name::<T>(),
            to = std::any::type_name::<U>(),
            "member narrowed"
        );
        Member {
            set: self.set,
            key,
            name: self.name,
            value,
        }
    }
}

impl<T: 'static> fmt::Debug for Member<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("type", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
