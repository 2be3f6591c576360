//! Validation sessions
//!
//! A [`FluentValidator`] is one validation session: members are declared with
//! [`FluentValidator::verify_that`], then [`FluentValidator::validate`] consumes
//! the session and returns the error tree.
//!
//! ```rust,ignore
//! use nebula_fluent_validation::prelude::*;
//!
//! struct Signup { name: String, age: u32 }
//!
//! impl ValidateMessage for Signup {
//!     fn verify(&self, v: &mut FluentValidator) -> SpecificationResult<()> {
//!         v.verify_that(self.name.clone(), "Name")?.is_not_blank("required");
//!         v.verify_that(self.age, "Age")?.is_greater_than_or_equal_to(18, "too young")?;
//!         Ok(())
//!     }
//! }
//!
//! let tree = Signup { name: "ann".into(), age: 15 }.validate()?;
//! assert_eq!(tree.errors_for("Age"), ["too young"]);
//! ```

use crate::foundation::{
    ErrorMessageConsumer, SpecificationResult, ValidationErrorTree, ValidationErrorTreeBuilder,
};
use crate::member::{Member, MemberSet, MemberValue};
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// FLUENT VALIDATOR
// ============================================================================

/// Declares the members of one message and validates them.
#[derive(Debug, Default)]
pub struct FluentValidator {
    members: MemberSet,
    children: Vec<ValidationErrorTree>,
}

impl FluentValidator {
    /// Creates a session evaluating every check at validation time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that also reports narrowing checks to `consumer` as
    /// they are declared.
    ///
    /// The checks stay in their members' chains, so the tree returned by
    /// [`validate`](Self::validate) reports them too.
    pub fn with_consumer<C>(consumer: Rc<RefCell<C>>) -> Self
    where
        C: ErrorMessageConsumer + 'static,
    {
        Self {
            members: MemberSet::with_consumer(consumer),
            children: Vec::new(),
        }
    }

    /// Registers `value` under `name`.
    ///
    /// Fails if `name` is empty or already declared in this session.
    pub fn verify_that<T: 'static>(
        &mut self,
        value: T,
        name: impl Into<String>,
    ) -> SpecificationResult<Member<'_, T>> {
        self.members.add(name, MemberValue::new(value))
    }

    /// Registers an accessor under `name`.
    ///
    /// The accessor runs at most once, the first time a check needs the value.
    pub fn verify_that_with<T, F>(
        &mut self,
        accessor: F,
        name: impl Into<String>,
    ) -> SpecificationResult<Member<'_, T>>
    where
        T: 'static,
        F: FnOnce() -> T + 'static,
    {
        self.members.add(name, MemberValue::lazy(accessor))
    }

    /// Returns the declared members.
    #[must_use]
    pub fn members(&self) -> &MemberSet {
        &self.members
    }

    /// Returns the declared members for further declarations.
    pub fn members_mut(&mut self) -> &mut MemberSet {
        &mut self.members
    }

    /// Nests an already built tree under this session's tree.
    pub fn add_child_errors(&mut self, tree: ValidationErrorTree) {
        self.children.push(tree);
    }

    /// Validates a contained message in its own session.
    ///
    /// Its tree is nested under this session's tree only if it has errors.
    pub fn verify_child<M>(&mut self, child: &M) -> SpecificationResult<()>
    where
        M: ValidateMessage + ?Sized,
    {
        let tree = child.validate()?;
        if tree.is_valid() {
            tracing::trace!("child message valid, nothing nested");
        } else {
            self.add_child_errors(tree);
        }
        Ok(())
    }

    /// Evaluates every member and returns the frozen error tree.
    #[must_use]
    pub fn validate(self) -> ValidationErrorTree {
        let mut builder = ValidationErrorTreeBuilder::new();
        let errors = self.members.add_error_messages_to(&mut builder);
        let children = self.children.len();
        for child in self.children {
            builder.add_child_errors(child);
        }

        let tree = builder.build_error_tree();
        tracing::debug!(
            members = self.members.len(),
            errors,
            children,
            valid = tree.is_valid(),
            "validation finished"
        );
        tree
    }
}

// ============================================================================
// VALIDATE MESSAGE
// ============================================================================

/// A message that declares its own members.
pub trait ValidateMessage {
    /// Declares the members of `self` and their constraints.
    fn verify(&self, validator: &mut FluentValidator) -> SpecificationResult<()>;

    /// Validates `self` in a fresh session.
    fn validate(&self) -> SpecificationResult<ValidationErrorTree> {
        let mut validator = FluentValidator::new();
        self.verify(&mut validator)?;
        Ok(validator.validate())
    }
}
