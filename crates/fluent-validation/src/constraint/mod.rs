//! Constraint algebra
//!
//! A [`Constraint`] is an immutable tree evaluated against an
//! [`ErrorMessageConsumer`]. Chains grow by appending with [`Constraint::and`];
//! a chain is never modified once built, so sharing subtrees is free.
//!
//! # Evaluation rules
//!
//! - [`Constraint::Null`] reports nothing and is the identity of `and`.
//! - `And` short-circuits: the right operand is evaluated only if the left one
//!   reported no error.
//! - `Or` reports only if both operands are violated, and then reports both.
//! - [`Constraint::invert`] negates leaves and swaps `And`/`Or` (De Morgan),
//!   so inverting twice restores the original shape.
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_fluent_validation::constraint::{Constraint, PredicateConstraint};
//! use nebula_fluent_validation::member::MemberValue;
//!
//! let age = MemberValue::new(15);
//! let non_negative = PredicateConstraint::new("Age", age.clone(), |a| *a >= 0, "negative");
//! let adult = PredicateConstraint::new("Age", age, |a| *a >= 18, "too young");
//! let chain = Constraint::null()
//!     .and(Constraint::leaf(non_negative))
//!     .and(Constraint::leaf(adult));
//!
//! let mut sink = Vec::new();
//! assert_eq!(chain.accept(Some(&mut sink)), 1);
//! ```

mod predicate;

pub use predicate::{LeafConstraint, PredicateConstraint};

use crate::foundation::ErrorMessageConsumer;
use std::rc::Rc;

/// An evaluable node reporting zero or more errors.
#[derive(Debug, Clone, Default)]
pub enum Constraint {
    /// Reports nothing.
    #[default]
    Null,
    /// A single check.
    Leaf(Rc<dyn LeafConstraint>),
    /// Right is evaluated only if left reported no error.
    And(Rc<Constraint>, Rc<Constraint>),
    /// Violated only if both sides are violated.
    Or(Rc<Constraint>, Rc<Constraint>),
}

impl Constraint {
    /// Returns the empty constraint.
    #[must_use]
    pub fn null() -> Self {
        Self::Null
    }

    /// Wraps a leaf.
    pub fn leaf(leaf: impl LeafConstraint + 'static) -> Self {
        Self::Leaf(Rc::new(leaf))
    }

    /// Appends `next` after `self`, short-circuit style.
    ///
    /// [`Constraint::Null`] on either side returns the other operand unchanged.
    #[must_use]
    pub fn and(&self, next: Constraint) -> Constraint {
        match (self, next) {
            (Self::Null, next) => next,
            (this, Self::Null) => this.clone(),
            (this, next) => Self::And(Rc::new(this.clone()), Rc::new(next)),
        }
    }

    /// Appends a predicate leaf, evaluating it right away if `consumer` is given.
    ///
    /// The leaf is part of the returned chain either way, so an eager
    /// evaluation is repeated when the chain itself is evaluated later.
    #[must_use]
    pub fn and_leaf<T: 'static>(
        &self,
        leaf: PredicateConstraint<T>,
        consumer: Option<&mut (dyn ErrorMessageConsumer + '_)>,
    ) -> Constraint {
        if consumer.is_some() {
            leaf.accept(consumer);
        }
        self.and(Self::leaf(leaf))
    }

    /// Combines `self` and `other` so that satisfying either one suffices.
    ///
    /// [`Constraint::Null`] is always satisfied, so it absorbs the other operand.
    #[must_use]
    pub fn or(&self, other: Constraint) -> Constraint {
        match (self, other) {
            (Self::Null, _) | (_, Self::Null) => Self::Null,
            (this, other) => Self::Or(Rc::new(this.clone()), Rc::new(other)),
        }
    }

    /// Returns the logical negation of this constraint.
    ///
    /// [`Constraint::Null`] has no predicate and is its own inverse. Since
    /// `and` and `or` never nest it, every non-null tree is negated exactly.
    #[must_use]
    pub fn invert(&self) -> Constraint {
        match self {
            Self::Null => Self::Null,
            Self::Leaf(leaf) => Self::Leaf(leaf.inverted()),
            Self::And(left, right) => Self::Or(Rc::new(left.invert()), Rc::new(right.invert())),
            Self::Or(left, right) => Self::And(Rc::new(left.invert()), Rc::new(right.invert())),
        }
    }

    /// Evaluates the tree and reports violations to `consumer`.
    ///
    /// Returns the number of errors reported. Without a consumer, leaves are
    /// still evaluated but report nothing, so the result is always 0.
    pub fn accept(&self, mut consumer: Option<&mut (dyn ErrorMessageConsumer + '_)>) -> usize {
        match self {
            Self::Null => 0,
            Self::Leaf(leaf) => leaf.accept(consumer),
            Self::And(left, right) => {
                let errors = left.accept(consumer.as_deref_mut());
                if errors > 0 {
                    errors
                } else {
                    right.accept(consumer)
                }
            }
            Self::Or(left, right) => {
                if self.is_satisfied() {
                    0
                } else {
                    left.accept(consumer.as_deref_mut()) + right.accept(consumer)
                }
            }
        }
    }

    /// Evaluates the tree without reporting.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Leaf(leaf) => leaf.is_satisfied(),
            Self::And(left, right) => left.is_satisfied() && right.is_satisfied(),
            Self::Or(left, right) => left.is_satisfied() || right.is_satisfied(),
        }
    }

    /// Returns true for the empty constraint.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the number of leaves in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Null => 0,
            Self::Leaf(_) => 1,
            Self::And(left, right) | Self::Or(left, right) => {
                left.leaf_count() + right.leaf_count()
            }
        }
    }
}

/// Structural equality; leaves compare by identity.
impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Leaf(a), Self::Leaf(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            (Self::And(a1, a2), Self::And(b1, b2)) | (Self::Or(a1, a2), Self::Or(b1, b2)) => {
                a1 == b1 && a2 == b2
            }
            _ => false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
