//! Leaf constraints

use crate::foundation::{ErrorMessage, ErrorMessageConsumer};
use crate::member::MemberValue;
use std::fmt;
use std::rc::Rc;

/// A constraint without children.
///
/// Implement this to plug a custom check into a [`Constraint`](super::Constraint)
/// chain; [`PredicateConstraint`] covers every built-in member constraint.
pub trait LeafConstraint: fmt::Debug {
    /// Name of the member the constraint reports against.
    fn member_name(&self) -> &str;

    /// Message reported when the constraint is violated.
    fn message(&self) -> &ErrorMessage;

    /// Evaluates the constraint without reporting.
    fn is_satisfied(&self) -> bool;

    /// Returns the constraint with its outcome negated and the same message.
    fn inverted(&self) -> Rc<dyn LeafConstraint>;

    /// Evaluates the constraint and reports a violation to `consumer`.
    ///
    /// Returns the number of errors reported: without a consumer the
    /// predicate still runs but nothing is reported.
    fn accept(&self, consumer: Option<&mut (dyn ErrorMessageConsumer + '_)>) -> usize {
        if self.is_satisfied() {
            return 0;
        }
        match consumer {
            Some(consumer) => {
                consumer.add(self.member_name(), self.message());
                1
            }
            None => 0,
        }
    }
}

// ============================================================================
// PREDICATE CONSTRAINT
// ============================================================================

/// A predicate over a member's value together with its error message.
///
/// When the value does not apply (a narrowed member whose narrowing failed),
/// the predicate is not run and the constraint counts as satisfied.
pub struct PredicateConstraint<T: 'static> {
    member: Rc<str>,
    value: MemberValue<T>,
    predicate: Rc<dyn Fn(&T) -> bool>,
    message: ErrorMessage,
    negated: bool,
}

impl<T: 'static> PredicateConstraint<T> {
    /// Creates a leaf reporting `message` against `member` when `predicate`
    /// returns false.
    pub fn new<P>(
        member: impl Into<Rc<str>>,
        value: MemberValue<T>,
        predicate: P,
        message: impl Into<ErrorMessage>,
    ) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self {
            member: member.into(),
            value,
            predicate: Rc::new(predicate),
            message: message.into(),
            negated: false,
        }
    }

    /// Returns the predicate outcome, or `None` if the value does not apply.
    pub fn evaluate(&self) -> Option<bool> {
        self.value
            .get()
            .map(|value| (self.predicate)(value) != self.negated)
    }

    /// Returns true if this leaf was produced by an inversion.
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

impl<T: 'static> Clone for PredicateConstraint<T> {
    fn clone(&self) -> Self {
        Self {
            member: Rc::clone(&self.member),
            value: self.value.clone(),
            predicate: Rc::clone(&self.predicate),
            message: self.message.clone(),
            negated: self.negated,
        }
    }
}

impl<T: 'static> LeafConstraint for PredicateConstraint<T> {
    fn member_name(&self) -> &str {
        &self.member
    }

    fn message(&self) -> &ErrorMessage {
        &self.message
    }

    fn is_satisfied(&self) -> bool {
        self.evaluate().unwrap_or(true)
    }

    fn inverted(&self) -> Rc<dyn LeafConstraint> {
        let mut inverted = self.clone();
        inverted.negated = !self.negated;
        Rc::new(inverted)
    }
}

impl<T: 'static> fmt::Debug for PredicateConstraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateConstraint")
            .field("member", &self.member)
            .field("message", &self.message)
            .field("negated", &self.negated)
            .finish_non_exhaustive()
    }
}
