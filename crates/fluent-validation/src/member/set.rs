//! Member registry of one validation session

use crate::constraint::{Constraint, LeafConstraint, PredicateConstraint};
use crate::foundation::{ErrorMessageConsumer, SpecificationError, SpecificationResult};
use crate::member::{Member, MemberValue};
use indexmap::IndexMap;
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

// ============================================================================
// KEYS AND RECORDS
// ============================================================================

/// Stable handle of a registered member.
///
/// Narrowing a member keeps its slot but bumps the generation, so keys
/// issued before the narrowing no longer resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberKey {
    index: usize,
    generation: u32,
}

impl MemberKey {
    /// Position of the member in registration order.
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Number of narrowings the slot went through when this key was issued.
    #[must_use]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// A member as seen through the set: name, value type and constraint chain.
pub struct RegisteredMember {
    name: Rc<str>,
    generation: u32,
    type_id: TypeId,
    type_name: &'static str,
    constraint: Constraint,
    value: Box<dyn Any>,
}

impl RegisteredMember {
    fn new<T: 'static>(name: Rc<str>, generation: u32, value: MemberValue<T>) -> Self {
        Self {
            name,
            generation,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            constraint: Constraint::Null,
            value: Box::new(value),
        }
    }

    /// Returns the member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the value type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns true if the member currently holds values of type `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Returns the accumulated constraint chain.
    #[must_use]
    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    /// Evaluates the chain and reports violations to `consumer`.
    pub fn add_error_messages_to(&self, consumer: &mut dyn ErrorMessageConsumer) -> usize {
        self.constraint.accept(Some(consumer))
    }
}

impl fmt::Debug for RegisteredMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredMember")
            .field("name", &self.name)
            .field("generation", &self.generation)
            .field("type_name", &self.type_name)
            .field("constraint", &self.constraint)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// MEMBER SET
// ============================================================================

type SharedConsumer = Rc<RefCell<dyn ErrorMessageConsumer>>;

/// Owns every member of one validation session, keyed by name.
///
/// Members are enumerated and reported in registration order. A set may be
/// bound to a consumer, in which case narrowing checks (`is_not_null`,
/// `is_instance_of`, ...) are also reported to it as soon as they are
/// declared. They remain part of the member's chain regardless.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fluent_validation::member::{MemberSet, MemberValue};
/// use nebula_fluent_validation::foundation::ValidationErrorTreeBuilder;
///
/// let mut set = MemberSet::new();
/// set.add("Age", MemberValue::new(15))?
///     .satisfies(|age| *age >= 18, "too young");
///
/// let mut builder = ValidationErrorTreeBuilder::new();
/// assert_eq!(set.add_error_messages_to(&mut builder), 1);
/// ```
#[derive(Default)]
pub struct MemberSet {
    consumer: Option<SharedConsumer>,
    members: IndexMap<Rc<str>, RegisteredMember>,
}

impl MemberSet {
    /// Creates a set that defers every check to validation time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set that also reports narrowing checks to `consumer` at
    /// declaration.
    pub fn with_consumer<C>(consumer: Rc<RefCell<C>>) -> Self
    where
        C: ErrorMessageConsumer + 'static,
    {
        Self {
            consumer: Some(consumer),
            members: IndexMap::new(),
        }
    }

    /// Returns true if narrowing checks are reported at declaration.
    #[must_use]
    pub fn has_consumer(&self) -> bool {
        self.consumer.is_some()
    }

    /// Registers a member and returns a handle to declare its constraints.
    ///
    /// Fails if `name` is empty or already registered.
    pub fn add<T: 'static>(
        &mut self,
        name: impl Into<String>,
        value: MemberValue<T>,
    ) -> SpecificationResult<Member<'_, T>> {
        let name: String = name.into();
        if name.is_empty() {
            return Err(SpecificationError::EmptyMemberName);
        }
        if self.members.contains_key(name.as_str()) {
            return Err(SpecificationError::duplicate_member(name));
        }

        let name: Rc<str> = Rc::from(name);
        let (index, _) = self.members.insert_full(
            Rc::clone(&name),
            RegisteredMember::new(Rc::clone(&name), 0, value.clone()),
        );
        tracing::trace!(member = %name, index, "member registered");

        let key = MemberKey {
            index,
            generation: 0,
        };
        Ok(Member::attach(self, key, name, value))
    }

    /// Swaps the member behind `old` for a member of another type.
    ///
    /// The replacement keeps the name, the position and the constraint chain
    /// of the original. Returns the new key, or `None` without touching the
    /// set if `old` no longer refers to a registered member.
    pub fn replace<U: 'static>(
        &mut self,
        old: MemberKey,
        value: MemberValue<U>,
    ) -> Option<MemberKey> {
        let Some((_, record)) = self.members.get_index_mut(old.index) else {
            return None;
        };
        if record.generation != old.generation {
            tracing::debug!(
                member = %record.name,
                stale = old.generation,
                current = record.generation,
                "replacement ignored: member already replaced"
            );
            return None;
        }

        let generation = old.generation + 1;
        let mut replacement = RegisteredMember::new(Rc::clone(&record.name), generation, value);
        replacement.constraint = std::mem::take(&mut record.constraint);
        tracing::trace!(
            member = %record.name,
            from = record.type_name,
            to = replacement.type_name,
            "member replaced"
        );
        *record = replacement;

        Some(MemberKey {
            index: old.index,
            generation,
        })
    }

    /// Returns a typed handle to a registered member.
    ///
    /// Returns `None` if no member has that name or its current type is not `T`.
    pub fn member<T: 'static>(&mut self, name: &str) -> Option<Member<'_, T>> {
        let (index, _, record) = self.members.get_full(name)?;
        let value = record.value.downcast_ref::<MemberValue<T>>()?.clone();
        let key = MemberKey {
            index,
            generation: record.generation,
        };
        let name = Rc::clone(&record.name);
        Some(Member::attach(self, key, name, value))
    }

    /// Returns the member registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegisteredMember> {
        self.members.get(name)
    }

    /// Returns the member behind `key`, unless the key is stale.
    #[must_use]
    pub fn get_by_key(&self, key: MemberKey) -> Option<&RegisteredMember> {
        self.members
            .get_index(key.index)
            .map(|(_, record)| record)
            .filter(|record| record.generation == key.generation)
    }

    /// Returns true if a member is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Returns the number of registered members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if no member is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the members in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredMember> {
        self.members.values()
    }

    /// Evaluates every member and reports violations to `consumer`.
    ///
    /// Members are evaluated independently: a violation on one member never
    /// suppresses the evaluation of another. Returns the number of errors.
    pub fn add_error_messages_to(&self, consumer: &mut dyn ErrorMessageConsumer) -> usize {
        self.members
            .values()
            .map(|record| record.add_error_messages_to(consumer))
            .sum()
    }

    /// Appends `constraint` to the chain behind `key`.
    pub(crate) fn append(&mut self, key: MemberKey, constraint: Constraint) {
        match self.record_mut(key) {
            Some(record) => record.constraint = record.constraint.and(constraint),
            None => tracing::debug!(?key, "constraint ignored: member no longer registered"),
        }
    }

    /// Returns the chain behind `key`, or the empty chain for a stale key.
    pub(crate) fn constraint_of(&self, key: MemberKey) -> Constraint {
        self.get_by_key(key)
            .map(|record| record.constraint.clone())
            .unwrap_or_default()
    }

    /// Appends `guard` to the chain behind `key`, then replaces the member
    /// with `value`.
    ///
    /// With a bound consumer the guard is also reported to it right away. The
    /// guard stays in the chain either way, so later constraints short-circuit
    /// behind it and validation reports it again.
    pub(crate) fn narrow<T: 'static, U: 'static>(
        &mut self,
        key: MemberKey,
        guard: PredicateConstraint<T>,
        value: MemberValue<U>,
    ) -> MemberKey {
        let chain = self.constraint_of(key);
        let chain = match self.consumer.as_ref().map(|consumer| consumer.try_borrow_mut()) {
            Some(Ok(mut consumer)) => {
                tracing::trace!(member = guard.member_name(), "narrowing checked at declaration");
                chain.and_leaf(guard, Some(&mut *consumer))
            }
            Some(Err(_)) => {
                tracing::warn!(
                    member = guard.member_name(),
                    "consumer busy, narrowing check deferred to validation"
                );
                chain.and_leaf(guard, None)
            }
            None => chain.and_leaf(guard, None),
        };
        match self.record_mut(key) {
            Some(record) => record.constraint = chain,
            None => tracing::debug!(?key, "narrowing ignored: member no longer registered"),
        }
        self.replace(key, value).unwrap_or(key)
    }

    fn record_mut(&mut self, key: MemberKey) -> Option<&mut RegisteredMember> {
        self.members
            .get_index_mut(key.index)
            .map(|(_, record)| record)
            .filter(|record| record.generation == key.generation)
    }
}

impl fmt::Debug for MemberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberSet")
            .field("has_consumer", &self.has_consumer())
            .field("members", &self.members.values().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a> IntoIterator for &'a MemberSet {
    type Item = &'a RegisteredMember;
    type IntoIter = indexmap::map::Values<'a, Rc<str>, RegisteredMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.values()
    }
}

// ============================================================================
// TESTS
// ============================================================================
