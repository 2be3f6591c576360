//! Type narrowing for dynamically typed members

use crate::foundation::ErrorMessage;
use crate::member::Member;
use std::any::{Any, TypeId};
use std::rc::Rc;
use std::sync::Arc;

/// A value whose concrete type is only known at run time.
pub trait DynValue: 'static {
    /// Returns the value as [`Any`].
    fn as_any(&self) -> &dyn Any;

    /// Returns the [`TypeId`] of the concrete value.
    fn concrete_type_id(&self) -> TypeId {
        self.as_any().type_id()
    }
}

impl DynValue for Box<dyn Any> {
    fn as_any(&self) -> &dyn Any {
        &**self
    }
}

impl DynValue for Box<dyn Any + Send> {
    fn as_any(&self) -> &dyn Any {
        &**self
    }
}

impl DynValue for Box<dyn Any + Send + Sync> {
    fn as_any(&self) -> &dyn Any {
        &**self
    }
}

impl DynValue for Rc<dyn Any> {
    fn as_any(&self) -> &dyn Any {
        &**self
    }
}

impl DynValue for Arc<dyn Any + Send + Sync> {
    fn as_any(&self) -> &dyn Any {
        &**self
    }
}

fn downcast<T: DynValue, U: 'static>(value: &T) -> Option<&U> {
    value.as_any().downcast_ref::<U>()
}

impl<'s, T: DynValue> Member<'s, T> {
    /// Requires the value to be a `U` and continues with it typed as `U`.
    ///
    /// The returned member replaces this one in the set under the same name.
    pub fn is_instance_of<U: 'static>(self, message: impl Into<ErrorMessage>) -> Member<'s, U> {
        self.narrow(downcast::<T, U>, message)
    }

    /// Requires the value not to be a `U`.
    pub fn is_not_instance_of<U: 'static>(self, message: impl Into<ErrorMessage>) -> Self {
        self.does_not_satisfy(|value| value.as_any().is::<U>(), message)
    }

    /// Requires the concrete type of the value to be `type_id`.
    pub fn is_instance_of_type(self, type_id: TypeId, message: impl Into<ErrorMessage>) -> Self {
        self.satisfies(move |value| value.concrete_type_id() == type_id, message)
    }

    /// Requires the concrete type of the value not to be `type_id`.
    pub fn is_not_instance_of_type(
        self,
        type_id: TypeId,
        message: impl Into<ErrorMessage>,
    ) -> Self {
        self.does_not_satisfy(move |value| value.concrete_type_id() == type_id, message)
    }
}
