//! Guid constraints

use crate::foundation::ErrorMessage;
use crate::member::Member;
use uuid::{Uuid, Version};

/// Named constraints on identifier members.
pub trait GuidConstraints: Sized {
    /// Rejects the nil identifier.
    fn is_not_empty(self, message: impl Into<ErrorMessage>) -> Self;

    /// Requires the identifier to be of `version`.
    fn has_version(self, version: Version, message: impl Into<ErrorMessage>) -> Self;
}

impl GuidConstraints for Member<'_, Uuid> {
    fn is_not_empty(self, message: impl Into<ErrorMessage>) -> Self {
        self.satisfies(|id| !id.is_nil(), message)
    }

    fn has_version(self, version: Version, message: impl Into<ErrorMessage>) -> Self {
        self.satisfies(move |id| id.get_version() == Some(version), message)
    }
}
