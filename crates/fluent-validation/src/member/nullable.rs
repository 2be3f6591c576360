//! Optional members

use crate::foundation::ErrorMessage;
use crate::member::Member;

fn unwrap_option<V>(value: &Option<V>) -> Option<&V> {
    value.as_ref()
}

impl<'s, V: 'static> Member<'s, Option<V>> {
    /// Requires the value to be absent.
    pub fn is_null(self, message: impl Into<ErrorMessage>) -> Self {
        self.satisfies(Option::is_none, message)
    }

    /// Requires the value to be present and continues with the unwrapped value.
    ///
    /// The returned member replaces this one in the set. When the value is
    /// absent, `message` is reported once and nothing declared on the
    /// unwrapped member is evaluated.
    pub fn is_not_null(self, message: impl Into<ErrorMessage>) -> Member<'s, V> {
        self.narrow(unwrap_option::<V>, message)
    }
}
