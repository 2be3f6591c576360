//! Memoized member values
//!
//! A member's value is produced at most once per session, on first access.
//! Narrowed members do not copy the value: they project into the value of the
//! member they replaced, so both views share a single evaluation.

use std::cell::LazyCell;
use std::fmt;
use std::rc::Rc;

trait ValueSource<T> {
    /// Returns the value, or `None` if a projection did not apply.
    fn get(&self) -> Option<&T>;
}

struct Ready<T>(T);

impl<T> ValueSource<T> for Ready<T> {
    fn get(&self) -> Option<&T> {
        Some(&self.0)
    }
}

struct Deferred<T> {
    cell: LazyCell<T, Box<dyn FnOnce() -> T>>,
}

impl<T> ValueSource<T> for Deferred<T> {
    fn get(&self) -> Option<&T> {
        Some(LazyCell::force(&self.cell))
    }
}

struct Projected<S: 'static, T> {
    source: MemberValue<S>,
    project: fn(&S) -> Option<&T>,
}

impl<S: 'static, T> ValueSource<T> for Projected<S, T> {
    fn get(&self) -> Option<&T> {
        self.source.get().and_then(self.project)
    }
}

// ============================================================================
// MEMBER VALUE
// ============================================================================

/// A shared, memoized value of a member.
///
/// Cloning is cheap and every clone observes the same evaluation.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fluent_validation::member::MemberValue;
///
/// let value = MemberValue::lazy(|| expensive_lookup());
/// let copy = value.clone();
/// value.get(); // runs `expensive_lookup` once
/// copy.get();  // reuses the result
/// ```
pub struct MemberValue<T: 'static> {
    source: Rc<dyn ValueSource<T>>,
}

impl<T: 'static> MemberValue<T> {
    /// Wraps an already computed value.
    pub fn new(value: T) -> Self {
        Self {
            source: Rc::new(Ready(value)),
        }
    }

    /// Wraps an accessor that runs on first access.
    pub fn lazy<F>(accessor: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        let init: Box<dyn FnOnce() -> T> = Box::new(accessor);
        Self {
            source: Rc::new(Deferred {
                cell: LazyCell::new(init),
            }),
        }
    }

    /// Returns a view of this value through `project`.
    ///
    /// The view yields `None` whenever the projection does not apply.
    pub fn project<U: 'static>(&self, project: fn(&T) -> Option<&U>) -> MemberValue<U> {
        MemberValue {
            source: Rc::new(Projected {
                source: self.clone(),
                project,
            }),
        }
    }

    /// Returns the value, evaluating it on first access.
    ///
    /// `None` means this is a projection whose source has a different shape.
    pub fn get(&self) -> Option<&T> {
        self.source.get()
    }
}

impl<T: 'static> Clone for MemberValue<T> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
        }
    }
}

impl<T: 'static> fmt::Debug for MemberValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberValue")
            .field("type", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
