//! Declaration macros
//!
//! - [`verify_that!`] registers a message field under its own name

// ============================================================================
// VERIFY THAT
// ============================================================================

/// Registers a field of a message as a member named after the field.
///
/// `verify_that!(validator, message.field)` is shorthand for
/// `validator.verify_that(message.field.clone(), "field")`. An explicit name
/// can be given as a third argument.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_fluent_validation::{verify_that, prelude::*};
///
/// let mut validator = FluentValidator::new();
/// verify_that!(validator, signup.email)?.is_not_blank("required");
/// verify_that!(validator, signup.age, "Age")?.is_greater_than(17, "too young")?;
/// ```
#[macro_export]
macro_rules! verify_that {
    ($validator:expr, $message:ident . $field:ident) => {
        $validator.verify_that(
            ::std::clone::Clone::clone(&$message.$field),
            stringify!($field),
        )
    };
    ($validator:expr, $value:expr, $name:expr $(,)?) => {
        $validator.verify_that($value, $name)
    };
}
