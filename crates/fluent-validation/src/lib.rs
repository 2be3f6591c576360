//! # nebula-fluent-validation
//!
//! Fluent, member-oriented validation of Nebula messages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_fluent_validation::prelude::*;
//!
//! let mut validator = FluentValidator::new();
//! validator.verify_that(15, "Age")?.is_greater_than(18, "too young")?;
//! validator
//!     .verify_that(Some("ada".to_owned()), "Nick")?
//!     .is_not_null("required")
//!     .has_min_length(2, "too short");
//!
//! let tree = validator.validate();
//! assert_eq!(tree.errors_for("Age"), ["too young"]);
//! ```
//!
//! ## Two error channels
//!
//! Misuse of the API (duplicate member names, reversed ranges, orderings on
//! `NaN`) fails at declaration with a [`SpecificationError`](foundation::SpecificationError).
//! Invalid data never fails: it is reported as rendered messages in the
//! [`ValidationErrorTree`](foundation::ValidationErrorTree), keyed by member.
//!
//! ## Evaluation
//!
//! - Constraints of one member run in declaration order and stop at the first
//!   violation.
//! - Members are evaluated independently of each other.
//! - A member's value is computed at most once per session.
//! - Narrowing (`is_not_null`, `is_instance_of`, [`Member::narrow`](member::Member::narrow))
//!   swaps the member for one of the narrower type under the same name.

pub mod compare;
pub mod constraint;
pub mod constraints;
pub mod foundation;
mod macros;
pub mod member;
pub mod prelude;
pub mod validator;

pub use foundation::{SpecificationError, SpecificationResult, ValidationErrorTree};
pub use validator::{FluentValidator, ValidateMessage};
