//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use nebula_fluent_validation::prelude::*;
//!
//! let mut validator = FluentValidator::new();
//! validator.verify_that("ada".to_owned(), "Name")?.has_min_length(2, "too short");
//! let tree = validator.validate();
//! ```

// ============================================================================
// FOUNDATION: Messages, sinks, errors
// ============================================================================

pub use crate::foundation::{
    ErrorMessage, ErrorMessageConsumer, SpecificationError, SpecificationResult,
    ValidationErrorTree, ValidationErrorTreeBuilder,
};

// ============================================================================
// CONSTRAINTS AND ADAPTERS
// ============================================================================

pub use crate::compare::{
    Bounds, Comparable, CompareTo, Comparer, EqualTo, Equatable, EqualityComparer, Range,
    RangeOptions,
};
pub use crate::constraint::{Constraint, LeafConstraint, PredicateConstraint};

// ============================================================================
// MEMBERS AND SESSIONS
// ============================================================================

pub use crate::member::{DynValue, Member, MemberKey, MemberSet, MemberValue, RegisteredMember};
pub use crate::validator::{FluentValidator, ValidateMessage};

// ============================================================================
// NAMED CONSTRAINT LIBRARIES
// ============================================================================

pub use crate::constraints::{CollectionConstraints, StringConstraints};

#[cfg(feature = "uuid")]
pub use crate::constraints::GuidConstraints;
