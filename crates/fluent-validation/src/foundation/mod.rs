//! Foundation types shared by every layer
//!
//! - **Messages**: [`ErrorMessage`], a lazily formatted template
//! - **Sinks**: [`ErrorMessageConsumer`]
//! - **Results**: [`ValidationErrorTree`], [`ValidationErrorTreeBuilder`]
//! - **Errors**: [`SpecificationError`] for misuse of the declaration API
//!
//! The two error channels never mix: declaring something invalid returns a
//! [`SpecificationError`] immediately, while invalid *data* is only ever
//! reported as text inside a [`ValidationErrorTree`].

pub mod consumer;
pub mod error;
pub mod message;
pub mod tree;

pub use consumer::ErrorMessageConsumer;
pub use error::{SpecificationError, SpecificationResult};
pub use message::ErrorMessage;
pub use tree::{ValidationErrorTree, ValidationErrorTreeBuilder};
