//! Named constraints for common value shapes
//!
//! Each library is a trait implemented on a concrete [`Member`](crate::member::Member)
//! type and built only from `satisfies` and the relation methods, so custom
//! libraries can be written the same way outside this crate.
//!
//! - [`StringConstraints`] for `Member<String>`
//! - [`CollectionConstraints`] for `Member<Vec<E>>`
//! - [`GuidConstraints`] for `Member<Uuid>` (feature `uuid`)

mod collection;
#[cfg(feature = "uuid")]
mod guid;
mod string;

pub use collection::CollectionConstraints;
#[cfg(feature = "uuid")]
pub use guid::GuidConstraints;
pub use string::StringConstraints;
