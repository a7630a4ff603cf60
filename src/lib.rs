#![doc = include_str!("../README.md")]

/// Generates a strongly-typed id inside the annotated module.
///
/// The module gains the following items:
///
/// - `Tag`, an uninhabited marker type that makes the module's `Id` distinct from every other
///   entity's `Id`
/// - `Id`, a transparent wrapper around a [`Uuid`] with `from_uuid`, `as_uuid`, `into_uuid`
///   and `random`, as well as `Eq`, `Ord`, `Hash`, `Display`, `Debug`, [`FromStr`] and
///   conversions from and into [`Uuid`]
/// - `Unsafe`, holding `Unsafe::random()`, which draws an id eagerly
/// - with `sqlx = true` (requires the `sqlx` feature): `sqlx::Type`, `sqlx::Encode` and
///   `sqlx::Decode` for every database that supports [`Uuid`]
///
/// The module's own items are kept as-is and placed after the generated ones.
///
/// # Arguments
///
/// ```ignore
/// #[entity_id]              // no adapter
/// #[entity_id(true)]        // with the `sqlx` adapter
/// #[entity_id(sqlx = true)] // same as above
/// ```
///
/// Anything else fails to compile with an error pointing at the arguments:
///
/// ```compile_fail
/// #[entity_id::entity_id(sqlx = "yes")]
/// mod user {}
/// ```
///
/// ```compile_fail
/// #[entity_id::entity_id(false, true)]
/// mod user {}
/// ```
///
/// # Shape
///
/// The macro only accepts a named module with an inline body:
///
/// ```compile_fail
/// #[entity_id::entity_id]
/// struct User;
/// ```
///
/// ```compile_fail
/// #[entity_id::entity_id]
/// fn user() {}
/// ```
///
/// [`FromStr`]: std::str::FromStr
pub use entity_id_macros::entity_id;

/// Constructs an `Id` from a UUID literal.
///
/// The literal is parsed while compiling, using the same grammar as [`Uuid`]'s `FromStr`
/// implementation, and the resulting value is a constant. Invalid literals are compile errors:
///
/// ```
/// #[entity_id::entity_id]
/// mod user {}
///
/// let id = entity_id::id!(user::Id, "123e4567-e89b-12d3-a456-426614174000");
///
/// assert_eq!(id.to_string(), "123e4567-e89b-12d3-a456-426614174000");
/// ```
///
/// ```compile_fail
/// #[entity_id::entity_id]
/// mod user {}
///
/// let id = entity_id::id!(user::Id, "not-a-uuid");
/// ```
///
/// Only string literals are accepted. Use [`str::parse()`] for text only known at runtime:
///
/// ```compile_fail
/// #[entity_id::entity_id]
/// mod user {}
///
/// let text = String::from("123e4567-e89b-12d3-a456-426614174000");
/// let id = entity_id::id!(user::Id, text);
/// ```
pub use entity_id_macros::id;

#[doc(no_inline)]
pub use uuid::Uuid;

mod entity;

#[doc(inline)]
pub use entity::EntityId;

pub mod effect;

#[doc(inline)]
pub use effect::{Boxed, Deferred, Effect, Immediate};

#[cfg(feature = "tokio")]
#[doc(inline)]
pub use effect::Blocking;

mod error;

#[doc(inline)]
pub use error::ParseIdError;

#[doc(hidden)]
pub mod __private;
