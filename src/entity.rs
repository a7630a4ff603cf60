//! The interface shared by all generated ids.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use uuid::Uuid;

use crate::ParseIdError;

/// Implemented by every `Id` generated with [`#[entity_id]`](crate::entity_id).
///
/// Useful for code that handles ids of arbitrary entities, like repositories or caches:
///
/// ```
/// use entity_id::EntityId;
///
/// #[entity_id::entity_id]
/// mod user {}
///
/// fn describe<I: EntityId>(id: I) -> String {
///     format!("{} {}", I::ENTITY, id)
/// }
///
/// let id = entity_id::id!(user::Id, "67e55044-10b1-426f-9247-bb680e5fe0c8");
///
/// assert_eq!(describe(id), "user 67e55044-10b1-426f-9247-bb680e5fe0c8");
/// ```
pub trait EntityId:
	Copy
	+ Eq
	+ Ord
	+ Hash
	+ fmt::Display
	+ fmt::Debug
	+ FromStr<Err = ParseIdError>
	+ From<Uuid>
	+ Into<Uuid>
	+ AsRef<Uuid>
	+ Send
	+ Sync
	+ 'static
{
	/// Name of the entity, i.e. the name of the annotated module.
	const ENTITY: &'static str;
}
