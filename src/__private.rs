//! Items used by generated code.
//!
//! Nothing in here is part of the public API.

pub use uuid::Uuid;

#[cfg(feature = "serde")]
pub use serde;

#[cfg(feature = "sqlx")]
pub use sqlx;

use crate::ParseIdError;

/// Draws a random (version 4) UUID.
#[inline]
pub fn random_uuid() -> Uuid
{
	Uuid::new_v4()
}

/// Parses `input` the same way `id!` does at compile time.
pub fn parse_uuid(entity: &'static str, input: &str) -> Result<Uuid, ParseIdError>
{
	Uuid::parse_str(input).map_err(|source| ParseIdError::new(entity, input, source))
}

/// Implements `Serialize` and `Deserialize` for a generated id, if the `serde` feature is
/// enabled.
#[cfg(feature = "serde")]
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_serde {
	($id:ty) => {
		impl $crate::__private::serde::Serialize for $id
		{
			fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
			where
				S: $crate::__private::serde::Serializer,
			{
				<$crate::__private::Uuid as $crate::__private::serde::Serialize>::serialize(
					self.as_uuid(),
					serializer,
				)
			}
		}

		impl<'de> $crate::__private::serde::Deserialize<'de> for $id
		{
			fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
			where
				D: $crate::__private::serde::Deserializer<'de>,
			{
				<$crate::__private::Uuid as $crate::__private::serde::Deserialize<'de>>::deserialize(
					deserializer,
				)
				.map(Self::from_uuid)
			}
		}
	};
}

/// Implements `Serialize` and `Deserialize` for a generated id, if the `serde` feature is
/// enabled.
#[cfg(not(feature = "serde"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_serde {
	($id:ty) => {};
}
