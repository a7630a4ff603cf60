//! Generates the replacement module for `#[entity_id]`.
//!
//! The output only depends on the parsed [`Config`] and [`Shape`], so
//! expanding the same input twice yields the same tokens.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::Config;
use crate::shape::Shape;

/// Builds the module that replaces the annotated one.
pub fn expand(config: &Config, shape: &Shape) -> TokenStream
{
	let Shape { attrs, inner_attrs, vis, ident, items } = shape;

	let tag = tag(shape);
	let id = id(shape);
	let companion = companion(shape);
	let instances = instances();
	let conversions = conversions();
	let adapter = config.sqlx.then(adapter);

	quote! {
		#(#attrs)*
		#vis mod #ident {
			#(#inner_attrs)*

			#tag
			#id
			#companion
			#instances
			#conversions
			#adapter

			#(#items)*
		}
	}
}

fn tag(shape: &Shape) -> TokenStream
{
	let doc = format!("Marker type that makes [`Id`] unique to `{}`.", shape.entity_name());

	quote! {
		#[doc = #doc]
		///
		/// This type has no values and only ever appears as a type parameter.
		#[derive(Debug, Clone, Copy)]
		pub enum Tag {}
	}
}

fn id(shape: &Shape) -> TokenStream
{
	let doc = format!("Unique identifier of a `{}`.", shape.entity_name());

	quote! {
		#[doc = #doc]
		#[repr(transparent)]
		#[derive(Clone, Copy)]
		pub struct Id
		{
			value: ::entity_id::__private::Uuid,
			tag: ::core::marker::PhantomData<Tag>,
		}
	}
}

/// The construction paths and accessors.
fn companion(shape: &Shape) -> TokenStream
{
	let entity = shape.entity_name();

	quote! {
		impl Id
		{
			/// Name of the entity this id belongs to.
			pub const ENTITY: &'static str = #entity;

			/// Wraps an existing UUID.
			#[inline]
			pub const fn from_uuid(value: ::entity_id::__private::Uuid) -> Self
			{
				Self { value, tag: ::core::marker::PhantomData }
			}

			/// Returns a reference to the wrapped UUID.
			#[inline]
			pub const fn as_uuid(&self) -> &::entity_id::__private::Uuid
			{
				&self.value
			}

			/// Unwraps the UUID.
			#[inline]
			pub const fn into_uuid(self) -> ::entity_id::__private::Uuid
			{
				self.value
			}

			/// Generates a random id inside the effect `E`.
			///
			/// Nothing is drawn until `E` runs the returned computation.
			pub fn random<E>() -> <E as ::entity_id::Effect>::Output<Self>
			where
				E: ::entity_id::Effect,
			{
				<E as ::entity_id::Effect>::suspend(|| Self::from_uuid(::entity_id::__private::random_uuid()))
			}
		}

		/// Constructors that give up the guarantees of their safe counterparts.
		#[derive(Debug, Clone, Copy)]
		pub enum Unsafe {}

		impl Unsafe
		{
			/// Generates a random id right now, on the current thread.
			///
			/// This is [`Id::random()`] with the draw happening immediately instead of being
			/// deferred to an effect. It does not need an executor.
			pub fn random() -> Id
			{
				Id::random::<::entity_id::Immediate>()
			}
		}
	}
}

/// Equality, ordering, hashing and formatting, all in terms of the wrapped UUID.
fn instances() -> TokenStream
{
	quote! {
		impl ::core::cmp::PartialEq for Id
		{
			#[inline]
			fn eq(&self, other: &Self) -> bool
			{
				::core::cmp::PartialEq::eq(&self.value, &other.value)
			}
		}

		impl ::core::cmp::Eq for Id {}

		impl ::core::cmp::PartialOrd for Id
		{
			#[inline]
			fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering>
			{
				::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
			}
		}

		impl ::core::cmp::Ord for Id
		{
			#[inline]
			fn cmp(&self, other: &Self) -> ::core::cmp::Ordering
			{
				::core::cmp::Ord::cmp(&self.value, &other.value)
			}
		}

		impl ::core::hash::Hash for Id
		{
			fn hash<H: ::core::hash::Hasher>(&self, state: &mut H)
			{
				::core::hash::Hash::hash(&self.value, state);
			}
		}

		impl ::core::fmt::Display for Id
		{
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result
			{
				::core::fmt::Display::fmt(&self.value, f)
			}
		}

		impl ::core::fmt::Debug for Id
		{
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result
			{
				f.debug_tuple("Id").field(&self.value).finish()
			}
		}
	}
}

fn conversions() -> TokenStream
{
	quote! {
		impl ::core::convert::From<::entity_id::__private::Uuid> for Id
		{
			fn from(value: ::entity_id::__private::Uuid) -> Self
			{
				Self::from_uuid(value)
			}
		}

		impl ::core::convert::From<Id> for ::entity_id::__private::Uuid
		{
			fn from(id: Id) -> Self
			{
				id.value
			}
		}

		impl ::core::convert::AsRef<::entity_id::__private::Uuid> for Id
		{
			fn as_ref(&self) -> &::entity_id::__private::Uuid
			{
				&self.value
			}
		}

		impl ::core::str::FromStr for Id
		{
			type Err = ::entity_id::ParseIdError;

			fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err>
			{
				::entity_id::__private::parse_uuid(Self::ENTITY, s).map(Self::from_uuid)
			}
		}

		impl ::entity_id::EntityId for Id
		{
			const ENTITY: &'static str = Id::ENTITY;
		}

		::entity_id::__impl_serde!(Id);
	}
}

/// `sqlx` support, delegating to the wrapped UUID's implementations.
///
/// Everything lives inside a single anonymous `const` so the module gains exactly one item.
fn adapter() -> TokenStream
{
	quote! {
		const _: () = {
			use ::entity_id::__private::sqlx;
			use ::entity_id::__private::Uuid;

			impl<DB> sqlx::Type<DB> for Id
			where
				DB: sqlx::Database,
				Uuid: sqlx::Type<DB>,
			{
				fn type_info() -> <DB as sqlx::Database>::TypeInfo
				{
					<Uuid as sqlx::Type<DB>>::type_info()
				}

				fn compatible(ty: &<DB as sqlx::Database>::TypeInfo) -> bool
				{
					<Uuid as sqlx::Type<DB>>::compatible(ty)
				}
			}

			impl<'q, DB> sqlx::Encode<'q, DB> for Id
			where
				DB: sqlx::Database,
				Uuid: sqlx::Encode<'q, DB>,
			{
				fn encode_by_ref(
					&self,
					buf: &mut <DB as sqlx::Database>::ArgumentBuffer<'q>,
				) -> ::core::result::Result<sqlx::encode::IsNull, sqlx::error::BoxDynError>
				{
					<Uuid as sqlx::Encode<'q, DB>>::encode_by_ref(&self.value, buf)
				}

				fn produces(&self) -> ::core::option::Option<<DB as sqlx::Database>::TypeInfo>
				{
					<Uuid as sqlx::Encode<'q, DB>>::produces(&self.value)
				}

				fn size_hint(&self) -> usize
				{
					<Uuid as sqlx::Encode<'q, DB>>::size_hint(&self.value)
				}
			}

			impl<'r, DB> sqlx::Decode<'r, DB> for Id
			where
				DB: sqlx::Database,
				Uuid: sqlx::Decode<'r, DB>,
			{
				fn decode(
					value: <DB as sqlx::Database>::ValueRef<'r>,
				) -> ::core::result::Result<Self, sqlx::error::BoxDynError>
				{
					<Uuid as sqlx::Decode<'r, DB>>::decode(value).map(Self::from_uuid)
				}
			}
		};
	}
}
