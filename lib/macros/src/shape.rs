//! The item `#[entity_id]` is applied to.

use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned as _;
use syn::{AttrStyle, Attribute, Ident, Item, ItemMod, UseTree, Visibility};

use crate::error::Error;

/// Names of the items the macro generates inside the module.
pub const RESERVED: [&str; 3] = ["Id", "Tag", "Unsafe"];

/// A validated `mod name { ... }`.
#[derive(Debug, Clone)]
pub struct Shape
{
	/// Outer attributes, in source order.
	pub attrs: Vec<Attribute>,

	/// Inner `#![...]` attributes, in source order.
	pub inner_attrs: Vec<Attribute>,

	pub vis: Visibility,
	pub ident: Ident,

	/// The existing members.
	pub items: Vec<Item>,
}

impl Shape
{
	/// The entity's name, without any `r#` prefix.
	pub fn entity_name(&self) -> String
	{
		let name = self.ident.to_string();

		match name.strip_prefix("r#") {
			Some(stripped) => stripped.to_owned(),
			None => name,
		}
	}
}

impl Parse for Shape
{
	fn parse(input: ParseStream<'_>) -> syn::Result<Self>
	{
		let span = input.span();
		let item = input
			.parse::<Item>()
			.map_err(|_| syn::Error::from(Error::shape(span)))?;

		if !input.is_empty() {
			return Err(Error::shape(input.span()).into());
		}

		Self::try_from(item).map_err(Into::into)
	}
}

impl TryFrom<Item> for Shape
{
	type Error = Error;

	fn try_from(item: Item) -> Result<Self, Self::Error>
	{
		let span = item.span();
		let Item::Mod(ItemMod { attrs, vis, unsafety, ident, content, .. }) = item else {
			return Err(Error::shape(span));
		};

		if let Some(unsafety) = unsafety {
			return Err(Error::shape_with(unsafety.span, "`unsafe mod` is not supported"));
		}

		let Some((_, items)) = content else {
			return Err(Error::shape_with(ident.span(), "out-of-line modules cannot be expanded"));
		};

		if let Some((name, span)) = items.iter().find_map(reserved_name) {
			return Err(Error::shape_with(
				span,
				format!("`{name}` is generated by the macro and cannot be declared in `{ident}`"),
			));
		}

		let (inner_attrs, attrs) = attrs
			.into_iter()
			.partition::<Vec<_>, _>(|attr| matches!(attr.style, AttrStyle::Inner(_)));

		Ok(Self { attrs, inner_attrs, vis, ident, items })
	}
}

/// Returns the name of `item` if it collides with one of the generated items.
fn reserved_name(item: &Item) -> Option<(&'static str, proc_macro2::Span)>
{
	let ident = match item {
		Item::Const(item) => &item.ident,
		Item::Enum(item) => &item.ident,
		Item::Fn(item) => &item.sig.ident,
		Item::Mod(item) => &item.ident,
		Item::Static(item) => &item.ident,
		Item::Struct(item) => &item.ident,
		Item::Trait(item) => &item.ident,
		Item::TraitAlias(item) => &item.ident,
		Item::Type(item) => &item.ident,
		Item::Union(item) => &item.ident,
		Item::ExternCrate(item) => item.rename.as_ref().map_or(&item.ident, |(_, rename)| rename),
		Item::Macro(item) => item.ident.as_ref()?,
		Item::Use(item) => return reserved_import(&item.tree),
		_ => return None,
	};

	reserved(ident)
}

/// Returns the first name brought into scope by `tree` that collides with a generated item.
fn reserved_import(tree: &UseTree) -> Option<(&'static str, proc_macro2::Span)>
{
	match tree {
		UseTree::Path(path) => reserved_import(&path.tree),
		UseTree::Name(name) => reserved(&name.ident),
		UseTree::Rename(rename) => reserved(&rename.rename),
		UseTree::Group(group) => group.items.iter().find_map(reserved_import),
		UseTree::Glob(_) => None,
	}
}

fn reserved(ident: &Ident) -> Option<(&'static str, proc_macro2::Span)>
{
	RESERVED
		.into_iter()
		.find(|name| ident == name)
		.map(|name| (name, ident.span()))
}
