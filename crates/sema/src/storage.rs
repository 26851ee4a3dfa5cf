//! Short-circuiting traversal of a nominal's direct storage.

use serde::{Deserialize, Serialize};
use tilde_model::{NominalKind, NominalShape, ResolvedType, SourceLoc};

/// What kind of storage a member is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKind {
	/// Stored field of a struct or class.
	Field,
	/// Payload of an enum case.
	VariantPayload,
}

/// One unit of storage handed to a [`walk`] predicate.
#[derive(Debug, Clone, Copy)]
pub struct StorageMember<'a> {
	/// Field or case name.
	pub name: &'a str,
	/// Type resolved in the enclosing declaration's context.
	pub ty: &'a ResolvedType,
	pub kind: StorageKind,
	pub loc: Option<SourceLoc>,
}

impl StorageMember<'_> {
	/// Returns `true` for enum case payloads.
	pub fn is_variant_payload(&self) -> bool {
		self.kind == StorageKind::VariantPayload
	}
}

/// Visits the storage of `shape` in declaration order until `predicate` returns `true`.
///
/// Structs and classes yield their stored fields; enums yield the payloads of
/// cases that carry one. Other kinds have no storage. Returns `true` iff the
/// walk was stopped by the predicate.
pub fn walk<'a>(shape: &'a NominalShape, mut predicate: impl FnMut(StorageMember<'a>) -> bool) -> bool {
	match shape.kind {
		NominalKind::Struct | NominalKind::Class => shape.fields.iter().any(|field| {
			predicate(StorageMember {
				name: &field.name,
				ty: &field.ty,
				kind: StorageKind::Field,
				loc: field.loc,
			})
		}),
		NominalKind::Enum => shape.cases.iter().any(|case| {
			let Some(payload) = &case.payload else {
				return false;
			};
			predicate(StorageMember {
				name: &case.name,
				ty: payload,
				kind: StorageKind::VariantPayload,
				loc: case.loc,
			})
		}),
		NominalKind::Protocol | NominalKind::Other => false,
	}
}

/// Returns the first member satisfying `predicate`, in [`walk`] order.
pub fn find<'a>(shape: &'a NominalShape, mut predicate: impl FnMut(&StorageMember<'a>) -> bool) -> Option<StorageMember<'a>> {
	let mut found = None;
	walk(shape, |member| {
		if predicate(&member) {
			found = Some(member);
			return true;
		}
		false
	});
	found
}
