//! Normalization of explicit capability suppressions.
//!
//! A declaration can suppress a capability with `~Capability` in its
//! inheritance clause or with the legacy attribute that predates that syntax.
//! Both spellings collapse into one [`CapabilitySet`] here, so the rules never
//! see the difference.

use tilde_model::{Capability, CapabilitySet, DeclAttribute, InheritanceClause, InheritedEntry, NominalShape};

/// Capabilities explicitly suppressed on `shape`.
pub fn suppressed_capabilities(shape: &NominalShape) -> CapabilitySet {
	suppressed_from_parts(&shape.inheritance, &shape.attributes)
}

/// Capabilities suppressed by an inheritance clause and attribute list.
pub fn suppressed_from_parts(inheritance: &InheritanceClause, attributes: &[DeclAttribute]) -> CapabilitySet {
	let explicit = inheritance.entries.iter().filter_map(|entry| match entry {
		InheritedEntry::Suppression(cap) => Some(*cap),
		InheritedEntry::Conformance(_) => None,
	});
	let legacy = attributes.iter().filter_map(legacy_suppression);
	explicit.chain(legacy).collect()
}

/// Capability suppressed by a deprecated attribute spelling.
fn legacy_suppression(attr: &DeclAttribute) -> Option<Capability> {
	match attr {
		DeclAttribute::MoveOnly => Some(Capability::Duplication),
		DeclAttribute::NonEscapable => Some(Capability::Locality),
		DeclAttribute::Other(_) => None,
	}
}
