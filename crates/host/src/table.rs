//! In-memory declaration table implementing [`DeclModel`].

use rustc_hash::FxHashMap;
use tilde_model::{
	Capability, CapabilitySet, ConformanceClaim, DeclId, DeclModel, Destructor, EnumCase, GenericParamRef, ModelError, NominalRef, NominalShape,
	ResolvedType, Result, StoredField,
};
use tilde_sema::annotations::suppressed_from_parts;

use crate::decl::{NominalDecl, TypeExpr};

/// Declarations and builtin types of a program under check.
///
/// Member types are resolved in the archetype view of their declaration: a
/// generic parameter has every capability its own suppressions leave, and a
/// nominal type has every capability its declaration does not suppress.
#[derive(Debug, Clone)]
pub struct DeclTable {
	decls: Vec<NominalDecl>,
	by_name: FxHashMap<String, DeclId>,
	builtins: FxHashMap<String, CapabilitySet>,
}

impl Default for DeclTable {
	fn default() -> Self {
		Self::new()
	}
}

impl DeclTable {
	/// Creates a table knowing the builtins `Int`, `Bool` and `String`.
	pub fn new() -> Self {
		let mut table = Self {
			decls: Vec::new(),
			by_name: FxHashMap::default(),
			builtins: FxHashMap::default(),
		};
		for name in ["Int", "Bool", "String"] {
			table.add_builtin(name, CapabilitySet::all());
		}
		table
	}

	/// Registers or replaces a builtin type.
	pub fn add_builtin(&mut self, name: impl Into<String>, capabilities: CapabilitySet) {
		self.builtins.insert(name.into(), capabilities);
	}

	/// Adds a declaration and returns its handle.
	///
	/// # Errors
	///
	/// Returns [`ModelError::DuplicateDecl`] if the name is taken.
	pub fn declare(&mut self, decl: NominalDecl) -> Result<DeclId> {
		if self.by_name.contains_key(&decl.name) {
			return Err(ModelError::DuplicateDecl(decl.name));
		}
		let id = DeclId(self.decls.len() as u32);
		tracing::trace!(name = %decl.name, ?id, kind = ?decl.kind, "declared nominal");
		self.by_name.insert(decl.name.clone(), id);
		self.decls.push(decl);
		Ok(id)
	}

	/// Looks a declaration up by name.
	pub fn lookup(&self, name: &str) -> Option<DeclId> {
		self.by_name.get(name).copied()
	}

	pub fn decl(&self, id: DeclId) -> Result<&NominalDecl> {
		self.decls.get(id.0 as usize).ok_or(ModelError::UnknownDecl(id))
	}

	pub fn len(&self) -> usize {
		self.decls.len()
	}

	pub fn is_empty(&self) -> bool {
		self.decls.is_empty()
	}

	fn suppressed(decl: &NominalDecl) -> CapabilitySet {
		suppressed_from_parts(&decl.inheritance, &decl.attributes)
	}

	/// Resolves `ty` as written inside `owner`.
	fn resolve(&self, owner: &NominalDecl, ty: &TypeExpr) -> Result<ResolvedType> {
		match ty {
			TypeExpr::Nominal(id) => {
				let target = self.decl(*id)?;
				let nominal = NominalRef {
					decl: *id,
					name: target.name.clone(),
					loc: target.loc,
				};
				Ok(ResolvedType::nominal(nominal, CapabilitySet::all().difference(Self::suppressed(target))))
			}
			TypeExpr::Param(index) => {
				let param = owner.generic_params.get(*index).ok_or_else(|| ModelError::UnknownGenericParam {
					decl: owner.name.clone(),
					index: *index,
				})?;
				let param_ref = GenericParamRef {
					name: param.name.clone(),
					unit: owner.unit,
					loc: param.loc,
				};
				Ok(ResolvedType::generic_param(param_ref, CapabilitySet::all().difference(param.suppressed)))
			}
			TypeExpr::Builtin(name) => {
				let caps = self.builtins.get(name).copied().ok_or_else(|| ModelError::UnknownBuiltin(name.clone()))?;
				Ok(ResolvedType::structural(name.clone(), caps))
			}
			TypeExpr::Error(display) => Ok(ResolvedType::error(display.clone())),
		}
	}
}

impl DeclModel for DeclTable {
	fn nominals(&self) -> Vec<DeclId> {
		(0..self.decls.len() as u32).map(DeclId).collect()
	}

	fn shape(&self, id: DeclId) -> Result<NominalShape> {
		let decl = self.decl(id)?;
		let fields = decl
			.fields
			.iter()
			.map(|field| -> Result<StoredField> {
				Ok(StoredField {
					name: field.name.clone(),
					ty: self.resolve(decl, &field.ty)?,
					loc: field.loc,
				})
			})
			.collect::<Result<Vec<_>>>()?;
		let cases = decl
			.cases
			.iter()
			.map(|case| -> Result<EnumCase> {
				Ok(EnumCase {
					name: case.name.clone(),
					payload: case.payload.as_ref().map(|ty| self.resolve(decl, ty)).transpose()?,
					loc: case.loc,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(NominalShape {
			decl: id,
			name: decl.name.clone(),
			kind: decl.kind,
			unit: decl.unit,
			loc: decl.loc,
			body_open: decl.body_open,
			inheritance: decl.inheritance.clone(),
			attributes: decl.attributes.clone(),
			fields,
			cases,
			destructor: decl.destructor.map(|loc| Destructor { loc }),
		})
	}

	/// Explicit conformances, plus an implicit claim for every capability that
	/// is neither suppressed nor explicitly claimed.
	fn conformances(&self, id: DeclId) -> Result<Vec<ConformanceClaim>> {
		let decl = self.decl(id)?;
		if !decl.is_type() {
			return Ok(Vec::new());
		}
		let suppressed = Self::suppressed(decl);
		let mut claims = Vec::new();
		for cap in Capability::ALL {
			let explicit: Vec<_> = decl.conformances.iter().filter(|c| c.capability == cap).collect();
			if explicit.is_empty() {
				if !suppressed.has(cap) {
					claims.push(ConformanceClaim::implicit(cap, id));
				}
				continue;
			}
			claims.extend(
				explicit
					.into_iter()
					.map(|c| ConformanceClaim::conditional(cap, id, c.loc, c.conditional_requirements.clone())),
			);
		}
		Ok(claims)
	}
}
