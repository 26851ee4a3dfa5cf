//! Declaration-level driver running every invertible conformance check.

use tilde_model::{DeclModel, Result};

use crate::annotations::suppressed_capabilities;
use crate::diagnostic::DiagnosticSink;
use crate::options::LangOptions;
use crate::validator::{self, Violation};

/// Outcome of running [`ConformancePass`] over a model.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PassReport {
	/// Number of conformance claims checked.
	pub checked: usize,
	/// Violations in the order they were reported.
	pub violations: Vec<Violation>,
}

impl PassReport {
	pub fn is_clean(&self) -> bool {
		self.violations.is_empty()
	}
}

/// Checks every Duplication and Locality claim of every nominal in a model.
///
/// Claims are checked independently: a violation of one capability never
/// stops the check of the other on the same declaration.
#[derive(Debug, Clone, Copy)]
pub struct ConformancePass<'a> {
	options: &'a LangOptions,
}

impl<'a> ConformancePass<'a> {
	pub fn new(options: &'a LangOptions) -> Self {
		Self { options }
	}

	/// Runs the pass, reporting diagnostics to `sink`.
	///
	/// # Errors
	///
	/// Propagates model errors; diagnostics already emitted stay in `sink`.
	pub fn run(&self, model: &dyn DeclModel, sink: &mut dyn DiagnosticSink) -> Result<PassReport> {
		let mut report = PassReport::default();
		for decl in model.nominals() {
			let shape = model.shape(decl)?;
			let claims = model.conformances(decl)?;
			let annotations = suppressed_capabilities(&shape);
			tracing::debug!(nominal = %shape.name, claims = claims.len(), ?annotations, "checking declaration");

			for claim in &claims {
				report
					.violations
					.extend(validator::validate(claim, &shape, annotations, self.options, sink));
				report.checked += 1;
			}
		}
		Ok(report)
	}
}
