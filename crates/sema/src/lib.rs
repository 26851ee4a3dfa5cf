//! Conformance checking for invertible capabilities.
//!
//! Every nominal type is assumed to be duplicable and free to leave its scope
//! unless it suppresses those capabilities with `~Duplication` / `~Locality`
//! (or the legacy attributes with the same meaning). For each claimed
//! conformance this crate checks that:
//!
//! - the claim does not contradict an explicit suppression;
//! - a Duplication claim is not made by a type with a destructor;
//! - no stored field or enum payload lacks the claimed capability.
//!
//! Violations are reported to a [`DiagnosticSink`] together with fix-its that
//! add the suppression, and notes pointing at whatever removed the capability
//! from the offending member type.

/// Normalization of explicit and legacy suppressions.
pub mod annotations;
/// Diagnostics, fix-its and the sink interface.
pub mod diagnostic;
/// Language options.
pub mod options;
/// Declaration-level driver.
pub mod pass;
/// Diagnostics and fix-its for violations.
pub mod remediation;
/// Per-capability rule table.
pub mod rules;
/// Storage traversal.
pub mod storage;
/// Conformance validity rules.
pub mod validator;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_fixtures;

pub use annotations::suppressed_capabilities;
pub use diagnostic::{Diagnostic, DiagnosticBuffer, DiagnosticHandle, DiagnosticKind, DiagnosticSink, FixIt, NominalLabel, Placement, Severity};
pub use options::{ConfigError, LangOptions};
pub use pass::{ConformancePass, PassReport};
pub use rules::{CapabilityRule, rule_for};
pub use storage::{StorageKind, StorageMember, walk};
pub use validator::{Violation, can_add_inverse, check_conformance, validate};
