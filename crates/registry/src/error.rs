/// Registry errors.
///
/// `UnknownModule`, `UnknownExport` and `NotSpecializable` are configuration
/// errors: the table is internal data, so a locator naming something that
/// does not exist means the library itself is broken. They propagate and
/// must not be caught. Unresolved classes and duplicate registrations are
/// deliberately *not* here; those are warnings (see [`crate::registry`]).
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
	/// A locator references a wrapper module that was never linked in.
	#[error("registry table references unknown module `{module}`")]
	UnknownModule { module: &'static str },

	/// A locator references a class its module does not export.
	#[error("module `{module}` has no export `{class}`")]
	UnknownExport {
		module: &'static str,
		class: &'static str,
	},

	/// A family row points at a base wrapper with no specialization
	/// capability.
	#[error("wrapper `{module}.{class}` cannot be specialized")]
	NotSpecializable {
		module: &'static str,
		class: &'static str,
	},
}
