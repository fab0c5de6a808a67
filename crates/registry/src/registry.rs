//! The registry: frozen table and reverse index, plus the resolution caches.
//!
//! Resolution is lazy and identity-stable: the first request for a name
//! fetches the wrapper descriptor from its module's export table and caches
//! the materialized class; every later request returns the same `Arc`. The
//! caches grow monotonically for the life of the process and are guarded by
//! one coarse lock each, with a re-check under the write lock so two racing
//! first-time resolutions converge on a single class object.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use veneer_native::{Namespace, Version};

use crate::error::RegistryError;
use crate::locator::{Locator, Params};
use crate::wrapper::{ModuleDef, WrapperClass, WrapperDef};

type FamilyKey = (&'static str, &'static str, Params);

pub struct Registry {
	namespace: Namespace,
	version: Version,
	/// Native class name -> wrapper locator. Frozen at build.
	table: FxHashMap<&'static str, Locator>,
	/// Wrapper short name -> module path. Derived from the table at build.
	reverse: FxHashMap<&'static str, &'static str>,
	/// Module path -> export table. Frozen at build.
	modules: FxHashMap<&'static str, &'static ModuleDef>,
	/// Native class name -> materialized wrapper class.
	resolved: RwLock<FxHashMap<String, Arc<WrapperClass>>>,
	/// Wrapper short name -> materialized wrapper class.
	reverse_resolved: RwLock<FxHashMap<String, Arc<WrapperClass>>>,
	/// One class object per (module, class, params), ever.
	families: RwLock<FxHashMap<FamilyKey, Arc<WrapperClass>>>,
}

impl Registry {
	pub(crate) fn assemble(
		namespace: Namespace,
		version: Version,
		table: FxHashMap<&'static str, Locator>,
		reverse: FxHashMap<&'static str, &'static str>,
		modules: FxHashMap<&'static str, &'static ModuleDef>,
	) -> Self {
		Self {
			namespace,
			version,
			table,
			reverse,
			modules,
			resolved: RwLock::new(FxHashMap::default()),
			reverse_resolved: RwLock::new(FxHashMap::default()),
			families: RwLock::new(FxHashMap::default()),
		}
	}

	pub fn namespace(&self) -> &Namespace {
		&self.namespace
	}

	pub fn version(&self) -> Version {
		self.version
	}

	/// The table row for a native class name, if the table has one.
	pub fn entry_for(&self, native_name: &str) -> Option<&Locator> {
		self.table.get(native_name)
	}

	/// The module path a wrapper short name lives in, from the reverse index.
	pub fn module_of(&self, wrapper_name: &str) -> Option<&'static str> {
		self.reverse.get(wrapper_name).copied()
	}

	/// Resolves a native class name to its wrapper class.
	///
	/// `Ok(None)` means the name has no table entry; whether that is an
	/// error is the caller's decision, so no warning is emitted here. A
	/// table entry whose module or export cannot be found is a configuration
	/// error and propagates.
	pub fn resolve(&self, native_name: &str) -> Result<Option<Arc<WrapperClass>>, RegistryError> {
		if let Some(class) = self.resolved.read().get(native_name) {
			return Ok(Some(Arc::clone(class)));
		}
		let Some(locator) = self.table.get(native_name) else {
			return Ok(None);
		};
		let def = self.export(locator.module, locator.class)?;
		let class = match &locator.params {
			Some(params) => self.specialize(def, params)?,
			None => Arc::new(WrapperClass::direct(def)),
		};
		let mut cache = self.resolved.write();
		// Re-check: another thread may have resolved while we were fetching.
		let class = cache.entry(native_name.to_owned()).or_insert(class);
		Ok(Some(Arc::clone(class)))
	}

	/// Reverse resolution: wrapper short name to the (unspecialized) wrapper
	/// class exported under that name.
	pub fn resolve_wrapper(&self, wrapper_name: &str) -> Result<Option<Arc<WrapperClass>>, RegistryError> {
		if let Some(class) = self.reverse_resolved.read().get(wrapper_name) {
			return Ok(Some(Arc::clone(class)));
		}
		let Some((name, module)) = self.reverse.get_key_value(wrapper_name) else {
			return Ok(None);
		};
		let def = self.export(module, name)?;
		let class = Arc::new(WrapperClass::direct(def));
		let mut cache = self.reverse_resolved.write();
		let class = cache.entry(wrapper_name.to_owned()).or_insert(class);
		Ok(Some(Arc::clone(class)))
	}

	/// Materializes (or returns the cached) family member for a parameter
	/// set. Each distinct `(module, class, params)` key yields exactly one
	/// class object.
	pub fn specialize(
		&self,
		def: &'static WrapperDef,
		params: &Params,
	) -> Result<Arc<WrapperClass>, RegistryError> {
		let key = (def.module, def.name, params.clone());
		if let Some(class) = self.families.read().get(&key) {
			return Ok(Arc::clone(class));
		}
		let make = def.specialize.ok_or(RegistryError::NotSpecializable {
			module: def.module,
			class: def.name,
		})?;
		let class = Arc::new(make(def, params));
		let mut cache = self.families.write();
		let class = cache.entry(key).or_insert(class);
		Ok(Arc::clone(class))
	}

	/// Registers a wrapper class under its primary name plus any aliases,
	/// short-circuiting lazy resolution for those names.
	///
	/// A name that already resolves is overwritten — last registration wins —
	/// but never silently: each shadowed name emits one warning.
	pub fn register_class(&self, def: &'static WrapperDef, aliases: &[&str]) {
		let class = Arc::new(WrapperClass::direct(def));
		let mut cache = self.resolved.write();
		for name in std::iter::once(def.primary_name()).chain(aliases.iter().copied()) {
			if let Some(existing) = cache.get(name) {
				tracing::warn!(
					class = name,
					existing = existing.name(),
					incoming = class.name(),
					"duplicate registration of class"
				);
			}
			cache.insert(name.to_owned(), Arc::clone(&class));
		}
	}

	fn export(&self, module: &'static str, class: &'static str) -> Result<&'static WrapperDef, RegistryError> {
		let def = self
			.modules
			.get(module)
			.ok_or(RegistryError::UnknownModule { module })?;
		def.export(class)
			.ok_or(RegistryError::UnknownExport { module, class })
	}
}

impl std::fmt::Debug for Registry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("version", &self.version)
			.field("entries", &self.table.len())
			.field("modules", &self.modules.len())
			.field("resolved", &self.resolved.read().len())
			.finish()
	}
}

#[cfg(test)]
pub(crate) mod fixtures {
	use veneer_native::{Args, FieldMap, Namespace, NativeClass, Version};

	use super::*;
	use crate::builder::RegistryBuilder;
	use crate::locator::LocatorDef;
	use crate::wrapper::WrapperClass;

	fn copy_kwargs(args: &Args) -> FieldMap {
		let mut fields = FieldMap::default();
		for name in ["width", "height", "entries"] {
			if let Some(value) = args.kwarg(name) {
				fields.insert(name.to_owned(), value.clone());
			}
		}
		fields
	}

	fn hist_specialize(def: &'static WrapperDef, params: &Params) -> WrapperClass {
		let kind = params.get("type").unwrap_or("D");
		WrapperClass::specialized(def, format!("{}_{}", def.name, kind), params.clone())
	}

	pub static BOX: WrapperDef = WrapperDef {
		name: "Box",
		module: "shapes",
		native_base: Some("Box"),
		post_init: None,
		specialize: None,
	};

	pub static HIST: WrapperDef = WrapperDef {
		name: "Hist",
		module: "plotting.hist",
		native_base: None,
		post_init: None,
		specialize: Some(hist_specialize),
	};

	pub static STACK: WrapperDef = WrapperDef {
		name: "HistStack",
		module: "plotting.hist",
		native_base: Some("HistogramStack"),
		post_init: None,
		specialize: None,
	};

	pub static SHAPES_MODULE: ModuleDef = ModuleDef::new("shapes", &[&BOX]);
	pub static HIST_MODULE: ModuleDef = ModuleDef::new("plotting.hist", &[&HIST, &STACK]);

	pub const TABLE: &[LocatorDef] = &[
		LocatorDef::direct("Box", "shapes", "Box"),
		LocatorDef::direct("HistogramStack", "plotting.hist", "HistStack"),
		LocatorDef::family("Histogram1D_Float", "plotting.hist", "Hist", &[("type", "F")]),
		LocatorDef::family("Histogram1D_Int", "plotting.hist", "Hist", &[("type", "I")]),
	];

	pub fn namespace() -> Namespace {
		let mut ns = Namespace::new();
		for name in ["Box", "HistogramStack", "Histogram1D_Float", "Histogram1D_Int", "UnknownThing"] {
			ns.declare(NativeClass::new(name, copy_kwargs));
		}
		ns
	}

	pub fn registry() -> Registry {
		let mut builder = RegistryBuilder::new(namespace(), Version::new(2, 28, 4));
		builder
			.entries(TABLE)
			.module(&SHAPES_MODULE)
			.module(&HIST_MODULE);
		builder.build()
	}
}

#[cfg(test)]
mod tests {
	use super::fixtures::{self, BOX, HIST, STACK};
	use super::*;
	use crate::builder::RegistryBuilder;
	use crate::locator::LocatorDef;
	use veneer_native::{Namespace, Version};

	/// Resolving the same native name twice yields the identical class
	/// object, not merely an equal one.
	#[test]
	fn resolution_is_identity_stable() {
		let registry = fixtures::registry();
		let first = registry.resolve("Box").unwrap().expect("Box is tabled");
		let second = registry.resolve("Box").unwrap().expect("Box is tabled");
		assert!(Arc::ptr_eq(&first, &second));
	}

	#[test]
	fn unknown_name_resolves_to_none_without_error() {
		let registry = fixtures::registry();
		assert!(registry.resolve("UnknownThing").unwrap().is_none());
	}

	/// Same parameters -> identical specialized class; different parameters
	/// -> distinct classes, both derived from the shared base.
	#[test]
	fn family_members_are_cached_per_parameter_set() {
		let registry = fixtures::registry();
		let float_a = registry.resolve("Histogram1D_Float").unwrap().unwrap();
		let float_b = registry.resolve("Histogram1D_Float").unwrap().unwrap();
		let int = registry.resolve("Histogram1D_Int").unwrap().unwrap();

		assert!(Arc::ptr_eq(&float_a, &float_b));
		assert!(!Arc::ptr_eq(&float_a, &int));
		assert!(float_a.derives_from(&HIST));
		assert!(int.derives_from(&HIST));
		assert_eq!(float_a.name(), "Hist_F");
		assert_eq!(int.name(), "Hist_I");
	}

	/// Two direct specialize() calls with one parameter set share the class
	/// object even when no table row is involved.
	#[test]
	fn specialize_is_keyed_by_params() {
		let registry = fixtures::registry();
		let params = Params::new().set("type", "S");
		let a = registry.specialize(&HIST, &params).unwrap();
		let b = registry.specialize(&HIST, &params).unwrap();
		assert!(Arc::ptr_eq(&a, &b));
	}

	#[test]
	fn specializing_a_plain_wrapper_is_a_configuration_error() {
		let registry = fixtures::registry();
		let err = registry.specialize(&BOX, &Params::new().set("type", "F")).unwrap_err();
		assert!(matches!(err, RegistryError::NotSpecializable { class: "Box", .. }));
	}

	/// The reverse index maps wrapper short names back to their modules and
	/// resolves the unspecialized base class.
	#[test]
	fn reverse_resolution_finds_the_base_class() {
		let registry = fixtures::registry();
		assert_eq!(registry.module_of("Hist"), Some("plotting.hist"));

		let first = registry.resolve_wrapper("Hist").unwrap().expect("indexed");
		let second = registry.resolve_wrapper("Hist").unwrap().expect("indexed");
		assert!(Arc::ptr_eq(&first, &second));
		assert!(first.params().is_none());
		assert!(registry.resolve_wrapper("Nonexistent").unwrap().is_none());
	}

	/// Registration under the primary name wins over later lazy resolution.
	#[test]
	fn registration_short_circuits_the_resolver() {
		let registry = fixtures::registry();
		registry.register_class(&STACK, &[]);
		let class = registry.resolve("HistogramStack").unwrap().unwrap();
		assert!(class.derives_from(&STACK));
	}

	/// Re-registering a name overwrites it; the second registration's class
	/// is what subsequent resolution returns.
	#[test]
	fn duplicate_registration_overwrites() {
		let registry = fixtures::registry();
		registry.register_class(&BOX, &["Container"]);
		registry.register_class(&STACK, &["Container"]);
		let class = registry.resolve("Container").unwrap().unwrap();
		assert!(class.derives_from(&STACK));
	}

	/// Aliases resolve to the same class object as the primary name.
	#[test]
	fn aliases_share_the_registered_class() {
		let registry = fixtures::registry();
		registry.register_class(&STACK, &["Stack"]);
		let by_primary = registry.resolve("HistogramStack").unwrap().unwrap();
		let by_alias = registry.resolve("Stack").unwrap().unwrap();
		assert!(Arc::ptr_eq(&by_primary, &by_alias));
	}

	/// A table row naming a missing module or export is fatal, not a miss.
	#[test]
	fn broken_table_rows_propagate_configuration_errors() {
		let mut builder = RegistryBuilder::new(Namespace::new(), Version::new(2, 28, 4));
		builder
			.entry(LocatorDef::direct("Ghost", "nowhere", "Ghost"))
			.entry(LocatorDef::direct("Phantom", "shapes", "Phantom"))
			.module(&fixtures::SHAPES_MODULE);
		let registry = builder.build();

		assert!(matches!(
			registry.resolve("Ghost").unwrap_err(),
			RegistryError::UnknownModule { module: "nowhere" }
		));
		assert!(matches!(
			registry.resolve("Phantom").unwrap_err(),
			RegistryError::UnknownExport { module: "shapes", class: "Phantom" }
		));
	}
}
