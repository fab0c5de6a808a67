//! Assembles a [`Registry`] from table rows, module export tables, and
//! link-time submissions.
//!
//! Version-conditional rows are applied here, before the reverse index is
//! derived, against the version the native runtime reports.

use rustc_hash::FxHashMap;
use veneer_native::{Namespace, Version};

use crate::locator::{Locator, LocatorDef};
use crate::registry::Registry;
use crate::wrapper::{ClassRegistration, ModuleDef, WrapperDef};

pub struct RegistryBuilder {
	namespace: Namespace,
	version: Version,
	rows: Vec<LocatorDef>,
	modules: FxHashMap<&'static str, &'static ModuleDef>,
	registrations: Vec<(&'static WrapperDef, &'static [&'static str])>,
}

impl RegistryBuilder {
	/// Starts a builder for the given runtime namespace and version.
	pub fn new(namespace: Namespace, version: Version) -> Self {
		Self {
			namespace,
			version,
			rows: Vec::new(),
			modules: FxHashMap::default(),
			registrations: Vec::new(),
		}
	}

	/// Adds one table row.
	pub fn entry(&mut self, row: LocatorDef) -> &mut Self {
		self.rows.push(row);
		self
	}

	/// Adds a slice of table rows.
	pub fn entries(&mut self, rows: &[LocatorDef]) -> &mut Self {
		self.rows.extend_from_slice(rows);
		self
	}

	/// Adds a row only when the linked runtime is at least `floor`.
	pub fn entry_since(&mut self, floor: Version, row: LocatorDef) -> &mut Self {
		if self.version >= floor {
			self.rows.push(row);
		}
		self
	}

	/// Makes a wrapper module's exports available to the resolver.
	pub fn module(&mut self, def: &'static ModuleDef) -> &mut Self {
		self.modules.insert(def.path, def);
		self
	}

	/// Queues an explicit class registration, applied after build.
	pub fn register(&mut self, def: &'static WrapperDef, aliases: &'static [&'static str]) -> &mut Self {
		self.registrations.push((def, aliases));
		self
	}

	/// Collects every [`ModuleDef`] and [`ClassRegistration`] submitted via
	/// `inventory` anywhere in the linked binary.
	pub fn collect_submitted(&mut self) -> &mut Self {
		for module in inventory::iter::<ModuleDef> {
			self.modules.insert(module.path, module);
		}
		for reg in inventory::iter::<ClassRegistration> {
			self.registrations.push((reg.def, reg.aliases));
		}
		self
	}

	/// Builds the registry: freezes the table, derives the reverse index,
	/// and applies queued registrations.
	pub fn build(self) -> Registry {
		let mut table = FxHashMap::default();
		let mut reverse = FxHashMap::default();
		for row in &self.rows {
			// Families index by class name only; every variant shares the
			// implementation module.
			reverse.insert(row.class, row.module);
			table.insert(row.native, Locator::from(row));
		}

		let registry = Registry::assemble(self.namespace, self.version, table, reverse, self.modules);
		for (def, aliases) in self.registrations {
			registry.register_class(def, aliases);
		}
		registry
	}
}
