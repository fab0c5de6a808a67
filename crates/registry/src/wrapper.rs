//! Wrapper descriptors, materialized wrapper classes, and wrapped values.
//!
//! A [`WrapperDef`] is the static descriptor a wrapper module declares for
//! each of its classes. The resolver materializes descriptors into
//! [`WrapperClass`] objects (one `Arc` per resolved name, identity-stable).
//! A [`Wrapped`] value is a native object that has been handed to its
//! wrapper class: same field storage, no copy.

use std::sync::Arc;

use veneer_native::NativeObject;

use crate::locator::Params;

/// Post-construction hook, invoked immediately after an instance is
/// adapted. Receives the leftover adaptation options as arguments.
pub type PostInit = fn(&mut Wrapped, &Params);

/// Specialization capability for parameterized families: given the base
/// descriptor and a parameter set, produce a uniquely named variant class.
pub type Specialize = fn(&'static WrapperDef, &Params) -> WrapperClass;

/// Static descriptor for one hand-written wrapper class.
pub struct WrapperDef {
	/// Wrapper short name (e.g. `"Hist"`).
	pub name: &'static str,
	/// Module path the class is exported from (e.g. `"plotting.hist"`).
	pub module: &'static str,
	/// For wrapper-native hybrids, the native base class whose name is the
	/// primary registration name. `None` registers under the wrapper's own
	/// name.
	pub native_base: Option<&'static str>,
	pub post_init: Option<PostInit>,
	pub specialize: Option<Specialize>,
}

impl WrapperDef {
	/// The name self-registration files this class under.
	pub fn primary_name(&self) -> &'static str {
		self.native_base.unwrap_or(self.name)
	}
}

impl std::fmt::Debug for WrapperDef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WrapperDef")
			.field("name", &self.name)
			.field("module", &self.module)
			.field("native_base", &self.native_base)
			.finish()
	}
}

/// A materialized wrapper class: either a descriptor used directly, or a
/// family specialization carrying its parameter set and a derived name.
#[derive(Debug)]
pub struct WrapperClass {
	def: &'static WrapperDef,
	name: String,
	params: Option<Params>,
}

impl WrapperClass {
	/// The descriptor itself, unspecialized.
	pub fn direct(def: &'static WrapperDef) -> Self {
		Self {
			def,
			name: def.name.to_owned(),
			params: None,
		}
	}

	/// A family variant. `name` must be unique per parameter set; the base
	/// wrapper's [`Specialize`] function is responsible for that.
	pub fn specialized(def: &'static WrapperDef, name: String, params: Params) -> Self {
		Self {
			def,
			name,
			params: Some(params),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn module(&self) -> &'static str {
		self.def.module
	}

	pub fn def(&self) -> &'static WrapperDef {
		self.def
	}

	pub fn params(&self) -> Option<&Params> {
		self.params.as_ref()
	}

	/// True when `self` was produced from `base`, either directly or as a
	/// family specialization.
	pub fn derives_from(&self, base: &'static WrapperDef) -> bool {
		std::ptr::eq(self.def, base)
	}
}

/// A native object handed to its wrapper class.
///
/// Ownership of the native handle moves into the wrapper at adaptation; the
/// field storage is the one the runtime created.
#[derive(Debug)]
pub struct Wrapped {
	class: Arc<WrapperClass>,
	object: NativeObject,
}

impl Wrapped {
	pub fn new(class: Arc<WrapperClass>, object: NativeObject) -> Self {
		Self { class, object }
	}

	pub fn class(&self) -> &Arc<WrapperClass> {
		&self.class
	}

	/// Wrapper short name (specialized name for family members).
	pub fn class_name(&self) -> &str {
		self.class.name()
	}

	/// The runtime class the underlying object was constructed as.
	pub fn native_class_name(&self) -> &'static str {
		self.object.class_name()
	}

	pub fn native(&self) -> &NativeObject {
		&self.object
	}

	pub fn native_mut(&mut self) -> &mut NativeObject {
		&mut self.object
	}

	/// Releases the native handle, discarding the wrapper.
	pub fn into_native(self) -> NativeObject {
		self.object
	}
}

/// A wrapper module's export table: the "import module by path and fetch
/// named attribute" surface, populated at link time.
pub struct ModuleDef {
	pub path: &'static str,
	pub exports: &'static [&'static WrapperDef],
}

inventory::collect!(ModuleDef);

impl ModuleDef {
	pub const fn new(path: &'static str, exports: &'static [&'static WrapperDef]) -> Self {
		Self { path, exports }
	}

	pub fn export(&self, class: &str) -> Option<&'static WrapperDef> {
		self.exports.iter().copied().find(|def| def.name == class)
	}
}

/// Link-time self-registration of a wrapper class and its aliases,
/// short-circuiting lazy resolution for those names.
pub struct ClassRegistration {
	pub def: &'static WrapperDef,
	pub aliases: &'static [&'static str],
}

inventory::collect!(ClassRegistration);

impl ClassRegistration {
	pub const fn new(def: &'static WrapperDef, aliases: &'static [&'static str]) -> Self {
		Self { def, aliases }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	static PLAIN: WrapperDef = WrapperDef {
		name: "Canvas",
		module: "plotting",
		native_base: None,
		post_init: None,
		specialize: None,
	};

	static HYBRID: WrapperDef = WrapperDef {
		name: "List",
		module: "collections",
		native_base: Some("SeqCollection"),
		post_init: None,
		specialize: None,
	};

	#[test]
	fn primary_name_prefers_native_base() {
		assert_eq!(PLAIN.primary_name(), "Canvas");
		assert_eq!(HYBRID.primary_name(), "SeqCollection");
	}

	#[test]
	fn module_export_lookup_by_name() {
		static EXPORTS: &[&WrapperDef] = &[&PLAIN, &HYBRID];
		let module = ModuleDef::new("plotting", EXPORTS);
		assert!(module.export("Canvas").is_some());
		assert!(module.export("Missing").is_none());
	}

	#[test]
	fn specialized_class_tracks_its_base() {
		let base = WrapperClass::direct(&PLAIN);
		let variant = WrapperClass::specialized(&PLAIN, "Canvas_F".into(), Params::new().set("type", "F"));
		assert!(base.derives_from(&PLAIN));
		assert!(variant.derives_from(&PLAIN));
		assert!(!variant.derives_from(&HYBRID));
		assert_eq!(variant.name(), "Canvas_F");
	}
}
