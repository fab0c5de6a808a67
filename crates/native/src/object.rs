//! Class objects, instances, and the runtime class namespace.
//!
//! A [`NativeClass`] is a class object with a stable name and a construction
//! function. A [`NativeObject`] is an instance: its field storage is created
//! once at construction and handed around by ownership, never copied. The
//! [`Namespace`] is the lookup-by-name surface the construction factory
//! uses.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::value::{Args, Value};

/// Instance field storage.
pub type FieldMap = FxHashMap<String, Value>;

/// Construction function: maps arguments to the initial field storage.
pub type Constructor = fn(&Args) -> FieldMap;

/// A class object exposed by the native runtime.
pub struct NativeClass {
	name: &'static str,
	ctor: Constructor,
}

impl NativeClass {
	pub const fn new(name: &'static str, ctor: Constructor) -> Self {
		Self { name, ctor }
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Constructs an instance via the native construction protocol.
	pub fn instantiate(self: &Arc<Self>, args: &Args) -> NativeObject {
		NativeObject {
			class: Arc::clone(self),
			fields: (self.ctor)(args),
		}
	}
}

impl std::fmt::Debug for NativeClass {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NativeClass").field("name", &self.name).finish()
	}
}

/// An instance produced by the native runtime.
///
/// The adaptation layer never copies or reconstructs one of these; it takes
/// ownership and hands the same storage back inside a wrapper.
#[derive(Debug)]
pub struct NativeObject {
	class: Arc<NativeClass>,
	fields: FieldMap,
}

impl NativeObject {
	pub fn class(&self) -> &Arc<NativeClass> {
		&self.class
	}

	pub fn class_name(&self) -> &'static str {
		self.class.name
	}

	pub fn field(&self, name: &str) -> Option<&Value> {
		self.fields.get(name)
	}

	pub fn set_field(&mut self, name: &str, value: impl Into<Value>) {
		self.fields.insert(name.to_owned(), value.into());
	}
}

/// Lookup-by-name over the classes linked into the runtime.
#[derive(Debug, Default)]
pub struct Namespace {
	classes: FxHashMap<&'static str, Arc<NativeClass>>,
}

impl Namespace {
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares a class. Redeclaration replaces the previous class object,
	/// matching the runtime's own last-definition-wins linkage.
	pub fn declare(&mut self, class: NativeClass) -> Arc<NativeClass> {
		let class = Arc::new(class);
		self.classes.insert(class.name(), Arc::clone(&class));
		class
	}

	pub fn class(&self, name: &str) -> Option<Arc<NativeClass>> {
		self.classes.get(name).cloned()
	}

	pub fn len(&self) -> usize {
		self.classes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.classes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn point_fields(args: &Args) -> FieldMap {
		let mut fields = FieldMap::default();
		fields.insert("x".to_owned(), args.get(0).cloned().unwrap_or_default());
		fields.insert("y".to_owned(), args.get(1).cloned().unwrap_or_default());
		fields
	}

	#[test]
	fn instantiate_populates_fields_from_args() {
		let mut ns = Namespace::new();
		ns.declare(NativeClass::new("Point", point_fields));

		let class = ns.class("Point").expect("Point is declared");
		let obj = class.instantiate(&Args::new().arg(1i64).arg(2i64));
		assert_eq!(obj.class_name(), "Point");
		assert_eq!(obj.field("x").and_then(Value::as_int), Some(1));
		assert_eq!(obj.field("y").and_then(Value::as_int), Some(2));
	}

	#[test]
	fn namespace_miss_returns_none() {
		let ns = Namespace::new();
		assert!(ns.class("Missing").is_none());
	}
}
