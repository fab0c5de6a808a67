//! Container wrappers.
//!
//! `List` self-registers with the alias the runtime used before its
//! container rename, so objects read from old files still adapt.

use veneer_registry::{ClassRegistration, ModuleDef, WrapperDef};

pub static LIST: WrapperDef = WrapperDef {
	name: "List",
	module: "collections",
	native_base: Some("List"),
	post_init: None,
	specialize: None,
};

pub static OBJECT_ARRAY: WrapperDef = WrapperDef {
	name: "ObjectArray",
	module: "collections",
	native_base: Some("ObjectArray"),
	post_init: None,
	specialize: None,
};

inventory::submit! { ModuleDef::new("collections", &[&LIST, &OBJECT_ARRAY]) }
inventory::submit! { ClassRegistration::new(&LIST, &["LinkedList"]) }
