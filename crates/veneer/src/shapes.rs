//! Shape wrappers.

use veneer_registry::{ModuleDef, WrapperDef};

pub static BOX: WrapperDef = WrapperDef {
	name: "Box",
	module: "shapes",
	native_base: Some("Box"),
	post_init: None,
	specialize: None,
};

pub static ELLIPSE: WrapperDef = WrapperDef {
	name: "Ellipse",
	module: "shapes",
	native_base: Some("Ellipse"),
	post_init: None,
	specialize: None,
};

pub static LINE: WrapperDef = WrapperDef {
	name: "Line",
	module: "shapes",
	native_base: Some("Line"),
	post_init: None,
	specialize: None,
};

inventory::submit! { ModuleDef::new("shapes", &[&BOX, &ELLIPSE, &LINE]) }
