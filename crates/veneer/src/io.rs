//! Storage wrappers.

use veneer_registry::{ModuleDef, Params, Wrapped, WrapperDef};

/// Records the access mode on the freshly adapted file handle. Callers pass
/// `mode` through the adaptation options; absent, the handle is read-only.
fn file_post_init(wrapped: &mut Wrapped, args: &Params) {
	let mode = args.get("mode").unwrap_or("read").to_owned();
	wrapped.native_mut().set_field("mode", mode);
}

pub static FILE: WrapperDef = WrapperDef {
	name: "File",
	module: "io",
	native_base: Some("File"),
	post_init: Some(file_post_init),
	specialize: None,
};

pub static DIRECTORY: WrapperDef = WrapperDef {
	name: "Directory",
	module: "io",
	native_base: Some("Directory"),
	post_init: None,
	specialize: None,
};

/// Access mode recorded by [`FILE`]'s post-construction hook.
pub fn mode(wrapped: &Wrapped) -> Option<&str> {
	wrapped.native().field("mode").and_then(veneer_native::Value::as_str)
}

inventory::submit! { ModuleDef::new("io", &[&FILE, &DIRECTORY]) }
