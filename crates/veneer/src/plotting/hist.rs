//! The histogram wrapper family.
//!
//! The runtime exposes one histogram class per storage kind (byte, short,
//! int, float, double) and dimension; all of them share these two base
//! wrappers, specialized per kind through the family factory. The `type`
//! parameter is the storage-kind letter (`B`, `S`, `I`, `F`, `D`).

use veneer_registry::{ClassRegistration, ModuleDef, Params, WrapperClass, WrapperDef};

/// Specialization capability shared by the histogram bases: the variant is
/// named `<base>_<kind>` and carries its parameter set.
fn storage_variant(def: &'static WrapperDef, params: &Params) -> WrapperClass {
	let kind = params.get("type").unwrap_or("D");
	WrapperClass::specialized(def, format!("{}_{kind}", def.name), params.clone())
}

pub static HIST: WrapperDef = WrapperDef {
	name: "Hist",
	module: "plotting.hist",
	native_base: None,
	post_init: None,
	specialize: Some(storage_variant),
};

pub static HIST2D: WrapperDef = WrapperDef {
	name: "Hist2D",
	module: "plotting.hist",
	native_base: None,
	post_init: None,
	specialize: Some(storage_variant),
};

pub static HIST_STACK: WrapperDef = WrapperDef {
	name: "HistStack",
	module: "plotting.hist",
	native_base: Some("HistogramStack"),
	post_init: None,
	specialize: None,
};

pub static AXIS: WrapperDef = WrapperDef {
	name: "Axis",
	module: "plotting.hist",
	native_base: Some("Axis"),
	post_init: None,
	specialize: None,
};

/// Only present in runtimes >= 2.28/00; its table row is version-gated.
pub static EFFICIENCY: WrapperDef = WrapperDef {
	name: "Efficiency",
	module: "plotting.hist",
	native_base: Some("Efficiency"),
	post_init: None,
	specialize: None,
};

inventory::submit! {
	ModuleDef::new("plotting.hist", &[&HIST, &HIST2D, &HIST_STACK, &AXIS, &EFFICIENCY])
}
inventory::submit! { ClassRegistration::new(&HIST_STACK, &["Stack"]) }
