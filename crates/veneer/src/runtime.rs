//! The native classes and version this build links against.
//!
//! A real deployment would obtain these from the foreign runtime's
//! introspection surface; this build ships an in-process runtime with the
//! same shape. Constructors follow the runtime's convention: keyword
//! arguments become fields, positional arguments fill the class's
//! documented slots.

use veneer_native::{Args, FieldMap, Namespace, NativeClass, Value, Version};

/// Version reported by the linked runtime (packed form 22804).
pub const LINKED_VERSION: Version = Version::new(2, 28, 4);

fn kwarg_fields(args: &Args) -> FieldMap {
	args.kwargs().map(|(k, v)| (k.to_owned(), v.clone())).collect()
}

/// Histograms take the bin count as their first positional slot.
fn histogram_fields(args: &Args) -> FieldMap {
	let mut fields = kwarg_fields(args);
	if let Some(bins) = args.get(0) {
		fields.insert("bins".to_owned(), bins.clone());
	}
	fields.entry("entries".to_owned()).or_insert(Value::Int(0));
	fields
}

/// Containers start empty regardless of arguments.
fn container_fields(_args: &Args) -> FieldMap {
	let mut fields = FieldMap::default();
	fields.insert("size".to_owned(), Value::Int(0));
	fields
}

const HISTOGRAM_CLASSES: &[&str] = &[
	"Histogram1D_Byte",
	"Histogram1D_Short",
	"Histogram1D_Int",
	"Histogram1D_Float",
	"Histogram1D_Double",
	"Histogram2D_Byte",
	"Histogram2D_Short",
	"Histogram2D_Int",
	"Histogram2D_Float",
	"Histogram2D_Double",
	"HistogramStack",
	"Efficiency",
];

/// Declares every class the linked runtime exposes.
pub fn linked_namespace() -> Namespace {
	let mut ns = Namespace::new();
	for name in ["List", "ObjectArray"] {
		ns.declare(NativeClass::new(name, container_fields));
	}
	for name in ["File", "Directory", "Box", "Ellipse", "Line", "Axis"] {
		ns.declare(NativeClass::new(name, kwarg_fields));
	}
	for name in HISTOGRAM_CLASSES.iter().copied() {
		ns.declare(NativeClass::new(name, histogram_fields));
	}
	ns
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn histogram_constructor_fills_bins_slot() {
		let ns = linked_namespace();
		let class = ns.class("Histogram1D_Float").expect("linked");
		let hist = class.instantiate(&Args::new().arg(100i64).kw("title", "pt"));
		assert_eq!(hist.field("bins").and_then(Value::as_int), Some(100));
		assert_eq!(hist.field("title").and_then(Value::as_str), Some("pt"));
		assert_eq!(hist.field("entries").and_then(Value::as_int), Some(0));
	}
}
