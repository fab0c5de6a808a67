//! The authored registry table.
//!
//! Every wrapper the library ships is tabled here against the native class
//! it overlays, so the resolver can find it without the wrapper module being
//! touched first. Histogram rows are family rows: one base wrapper per
//! dimension, specialized per storage kind.

use veneer_native::Version;
use veneer_registry::LocatorDef;

pub const TABLE: &[LocatorDef] = &[
	LocatorDef::direct("List", "collections", "List"),
	LocatorDef::direct("ObjectArray", "collections", "ObjectArray"),
	LocatorDef::direct("File", "io", "File"),
	LocatorDef::direct("Directory", "io", "Directory"),
	LocatorDef::direct("Box", "shapes", "Box"),
	LocatorDef::direct("Ellipse", "shapes", "Ellipse"),
	LocatorDef::direct("Line", "shapes", "Line"),
	LocatorDef::direct("Axis", "plotting.hist", "Axis"),
	LocatorDef::family("Histogram1D_Byte", "plotting.hist", "Hist", &[("type", "B")]),
	LocatorDef::family("Histogram1D_Short", "plotting.hist", "Hist", &[("type", "S")]),
	LocatorDef::family("Histogram1D_Int", "plotting.hist", "Hist", &[("type", "I")]),
	LocatorDef::family("Histogram1D_Float", "plotting.hist", "Hist", &[("type", "F")]),
	LocatorDef::family("Histogram1D_Double", "plotting.hist", "Hist", &[("type", "D")]),
	LocatorDef::family("Histogram2D_Byte", "plotting.hist", "Hist2D", &[("type", "B")]),
	LocatorDef::family("Histogram2D_Short", "plotting.hist", "Hist2D", &[("type", "S")]),
	LocatorDef::family("Histogram2D_Int", "plotting.hist", "Hist2D", &[("type", "I")]),
	LocatorDef::family("Histogram2D_Float", "plotting.hist", "Hist2D", &[("type", "F")]),
	LocatorDef::family("Histogram2D_Double", "plotting.hist", "Hist2D", &[("type", "D")]),
	LocatorDef::direct("HistogramStack", "plotting.hist", "HistStack"),
];

/// `Efficiency` first shipped in runtime 2.28/00.
pub const EFFICIENCY_SINCE: Version = Version::new(2, 28, 0);
pub const EFFICIENCY: LocatorDef = LocatorDef::direct("Efficiency", "plotting.hist", "Efficiency");
