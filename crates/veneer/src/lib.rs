//! veneer — enhanced wrapper classes over the native object runtime.
//!
//! Wrapper modules below declare the classes that overlay native runtime
//! objects; [`table::TABLE`] maps native class names to them. The process
//! registry is assembled once on first use ([`registry()`]) and every value
//! pulled from the runtime is routed through [`adapt`].

use std::sync::OnceLock;

use veneer_native::{Args, Namespace, Version};
use veneer_registry::RegistryBuilder;

/// Container wrappers (lists, object arrays).
pub mod collections;
/// Storage wrappers (files, directories).
pub mod io;
/// Plot wrappers: axes, the histogram family, stacks.
pub mod plotting;
/// The native classes and version this build links against.
pub mod runtime;
/// Shape wrappers.
pub mod shapes;
/// The authored registry table.
pub mod table;

pub use veneer_native::{NativeClass, NativeObject, Value};
pub use veneer_registry::{
	Adaptable, AdaptOptions, Registry, RegistryError, Wrapped, WrapperClass, WrapperDef,
};

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Builds a registry for the given runtime: full table, version-conditional
/// rows, and every module and class registration submitted at link time.
///
/// Tests build private registries through this; the rest of the library
/// goes through [`registry()`].
pub fn build_registry(namespace: Namespace, version: Version) -> Registry {
	let mut builder = RegistryBuilder::new(namespace, version);
	builder.entries(table::TABLE);
	builder.entry_since(table::EFFICIENCY_SINCE, table::EFFICIENCY);
	builder.collect_submitted();
	builder.build()
}

/// The process-wide registry, built on first use against the linked runtime.
pub fn registry() -> &'static Registry {
	REGISTRY.get_or_init(|| build_registry(runtime::linked_namespace(), runtime::LINKED_VERSION))
}

/// Adapts a value from the linked runtime. See [`Registry::adapt`].
pub fn adapt(value: impl Into<Adaptable>, options: &AdaptOptions) -> Result<Adaptable, RegistryError> {
	registry().adapt(value.into(), options)
}

/// Constructs a wrapped instance by native class name. See
/// [`Registry::construct`].
pub fn construct(class_name: &str, args: &Args) -> Result<Option<Adaptable>, RegistryError> {
	registry().construct(class_name, args)
}
