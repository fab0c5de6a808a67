//! The adaptation entry point and the construction factory.
//!
//! Everything the library pulls out of the native runtime goes through
//! [`Registry::adapt`]: instances get handed to their wrapper class,
//! class objects get substituted for wrapper classes, and anything without a
//! registered wrapper passes through unchanged. The only errors that escape
//! are broken table data; unresolved classes degrade to identity.

use std::sync::Arc;

use veneer_native::{Args, NativeClass, NativeObject};

use crate::error::RegistryError;
use crate::locator::Params;
use crate::registry::Registry;
use crate::wrapper::{Wrapped, WrapperClass};

/// Options recognized by [`Registry::adapt`].
#[derive(Debug, Clone)]
pub struct AdaptOptions {
	/// Warn when a class has no registered wrapper.
	pub warn: bool,
	/// For class-level adaptation: return a constructor that builds the
	/// native object and immediately adapts it.
	pub after_init: bool,
	/// Leftover options, forwarded to the wrapper's post-construction hook.
	pub hook_args: Params,
}

impl Default for AdaptOptions {
	fn default() -> Self {
		Self {
			warn: true,
			after_init: false,
			hook_args: Params::new(),
		}
	}
}

impl AdaptOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Suppresses the unresolved-class warning.
	pub fn quiet(mut self) -> Self {
		self.warn = false;
		self
	}

	pub fn with_after_init(mut self) -> Self {
		self.after_init = true;
		self
	}

	pub fn hook_arg(mut self, key: &str, value: &str) -> Self {
		self.hook_args = self.hook_args.set(key, value);
		self
	}
}

/// A value flowing through the adaptation layer: anything obtained from the
/// native runtime, before or after adaptation.
#[derive(Debug)]
pub enum Adaptable {
	/// A raw native instance.
	Object(NativeObject),
	/// An instance already handed to its wrapper.
	Wrapped(Wrapped),
	/// A native class object.
	Class(Arc<NativeClass>),
	/// A resolved wrapper class.
	WrapperClass(Arc<WrapperClass>),
	/// A constructor that adapts everything it builds.
	Constructor(AdaptingCtor),
}

impl Adaptable {
	pub fn is_wrapped(&self) -> bool {
		matches!(self, Self::Wrapped(_))
	}

	pub fn as_wrapped(&self) -> Option<&Wrapped> {
		match self {
			Self::Wrapped(w) => Some(w),
			_ => None,
		}
	}

	pub fn into_wrapped(self) -> Option<Wrapped> {
		match self {
			Self::Wrapped(w) => Some(w),
			_ => None,
		}
	}

	pub fn as_object(&self) -> Option<&NativeObject> {
		match self {
			Self::Object(o) => Some(o),
			_ => None,
		}
	}
}

impl From<NativeObject> for Adaptable {
	fn from(object: NativeObject) -> Self {
		Self::Object(object)
	}
}

impl From<Wrapped> for Adaptable {
	fn from(wrapped: Wrapped) -> Self {
		Self::Wrapped(wrapped)
	}
}

impl From<Arc<NativeClass>> for Adaptable {
	fn from(class: Arc<NativeClass>) -> Self {
		Self::Class(class)
	}
}

/// Class-level adaptation result for `after_init`: behaves like the native
/// constructor but always yields an adapted instance.
#[derive(Debug)]
pub struct AdaptingCtor {
	class: Arc<NativeClass>,
	name: String,
	warn: bool,
}

impl AdaptingCtor {
	fn new(class: Arc<NativeClass>, warn: bool) -> Self {
		let name = format!("{}_adapted", class.name());
		Self { class, name, warn }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn native_class(&self) -> &Arc<NativeClass> {
		&self.class
	}

	/// Builds a native instance and immediately adapts it.
	pub fn construct(&self, registry: &Registry, args: &Args) -> Result<Adaptable, RegistryError> {
		let object = self.class.instantiate(args);
		let options = if self.warn {
			AdaptOptions::new()
		} else {
			AdaptOptions::new().quiet()
		};
		registry.adapt(Adaptable::Object(object), &options)
	}
}

impl Registry {
	/// Adapts a value obtained from the native runtime.
	///
	/// Already-adapted values pass through untouched. Instances are handed
	/// to their wrapper class (same field storage, then the wrapper's
	/// post-construction hook). Class objects are substituted for their
	/// wrapper class, or for an [`AdaptingCtor`] when `after_init` is set.
	/// A class with no table entry degrades to identity, with a warning
	/// unless suppressed.
	pub fn adapt(&self, value: Adaptable, options: &AdaptOptions) -> Result<Adaptable, RegistryError> {
		match value {
			Adaptable::Wrapped(_) | Adaptable::WrapperClass(_) | Adaptable::Constructor(_) => Ok(value),

			Adaptable::Class(class) => {
				let Some(wrapper) = self.resolve(class.name())? else {
					if options.warn {
						tracing::warn!(
							class = class.name(),
							"no wrapper implementation registered for class"
						);
					}
					return Ok(Adaptable::Class(class));
				};
				if options.after_init {
					Ok(Adaptable::Constructor(AdaptingCtor::new(class, options.warn)))
				} else {
					Ok(Adaptable::WrapperClass(wrapper))
				}
			}

			Adaptable::Object(object) => {
				let Some(wrapper) = self.resolve(object.class_name())? else {
					if options.warn {
						tracing::warn!(
							class = object.class_name(),
							"no wrapper implementation registered for class"
						);
					}
					return Ok(Adaptable::Object(object));
				};
				let mut wrapped = Wrapped::new(Arc::clone(&wrapper), object);
				if let Some(hook) = wrapper.def().post_init {
					hook(&mut wrapped, &options.hook_args);
				}
				Ok(Adaptable::Wrapped(wrapped))
			}
		}
	}

	/// Constructs a native instance by class name and routes it through
	/// [`Registry::adapt`].
	///
	/// `Ok(None)` means the linked runtime has no class under that name —
	/// expected under version skew, so not an error.
	pub fn construct(&self, class_name: &str, args: &Args) -> Result<Option<Adaptable>, RegistryError> {
		let Some(class) = self.namespace().class(class_name) else {
			return Ok(None);
		};
		let object = class.instantiate(args);
		self.adapt(Adaptable::Object(object), &AdaptOptions::new()).map(Some)
	}
}
