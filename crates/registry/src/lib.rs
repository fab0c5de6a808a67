//! Wrapper registry and adaptation layer.
//!
//! The binding library overlays hand-written wrapper classes on objects
//! produced by the native runtime without copying them. This crate is the
//! machinery that makes that work:
//!
//! - a declarative table mapping native class names to wrapper locators
//!   ([`LocatorDef`]), with version-conditional rows
//! - a lazy resolver that materializes wrapper classes on first request and
//!   memoizes them ([`Registry::resolve`])
//! - a family factory producing one specialized class per parameter set for
//!   parameterized wrapper families ([`WrapperDef::specialize`])
//! - the adaptation entry point that reclassifies values coming out of the
//!   runtime ([`Registry::adapt`])
//! - link-time self-registration for wrapper classes and their aliases
//!   ([`ClassRegistration`], [`ModuleDef`])
//! - the construction factory ([`Registry::construct`])
//!
//! Resolution is identity-stable: the same name always yields the same
//! `Arc<WrapperClass>`. Adaptation fails open: a class with no registered
//! wrapper produces a warning and the input unchanged, never an error. Only
//! broken table data (a locator naming a module or export that does not
//! exist) is fatal.

/// Adaptation entry point and construction factory.
pub mod adapt;
/// Registry assembly from table rows and link-time submissions.
pub mod builder;
/// Error taxonomy.
pub mod error;
/// Table rows, locators, and family parameters.
pub mod locator;
/// The registry: table, reverse index, and resolution caches.
pub mod registry;
/// Wrapper descriptors, materialized classes, and wrapped values.
pub mod wrapper;

pub use adapt::{Adaptable, AdaptingCtor, AdaptOptions};
pub use builder::RegistryBuilder;
pub use error::RegistryError;
pub use locator::{Locator, LocatorDef, Params};
pub use registry::Registry;
pub use wrapper::{ClassRegistration, ModuleDef, Wrapped, WrapperClass, WrapperDef};
