//! Collaborator surface for the native object runtime.
//!
//! The adaptation layer in `veneer-registry` treats the runtime as an
//! external system that supplies exactly four things: class objects with a
//! stable name, instances whose field storage it never copies, a namespace
//! lookup by class name, and construction via positional/keyword arguments.
//! This crate is that surface. Nothing here knows about wrappers or the
//! registry.

/// Native runtime error types.
pub mod error;
/// Class objects, instances, and the class namespace.
pub mod object;
/// Runtime version decoding and ordering.
pub mod version;
/// Argument and field value types.
pub mod value;

pub use error::NativeError;
pub use object::{FieldMap, Namespace, NativeClass, NativeObject};
pub use version::Version;
pub use value::{Args, Value};
