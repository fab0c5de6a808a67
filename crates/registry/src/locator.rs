//! Table rows and the locator/parameter types derived from them.

use std::collections::BTreeMap;

/// Parameters distinguishing the members of a wrapper family (e.g. the
/// storage kind of a histogram). Ordered and hashable so a parameter set can
/// key the family cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Params(BTreeMap<String, String>);

impl Params {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
		Self(
			pairs
				.iter()
				.map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
				.collect(),
		)
	}

	pub fn set(mut self, key: &str, value: &str) -> Self {
		self.0.insert(key.to_owned(), value.to_owned());
		self
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

/// A static registry table row: native class name on the left, wrapper
/// locator on the right. Rows with `params` belong to a parameterized family
/// sharing one implementation.
#[derive(Debug, Clone, Copy)]
pub struct LocatorDef {
	pub native: &'static str,
	pub module: &'static str,
	pub class: &'static str,
	pub params: Option<&'static [(&'static str, &'static str)]>,
}

impl LocatorDef {
	/// A direct mapping to a hand-written wrapper class.
	pub const fn direct(native: &'static str, module: &'static str, class: &'static str) -> Self {
		Self {
			native,
			module,
			class,
			params: None,
		}
	}

	/// A family mapping: one wrapper implementation specialized per
	/// parameter set.
	pub const fn family(
		native: &'static str,
		module: &'static str,
		class: &'static str,
		params: &'static [(&'static str, &'static str)],
	) -> Self {
		Self {
			native,
			module,
			class,
			params: Some(params),
		}
	}
}

/// The runtime form of a table row, immutable once the registry is built.
#[derive(Debug, Clone)]
pub struct Locator {
	pub module: &'static str,
	pub class: &'static str,
	pub params: Option<Params>,
}

impl From<&LocatorDef> for Locator {
	fn from(def: &LocatorDef) -> Self {
		Self {
			module: def.module,
			class: def.class,
			params: def.params.map(Params::from_pairs),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Parameter sets hash by content, not insertion order.
	#[test]
	fn params_key_is_order_independent() {
		let a = Params::new().set("type", "F").set("dim", "1");
		let b = Params::new().set("dim", "1").set("type", "F");
		assert_eq!(a, b);
	}

	#[test]
	fn family_row_carries_params() {
		let row = LocatorDef::family("Histogram1D_Float", "plotting.hist", "Hist", &[("type", "F")]);
		let locator = Locator::from(&row);
		let params = locator.params.expect("family row");
		assert_eq!(params.get("type"), Some("F"));
	}
}
