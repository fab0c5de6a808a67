use rustc_hash::FxHashMap;

/// A scalar flowing across the native construction protocol: constructor
/// arguments and instance field storage both hold these.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Str(String),
}

impl Value {
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(i) => Some(*i),
			_ => None,
		}
	}

	/// Numeric read; integers coerce.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Self::Float(f) => Some(*f),
			Self::Int(i) => Some(*i as f64),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Self::Int(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Self::Float(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Self::Str(v.to_owned())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Self::Str(v)
	}
}

/// Positional and keyword arguments for native construction.
#[derive(Debug, Clone, Default)]
pub struct Args {
	positional: Vec<Value>,
	keyword: FxHashMap<String, Value>,
}

impl Args {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a positional argument.
	pub fn arg(mut self, value: impl Into<Value>) -> Self {
		self.positional.push(value.into());
		self
	}

	/// Sets a keyword argument.
	pub fn kw(mut self, name: &str, value: impl Into<Value>) -> Self {
		self.keyword.insert(name.to_owned(), value.into());
		self
	}

	pub fn get(&self, index: usize) -> Option<&Value> {
		self.positional.get(index)
	}

	pub fn kwarg(&self, name: &str) -> Option<&Value> {
		self.keyword.get(name)
	}

	pub fn kwargs(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.keyword.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.positional.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positional.is_empty() && self.keyword.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn int_coerces_to_float() {
		assert_eq!(Value::Int(3).as_float(), Some(3.0));
		assert_eq!(Value::Str("x".into()).as_float(), None);
	}

	#[test]
	fn args_reads_positional_and_keyword() {
		let args = Args::new().arg(1i64).kw("width", 3i64);
		assert_eq!(args.get(0).and_then(Value::as_int), Some(1));
		assert_eq!(args.kwarg("width").and_then(Value::as_int), Some(3));
		assert!(args.kwarg("height").is_none());
	}
}
