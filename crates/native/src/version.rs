use crate::error::NativeError;

/// Native runtime version, decoded from the runtime's packed integer form
/// (`22804` is version `2.28/04`).
///
/// Ordering is field order: major, then minor, then micro. The registry uses
/// this to gate table entries for classes that only exist in newer runtimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
	pub major: u32,
	pub minor: u32,
	pub micro: u32,
}

impl Version {
	pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
		Self { major, minor, micro }
	}

	/// Decodes the packed integer reported by the linked runtime.
	pub fn from_int(packed: u32) -> Result<Self, NativeError> {
		if packed < 10_000 {
			return Err(NativeError::InvalidVersion(packed));
		}
		Ok(Self {
			major: packed / 10_000,
			minor: (packed / 100) % 100,
			micro: packed % 100,
		})
	}
}

impl std::fmt::Display for Version {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{:02}/{:02}", self.major, self.minor, self.micro)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_packed_integer() {
		let v = Version::from_int(22804).expect("valid");
		assert_eq!(v, Version::new(2, 28, 4));
		assert_eq!(v.to_string(), "2.28/04");
	}

	#[test]
	fn rejects_unpacked_integers() {
		assert!(matches!(
			Version::from_int(42),
			Err(NativeError::InvalidVersion(42))
		));
	}

	#[test]
	fn orders_by_major_minor_micro() {
		assert!(Version::new(2, 28, 0) > Version::new(2, 4, 99));
		assert!(Version::new(3, 0, 0) > Version::new(2, 99, 99));
	}
}
