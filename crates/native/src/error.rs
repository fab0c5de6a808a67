/// Errors surfaced by the native runtime itself.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NativeError {
	/// The runtime reported a version integer below the packed encoding range.
	#[error("{0} is not a valid packed runtime version")]
	InvalidVersion(u32),

	/// A diagnostic message forwarded from the runtime's error handler.
	#[error("level={level}, loc='{location}', msg='{msg}'")]
	Runtime {
		level: i32,
		location: String,
		msg: String,
	},
}
