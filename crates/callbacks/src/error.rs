/// Errors reported by registry operations.
///
/// Deregistering an unknown id is not an error; it returns `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Every `u64` id has been issued. Ids are never reused, so no further
	/// registrations are possible on this registry.
	#[error("callback id space exhausted")]
	IdSpaceExhausted,
}
