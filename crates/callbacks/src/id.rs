use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::RegistryError;

/// Opaque handle returned by registration and consumed by deregistration.
///
/// Ids are unique within one registry, start at 1 and are never reused, so a
/// stale id can never alias a newer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallbackId(NonZeroU64);

impl CallbackId {
	/// Returns the raw integer value.
	pub const fn get(self) -> u64 {
		self.0.get()
	}

	/// Wraps a raw value; `None` for zero, which is never issued.
	pub const fn from_raw(raw: u64) -> Option<Self> {
		match NonZeroU64::new(raw) {
			Some(id) => Some(Self(id)),
			None => None,
		}
	}
}

impl fmt::Display for CallbackId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

impl From<CallbackId> for u64 {
	fn from(id: CallbackId) -> Self {
		id.get()
	}
}

/// Monotonic id source for one registry.
///
/// The counter holds the last issued value; issuing is a single atomic
/// read-modify-write, so concurrent callers always receive distinct ids.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
	last: AtomicU64,
}

impl IdAllocator {
	/// Issues the next id, failing once the `u64` space is used up.
	///
	/// An exhausted allocator stays exhausted; the counter never wraps.
	pub fn next(&self) -> Result<CallbackId, RegistryError> {
		self.last
			.fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| last.checked_add(1))
			.ok()
			.and_then(|prev| CallbackId::from_raw(prev + 1))
			.ok_or(RegistryError::IdSpaceExhausted)
	}

	/// Returns the most recently issued id, if any.
	pub fn last(&self) -> Option<CallbackId> {
		CallbackId::from_raw(self.last.load(Ordering::Acquire))
	}

	#[cfg(test)]
	pub(crate) fn starting_after(last: u64) -> Self {
		Self {
			last: AtomicU64::new(last),
		}
	}
}
