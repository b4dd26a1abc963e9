use std::fmt;
use std::sync::Arc;

use crate::CallbackId;

/// Type-erased callable stored by a registry.
pub type CallbackFn<A, R> = Arc<dyn Fn(&A) -> R + Send + Sync>;

/// One registered callable paired with its id.
pub struct CallbackEntry<A: ?Sized, R> {
	id: CallbackId,
	callback: CallbackFn<A, R>,
}

impl<A: ?Sized, R> CallbackEntry<A, R> {
	pub(crate) fn new(id: CallbackId, callback: CallbackFn<A, R>) -> Self {
		Self { id, callback }
	}

	pub fn id(&self) -> CallbackId {
		self.id
	}

	/// Invokes the callable directly.
	#[inline]
	pub fn call(&self, args: &A) -> R {
		(self.callback)(args)
	}

	/// Returns true if both entries share the same callable allocation.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.callback, &other.callback)
	}
}

impl<A: ?Sized, R> Clone for CallbackEntry<A, R> {
	fn clone(&self) -> Self {
		Self {
			id: self.id,
			callback: Arc::clone(&self.callback),
		}
	}
}

impl<A: ?Sized, R> fmt::Debug for CallbackEntry<A, R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CallbackEntry").field("id", &self.id).finish_non_exhaustive()
	}
}
