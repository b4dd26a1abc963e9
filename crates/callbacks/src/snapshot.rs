use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::panic::panic_message;
use crate::{CallbackEntry, CallbackId, Emptiness, FailurePolicy, NonEmpty, RegistryOptions, Termination, Truthy};


/// Immutable view of a registry's entries at one instant.
///
/// Every invocation walks a snapshot, so registrations and deregistrations
/// made while it runs (including from inside a callable) only affect later
/// invocations. Holding a snapshot keeps its callables alive even after they
/// are deregistered.
pub struct Snapshot<A: ?Sized, R> {
	entries: Arc<Vec<CallbackEntry<A, R>>>,
	options: Arc<RegistryOptions>,
}

impl<A: ?Sized, R> Snapshot<A, R> {
	pub(crate) fn new(entries: Arc<Vec<CallbackEntry<A, R>>>, options: Arc<RegistryOptions>) -> Self {
		Self { entries, options }
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entries in invocation order.
	pub fn entries(&self) -> &[CallbackEntry<A, R>] {
		&self.entries
	}

	pub fn iter(&self) -> std::slice::Iter<'_, CallbackEntry<A, R>> {
		self.entries.iter()
	}

	pub fn ids(&self) -> Vec<CallbackId> {
		self.entries.iter().map(CallbackEntry::id).collect()
	}

	pub fn contains(&self, id: CallbackId) -> bool {
		self.entries.iter().any(|e| e.id() == id)
	}

	/// Calls every entry in order, discarding results.
	pub fn invoke_all(&self, args: &A) {
		for entry in self.entries.iter() {
			let _ = self.call(entry, args);
		}
	}

	/// Calls every entry in order and returns their results in that order.
	pub fn collect(&self, args: &A) -> Vec<R> {
		self.entries.iter().filter_map(|entry| self.call(entry, args)).collect()
	}

	/// Calls every entry in order and returns the last result produced.
	pub fn invoke_last(&self, args: &A) -> Option<R> {
		self.entries
			.iter()
			.fold(None, |last, entry| self.call(entry, args).or(last))
	}

	/// Calls entries in order until `until` accepts a result, and returns it.
	///
	/// Entries after the match are not called. Returns `None` when nothing
	/// matched, including when the snapshot is empty.
	pub fn invoke_until<T>(&self, args: &A, until: T) -> Option<R>
	where
		T: Termination<R>,
	{
		self.entries
			.iter()
			.filter_map(|entry| self.call(entry, args))
			.find(|result| until.is_match(result))
	}

	/// Returns the first non-empty result, or `R::default()` when every entry
	/// returned an empty value or there are no entries.
	pub fn invoke_until_non_empty(&self, args: &A) -> R
	where
		R: Emptiness + Default,
	{
		self.invoke_until(args, NonEmpty).unwrap_or_default()
	}

	fn call(&self, entry: &CallbackEntry<A, R>, args: &A) -> Option<R> {
		match self.options.failure {
			FailurePolicy::Propagate => Some(entry.call(args)),
			FailurePolicy::Isolate => match catch_unwind(AssertUnwindSafe(|| entry.call(args))) {
				Ok(result) => Some(result),
				Err(payload) => {
					tracing::error!(
						registry = %self.options.label,
						id = entry.id().get(),
						panic = panic_message(payload.as_ref()).unwrap_or("<non-string panic payload>"),
						"callback panicked; continuing with remaining callbacks"
					);
					None
				}
			},
		}
	}
}

impl<A: ?Sized> Snapshot<A, bool> {
	/// Returns true at the first entry that returns true; false if none did.
	pub fn invoke_until_true(&self, args: &A) -> bool {
		self.invoke_until(args, Truthy).is_some()
	}
}

impl<A: ?Sized, R> Clone for Snapshot<A, R> {
	fn clone(&self) -> Self {
		Self {
			entries: Arc::clone(&self.entries),
			options: Arc::clone(&self.options),
		}
	}
}

impl<'a, A: ?Sized, R> IntoIterator for &'a Snapshot<A, R> {
	type Item = &'a CallbackEntry<A, R>;
	type IntoIter = std::slice::Iter<'a, CallbackEntry<A, R>>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<A: ?Sized, R> fmt::Debug for Snapshot<A, R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Snapshot")
			.field("label", &self.options.label)
			.field("ids", &self.ids())
			.finish()
	}
}
