use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::id::IdAllocator;
use crate::{CallbackEntry, CallbackFn, CallbackId, Emptiness, RegistryError, RegistryOptions, Snapshot, Termination};


/// Ordered set of callables sharing the signature `Fn(&A) -> R`.
///
/// Entries run in registration order. The entry list is published as an
/// immutable [`Snapshot`]: readers load it without locking, while writers are
/// serialized and swap in a modified copy. A registry is `Send + Sync` and is
/// typically embedded in a host type that hands out `&CallbackRegistry`
/// through an accessor.
pub struct CallbackRegistry<A: ?Sized, R = ()> {
	entries: ArcSwap<Vec<CallbackEntry<A, R>>>,
	/// Serializes writers so ids are issued in list order.
	writer: Mutex<()>,
	ids: IdAllocator,
	options: Arc<RegistryOptions>,
}

impl<A: ?Sized, R> CallbackRegistry<A, R> {
	pub fn new() -> Self {
		Self::with_options(RegistryOptions::default())
	}

	pub fn with_options(options: RegistryOptions) -> Self {
		Self {
			entries: ArcSwap::from_pointee(Vec::new()),
			writer: Mutex::new(()),
			ids: IdAllocator::default(),
			options: Arc::new(options),
		}
	}

	pub fn options(&self) -> &RegistryOptions {
		&self.options
	}

	/// Appends `callback` and returns its id.
	///
	/// # Panics
	///
	/// Panics if the registry has issued every `u64` id. Use
	/// [`try_register`](Self::try_register) to handle that case.
	pub fn register<F>(&self, callback: F) -> CallbackId
	where
		F: Fn(&A) -> R + Send + Sync + 'static,
	{
		match self.try_register(callback) {
			Ok(id) => id,
			Err(err) => panic!("{}: {err}", self.options.label),
		}
	}

	/// Appends `callback` and returns its id, or an error once ids run out.
	pub fn try_register<F>(&self, callback: F) -> Result<CallbackId, RegistryError>
	where
		F: Fn(&A) -> R + Send + Sync + 'static,
	{
		self.try_register_shared(Arc::new(callback))
	}

	/// Appends an already shared callable.
	///
	/// The same callable may be registered several times, in one registry or
	/// many; each registration gets its own id.
	pub fn try_register_shared(&self, callback: CallbackFn<A, R>) -> Result<CallbackId, RegistryError> {
		let _writer = self.writer.lock();
		let id = self.ids.next()?;

		let cur = self.entries.load();
		let mut next = Vec::with_capacity(cur.len() + 1);
		next.extend(cur.iter().cloned());
		next.push(CallbackEntry::new(id, callback));
		self.entries.store(Arc::new(next));

		tracing::trace!(registry = %self.options.label, id = id.get(), "callback registered");
		Ok(id)
	}

	/// Removes the entry with `id`, keeping the order of the rest.
	///
	/// Returns false if no such entry exists, for ids that were never issued
	/// and for ids already removed alike.
	pub fn deregister(&self, id: CallbackId) -> bool {
		// Dropping a callable may re-enter the registry, so the old list must
		// outlive the writer lock.
		let prev = {
			let _writer = self.writer.lock();
			let cur = self.entries.load();
			let Some(pos) = cur.iter().position(|e| e.id() == id) else {
				return false;
			};

			let mut next = Vec::with_capacity(cur.len() - 1);
			next.extend(cur[..pos].iter().cloned());
			next.extend(cur[pos + 1..].iter().cloned());
			self.entries.swap(Arc::new(next))
		};

		tracing::trace!(registry = %self.options.label, id = id.get(), "callback deregistered");
		drop(prev);
		true
	}

	/// Removes every entry. Ids issued so far stay retired.
	pub fn deregister_all(&self) {
		let prev = {
			let _writer = self.writer.lock();
			self.entries.swap(Arc::new(Vec::new()))
		};
		tracing::debug!(registry = %self.options.label, removed = prev.len(), "all callbacks deregistered");
		drop(prev);
	}

	/// Current entries, for inspection or repeated invocation.
	pub fn snapshot(&self) -> Snapshot<A, R> {
		Snapshot::new(self.entries.load_full(), Arc::clone(&self.options))
	}

	pub fn len(&self) -> usize {
		self.entries.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.load().is_empty()
	}

	pub fn contains(&self, id: CallbackId) -> bool {
		self.entries.load().iter().any(|e| e.id() == id)
	}

	/// Ids of the registered entries, in invocation order.
	pub fn ids(&self) -> Vec<CallbackId> {
		self.entries.load().iter().map(CallbackEntry::id).collect()
	}

	/// The most recently issued id, whether or not it is still registered.
	pub fn last_id(&self) -> Option<CallbackId> {
		self.ids.last()
	}

	/// Calls every entry in registration order, discarding results.
	///
	/// Use [`collect`](Self::collect) or [`invoke_last`](Self::invoke_last)
	/// when the results matter.
	pub fn invoke_all(&self, args: &A) {
		self.snapshot().invoke_all(args);
	}

	/// Calls every entry and returns the results in registration order.
	pub fn collect(&self, args: &A) -> Vec<R> {
		self.snapshot().collect(args)
	}

	/// Calls every entry and returns the result of the last one to produce a
	/// value, or `None` if there are no entries.
	pub fn invoke_last(&self, args: &A) -> Option<R> {
		self.snapshot().invoke_last(args)
	}

	/// Calls entries until `until` accepts a result. See
	/// [`Snapshot::invoke_until`].
	pub fn invoke_until<T>(&self, args: &A, until: T) -> Option<R>
	where
		T: Termination<R>,
	{
		self.snapshot().invoke_until(args, until)
	}

	/// Returns the first non-empty result, or `R::default()`.
	pub fn invoke_until_non_empty(&self, args: &A) -> R
	where
		R: Emptiness + Default,
	{
		self.snapshot().invoke_until_non_empty(args)
	}
}

impl<A: ?Sized> CallbackRegistry<A, bool> {
	/// Returns true at the first entry that returns true. Later entries do not
	/// run. Returns false if every entry returned false or there are none.
	pub fn invoke_until_true(&self, args: &A) -> bool {
		self.snapshot().invoke_until_true(args)
	}
}

impl<A: ?Sized, R> Default for CallbackRegistry<A, R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<A: ?Sized, R> fmt::Debug for CallbackRegistry<A, R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CallbackRegistry")
			.field("label", &self.options.label)
			.field("ids", &self.ids())
			.field("last_id", &self.last_id())
			.finish()
	}
}
