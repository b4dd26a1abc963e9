#![allow(unused_crate_dependencies)]
//! Registry behaviour under concurrent writers and readers.

mod common;

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use hookline_callbacks::{CallbackId, CallbackRegistry};
use pretty_assertions::assert_eq;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

#[test]
fn concurrent_registration_issues_distinct_ids() {
	common::init_tracing();
	let reg: CallbackRegistry<()> = CallbackRegistry::new();

	let issued: Vec<CallbackId> = thread::scope(|s| {
		let handles: Vec<_> = (0..THREADS)
			.map(|_| s.spawn(|| (0..PER_THREAD).map(|_| reg.register(|_| {})).collect::<Vec<_>>()))
			.collect();
		handles
			.into_iter()
			.flat_map(|h| h.join().expect("registering thread panicked"))
			.collect()
	});

	let distinct: HashSet<_> = issued.iter().copied().collect();
	assert_eq!(issued.len(), THREADS * PER_THREAD);
	assert_eq!(distinct.len(), THREADS * PER_THREAD);
	assert_eq!(reg.len(), THREADS * PER_THREAD);
	assert!(issued.iter().all(|id| id.get() != 0));

	let ids = reg.ids();
	assert!(ids.windows(2).all(|w| w[0] < w[1]), "list order must follow id order");
	assert_eq!(reg.last_id().map(CallbackId::get), Some((THREADS * PER_THREAD) as u64));
}

#[test]
fn concurrent_deregistration_removes_each_entry_once() {
	let reg: CallbackRegistry<()> = CallbackRegistry::new();
	let ids: Vec<_> = (0..THREADS * PER_THREAD).map(|_| reg.register(|_| {})).collect();
	let removed = AtomicUsize::new(0);

	thread::scope(|s| {
		for _ in 0..THREADS {
			s.spawn(|| {
				for &id in &ids {
					if reg.deregister(id) {
						removed.fetch_add(1, Ordering::Relaxed);
					}
				}
			});
		}
	});

	assert_eq!(removed.load(Ordering::Relaxed), ids.len());
	assert!(reg.is_empty());
}

#[test]
fn invocation_sees_consistent_lists_while_writers_run() {
	common::init_tracing();
	let reg: Arc<CallbackRegistry<(), usize>> = Arc::new(CallbackRegistry::new());
	for _ in 0..4 {
		reg.register(|_| 1);
	}

	thread::scope(|s| {
		let writer = s.spawn(|| {
			for _ in 0..PER_THREAD {
				let id = reg.register(|_| 1);
				assert!(reg.deregister(id));
			}
		});

		for _ in 0..PER_THREAD {
			let results = reg.collect(&());
			assert!(matches!(results.len(), 4 | 5), "torn list: {} entries", results.len());
			assert!(results.iter().all(|&r| r == 1));
		}

		writer.join().expect("writer panicked");
	});

	assert_eq!(reg.len(), 4);
}
