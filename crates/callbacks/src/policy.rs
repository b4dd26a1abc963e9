//! Termination predicates for short-circuiting invocation.
//!
//! An invocation stops at the first result its [`Termination`] accepts. The
//! predicates here are plain values, so one registry type serves every
//! policy; closures over `&R` work as ad-hoc predicates too.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Decides whether a callable's result ends the invocation.
pub trait Termination<R: ?Sized> {
	fn is_match(&self, result: &R) -> bool;
}

impl<R: ?Sized, F> Termination<R> for F
where
	F: Fn(&R) -> bool,
{
	#[inline]
	fn is_match(&self, result: &R) -> bool {
		self(result)
	}
}

/// Stops at the first non-empty result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonEmpty;

impl<R: Emptiness + ?Sized> Termination<R> for NonEmpty {
	#[inline]
	fn is_match(&self, result: &R) -> bool {
		!result.is_empty()
	}
}

/// Stops at the first `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Truthy;

impl Termination<bool> for Truthy {
	#[inline]
	fn is_match(&self, result: &bool) -> bool {
		*result
	}
}

/// Result types that can be absent or empty.
///
/// Implement this for a handler's return type to use it with
/// [`CallbackRegistry::invoke_until_non_empty`](crate::CallbackRegistry::invoke_until_non_empty).
pub trait Emptiness {
	fn is_empty(&self) -> bool;
}

impl<T> Emptiness for Option<T> {
	#[inline]
	fn is_empty(&self) -> bool {
		self.is_none()
	}
}

impl Emptiness for str {
	#[inline]
	fn is_empty(&self) -> bool {
		str::is_empty(self)
	}
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
	#[inline]
	fn is_empty(&self) -> bool {
		T::is_empty(self)
	}
}

impl<T: Emptiness + ?Sized> Emptiness for Box<T> {
	#[inline]
	fn is_empty(&self) -> bool {
		T::is_empty(self)
	}
}

impl<T> Emptiness for [T] {
	#[inline]
	fn is_empty(&self) -> bool {
		<[T]>::is_empty(self)
	}
}

macro_rules! impl_emptiness {
	($($ty:ident $(<$($param:ident),+>)?),+ $(,)?) => {
		$(
			impl$(<$($param),+>)? Emptiness for $ty$(<$($param),+>)? {
				#[inline]
				fn is_empty(&self) -> bool {
					$ty::is_empty(self)
				}
			}
		)+
	};
}

impl_emptiness!(
	String,
	Vec<T>,
	VecDeque<T>,
	BTreeSet<T>,
	BTreeMap<K, V>,
	HashSet<T, S>,
	HashMap<K, V, S>,
);
