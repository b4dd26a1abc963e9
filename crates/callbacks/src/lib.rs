#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Strongly-typed callback slots.
//!
//! A [`CallbackRegistry`] lets a type expose an extension point with one fixed
//! signature. Other code registers callables against it, receives a
//! [`CallbackId`] back, and can later remove exactly that callable again.
//!
//! ```
//! use hookline_callbacks::CallbackRegistry;
//!
//! let on_line: CallbackRegistry<str, Option<usize>> = CallbackRegistry::new();
//! on_line.register(|line: &str| line.find('#'));
//! let hit = on_line.register(|line: &str| line.find(';'));
//!
//! assert_eq!(on_line.invoke_until_non_empty("x ; y"), Some(2));
//! assert!(on_line.deregister(hit));
//! assert_eq!(on_line.invoke_until_non_empty("x ; y"), None);
//! ```
//!
//! Callables receive their arguments by reference (`&A`); multi-argument
//! signatures use a tuple for `A`. Entries are invoked in registration order,
//! and every invocation iterates a [`Snapshot`] taken when the call starts, so
//! callables may register or deregister other callables (or themselves) while
//! an invocation is in flight.
//!
//! Invocation policies:
//!
//! * [`CallbackRegistry::invoke_all`] runs every entry and discards results.
//! * [`CallbackRegistry::collect`] runs every entry and returns all results.
//! * [`CallbackRegistry::invoke_until`] stops at the first result accepted by a
//!   [`Termination`] predicate. [`NonEmpty`] and [`Truthy`] cover the common
//!   "try handlers until one accepts" cases.

mod entry;
mod error;
mod id;
mod options;
mod panic;
mod policy;
mod registry;
mod snapshot;

pub use entry::{CallbackEntry, CallbackFn};
pub use error::RegistryError;
pub use id::CallbackId;
pub use options::{FailurePolicy, RegistryOptions};
pub use policy::{Emptiness, NonEmpty, Termination, Truthy};
pub use registry::CallbackRegistry;
pub use snapshot::Snapshot;
