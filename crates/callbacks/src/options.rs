use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// What an invocation does when a callable panics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
	/// The panic unwinds out of the invocation; later callables do not run.
	#[default]
	Propagate,
	/// The panic is caught and logged, and the invocation moves on to the next
	/// callable. A panicking callable never matches a termination predicate
	/// and contributes nothing to collected results.
	Isolate,
}

/// Per-registry configuration.
///
/// Hosts usually build this in code, but it also deserializes so it can be
/// read from a host's own config file:
///
/// ```
/// use hookline_callbacks::{FailurePolicy, RegistryOptions};
///
/// let opts: RegistryOptions =
/// 	serde_json::from_str(r#"{ "label": "on_save", "failure": "isolate" }"#).unwrap();
/// assert_eq!(opts.failure, FailurePolicy::Isolate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryOptions {
	/// Name attached to log events emitted by the registry.
	pub label: Cow<'static, str>,
	/// Panic handling during invocation.
	pub failure: FailurePolicy,
}

impl Default for RegistryOptions {
	fn default() -> Self {
		Self {
			label: Cow::Borrowed("callbacks"),
			failure: FailurePolicy::default(),
		}
	}
}

impl RegistryOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
		self.label = label.into();
		self
	}

	pub fn with_failure(mut self, failure: FailurePolicy) -> Self {
		self.failure = failure;
		self
	}
}
