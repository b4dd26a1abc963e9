use std::any::Any;

/// Extracts the message from a caught panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
	payload
		.downcast_ref::<&'static str>()
		.copied()
		.or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

#[cfg(test)]
mod tests {
	use std::panic::catch_unwind;

	use super::panic_message;

	#[test]
	fn extracts_static_str_payload() {
		let err = catch_unwind(|| panic!("boom-str")).unwrap_err();
		assert_eq!(panic_message(err.as_ref()), Some("boom-str"));
	}

	#[test]
	fn extracts_string_payload() {
		let err = catch_unwind(|| panic!("{}", String::from("boom-string"))).unwrap_err();
		assert_eq!(panic_message(err.as_ref()), Some("boom-string"));
	}

	#[test]
	fn returns_none_for_other_payloads() {
		let err = catch_unwind(|| std::panic::panic_any(17_u32)).unwrap_err();
		assert_eq!(panic_message(err.as_ref()), None);
	}
}
