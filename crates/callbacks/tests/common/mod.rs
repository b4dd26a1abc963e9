use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber so registry logs show up under `--nocapture`.
pub fn init_tracing() {
	TRACING.call_once(|| {
		let _ = tracing_subscriber::fmt()
			.with_test_writer()
			.with_max_level(tracing::Level::TRACE)
			.try_init();
	});
}
