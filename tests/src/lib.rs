//! Shared helpers for the workspace integration tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logger for tests, honouring `RUST_LOG`
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
        log::info!("Test logger initialized");
    });
}

/// Assert two floats agree to a relative tolerance
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
