use panorama::setup_logging;

#[test]
fn test_logging_setup() {
    // setup_logging must not panic, even when called more than once
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        setup_logging();
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}

#[test]
fn test_logging_setup_after_existing_subscriber() {
    // Another subscriber may already own the global slot; setup_logging leaves it in place.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let result = std::panic::catch_unwind(|| {
        setup_logging();
        tracing::info!("still logging");
    });

    assert!(result.is_ok(), "setup_logging should be a no-op once a subscriber exists");
}
