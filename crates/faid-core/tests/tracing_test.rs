use faid_core::tracing_setup::{init_tracing, init_tracing_with_filter};

#[test]
fn first_subscriber_wins() {
    init_tracing();
    init_tracing();
    // The global subscriber is already set, so the JSON one reports that.
    assert!(!init_tracing_with_filter("faid=debug"));
    assert!(!init_tracing_with_filter("faid=debug"));
    tracing::info!("tracing initialized");
}
