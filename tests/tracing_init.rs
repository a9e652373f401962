//! `init_tracing` must leave an existing global subscriber alone.
//!
//! Lives in its own test binary because it installs a process-wide
//! subscriber.

use scopelex::{init_tracing, lexer::lexer::tokenize};

#[test]
fn test_init_tracing_with_existing_subscriber() {
    tracing::subscriber::set_global_default(tracing_subscriber::registry())
        .expect("no subscriber installed yet");
    std::env::set_var("RUST_LOG", "scopelex=trace");

    init_tracing();
    init_tracing();

    assert!(tokenize("int a = 5".to_string(), None).is_ok());
}
