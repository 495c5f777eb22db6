/// Installs the global `tracing` subscriber.
///
/// Levels come from `RUST_LOG`. Output is compact and omits module paths since
/// every event already names what it is about.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
