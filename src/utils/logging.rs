use std::env;

/* Logs go to stderr, the level is Info unless RUST_LOG says otherwise
(RUST_LOG=debug, RUST_LOG=portafoglio::parsing=debug...) */
pub fn init_logging() {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .format_target(false);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // Tests may initialize it more than once
    let _ = builder.try_init();
}
