use crate::config::LogLevel;
use tracing_subscriber::FmtSubscriber;

/// Install the global fmt subscriber. A second call keeps the first
/// subscriber and reports the conflict on stderr.
pub fn init_tracing(level: LogLevel) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level.as_tracing_level())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: Failed to install tracing subscriber: {e}");
    }
}
