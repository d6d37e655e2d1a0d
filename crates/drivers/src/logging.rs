use flexi_logger::{Logger, LoggerHandle};

/// Starts stderr logging with the configured level spec; `RUST_LOG` wins
/// when set. The returned handle must stay alive for the process lifetime.
/// A broken spec degrades to no logging rather than aborting the UI.
pub fn init_logging(spec: &str) -> Option<LoggerHandle> {
    match Logger::try_with_env_or_str(spec) {
        Ok(logger) => match logger.start() {
            Ok(handle) => Some(handle),
            Err(error) => {
                eprintln!("failed to start logger: {error}");
                None
            }
        },
        Err(error) => {
            eprintln!("invalid log spec `{spec}`: {error}");
            None
        }
    }
}
