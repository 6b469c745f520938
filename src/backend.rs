//! Logging backend the emitter writes to.

use log::{Level, Record};

/// Generic logging backend.
///
/// Implementations own output, formatting and filtering. `force_log` asks the
/// backend to skip its verbosity threshold for this one message.
pub trait LogBackend: Send + Sync {
    fn emit(&self, level: Level, service: &str, force_log: bool, label: &str, message: &str);
}

/// Backend that writes through the `log` facade.
///
/// The service tag becomes the record target, so whatever logger is installed
/// (see [`crate::logger::setup_logger`]) can print or route on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrateBackend;

impl LogBackend for LogCrateBackend {
    fn emit(&self, level: Level, service: &str, force_log: bool, label: &str, message: &str) {
        if force_log {
            // Bypass log::max_level() and hand the record straight to the logger
            log::logger().log(
                &Record::builder()
                    .args(format_args!("[{}] {}", label, message))
                    .level(level)
                    .target(service)
                    .build(),
            );
        } else {
            log::log!(target: service, level, "[{}] {}", label, message);
        }
    }
}
