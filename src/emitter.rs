//! Warning and error emission.
//!
//! Every call is a single unconditional write to the backend with the force-log
//! flag set. Errors are additionally reported as a failed assertion, which is
//! loud in debug builds and only a log line in release builds (with the default
//! [`FaultPolicy::DebugAssert`]).

use std::fmt;

use log::Level;

use crate::backend::{LogBackend, LogCrateBackend};
use crate::catalog;
use crate::configure::{EmitterConfig, SERVICE_TAG};
use crate::fault::{FaultPolicy, FaultReporter, PolicyReporter};
use crate::message_code::MessageCode;

pub struct DiagnosticEmitter<B, F> {
    service_tag: String,
    backend: B,
    reporter: F,
}

impl DiagnosticEmitter<LogCrateBackend, PolicyReporter> {
    /// Emitter writing through the `log` facade with the default tag
    pub fn console() -> Self {
        Self::new(SERVICE_TAG, LogCrateBackend, PolicyReporter::default())
    }

    pub fn from_config(config: &EmitterConfig) -> Self {
        Self::new(
            &config.service_tag,
            LogCrateBackend,
            PolicyReporter::new(config.fault_policy),
        )
    }

    pub fn fault_policy(&self) -> FaultPolicy {
        self.reporter.policy()
    }
}

impl<B: LogBackend, F: FaultReporter> DiagnosticEmitter<B, F> {
    pub fn new(service_tag: &str, backend: B, reporter: F) -> Self {
        Self {
            service_tag: service_tag.to_string(),
            backend,
            reporter,
        }
    }

    pub fn log_warning(&self, code: MessageCode, args: fmt::Arguments<'_>) {
        let message = fmt::format(args);
        self.emit(Level::Warn, code, &message);
    }

    /// Log at error level, then report a failed assertion with the same message.
    pub fn log_error(&self, code: MessageCode, args: fmt::Arguments<'_>) {
        let message = fmt::format(args);
        self.emit(Level::Error, code, &message);
        self.reporter.report(false, &message);
    }

    fn emit(&self, level: Level, code: MessageCode, message: &str) {
        self.backend
            .emit(level, &self.service_tag, true, catalog::render(code), message);
    }

    pub fn service_tag(&self) -> &str {
        &self.service_tag
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn reporter(&self) -> &F {
        &self.reporter
    }
}
