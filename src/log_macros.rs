//! Call-site wrappers around [`DiagnosticEmitter`](crate::emitter::DiagnosticEmitter)
//!
//! The message is a format string plus arguments, checked at compile time:
//! `gdt_log_warning!(emitter, MessageCode::UploadFailed, "status {}", status)`.

#[macro_export]
macro_rules! gdt_log_warning {
    ($emitter:expr, $code:expr, $($arg:tt)+) => {
        $emitter.log_warning($code, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! gdt_log_error {
    ($emitter:expr, $code:expr, $($arg:tt)+) => {
        $emitter.log_error($code, format_args!($($arg)+))
    };
}
