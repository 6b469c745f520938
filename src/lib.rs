pub mod log_macros;

pub mod backend;
pub mod catalog;
pub mod configure;
pub mod emitter;
pub mod fault;
pub mod logger;
pub mod message_code;

pub use emitter::DiagnosticEmitter;
pub use message_code::MessageCode;
