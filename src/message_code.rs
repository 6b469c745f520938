//! Message codes for the data-transport console logger.
//!
//! Codes help correlate a printed line with the place that emitted it.
//! Prefixes of the rendered labels:
//! - MCW => message code, warning
//! - MCE => message code, error

use std::fmt;

use crate::catalog;

/// First code of the error band. Everything below it is a warning.
pub const ERROR_BAND_START: i64 = 1000;

#[repr(i64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageCode {
    /// A data object does not implement its byte serialisation.
    DataObjectMissingBytesImpl = 1,
    /// An event upload failed.
    UploadFailed = 2,
    /// An event upload was forced.
    ForcedUpload = 3,

    /// An event transformer does not implement its transform.
    TransformerDoesntImplementTransform = 1000,
    /// Creating a storage directory failed.
    DirectoryCreationError = 1001,
    /// Writing an event file failed.
    FileWriteError = 1002,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Warning,
    Error,
}

impl MessageCode {
    pub const ALL: [MessageCode; 6] = [
        MessageCode::DataObjectMissingBytesImpl,
        MessageCode::UploadFailed,
        MessageCode::ForcedUpload,
        MessageCode::TransformerDoesntImplementTransform,
        MessageCode::DirectoryCreationError,
        MessageCode::FileWriteError,
    ];

    /// Numeric value of the code
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn band(self) -> Band {
        if self.code() >= ERROR_BAND_START {
            Band::Error
        } else {
            Band::Warning
        }
    }

    pub fn label(self) -> &'static str {
        catalog::render(self)
    }
}

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A raw integer that names no declared message code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownMessageCode(pub i64);

impl fmt::Display for UnknownMessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown message code: {}", self.0)
    }
}

impl std::error::Error for UnknownMessageCode {}

impl TryFrom<i64> for MessageCode {
    type Error = UnknownMessageCode;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MessageCode::ALL
            .iter()
            .copied()
            .find(|code| code.code() == value)
            .ok_or(UnknownMessageCode(value))
    }
}
