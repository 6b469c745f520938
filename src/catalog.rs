//! Code to label lookup.

use std::borrow::Cow;

use crate::message_code::MessageCode;

/// Render a declared message code to its label
pub fn render(code: MessageCode) -> &'static str {
    match code {
        MessageCode::DataObjectMissingBytesImpl => "MCWDataObjectMissingBytesImpl",
        MessageCode::UploadFailed => "MCWUploadFailed",
        MessageCode::ForcedUpload => "MCWForcedUpload",
        MessageCode::TransformerDoesntImplementTransform => {
            "MCETransformerDoesntImplementTransform"
        }
        MessageCode::DirectoryCreationError => "MCEDirectoryCreationError",
        MessageCode::FileWriteError => "MCEFileWriteError",
    }
}

/// Render a raw integer code.
///
/// Undeclared codes render as `MCUnknown(<code>)` instead of failing.
pub fn render_raw(code: i64) -> Cow<'static, str> {
    match MessageCode::try_from(code) {
        Ok(code) => Cow::Borrowed(render(code)),
        Err(_) => Cow::Owned(format!("MCUnknown({})", code)),
    }
}

/// Every declared code with its label, in code order
pub fn entries() -> impl Iterator<Item = (MessageCode, &'static str)> {
    MessageCode::ALL.into_iter().map(|code| (code, render(code)))
}
