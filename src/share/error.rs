use thiserror::Error;

/// Failure modes of a share attempt.
///
/// Only [`ShareError::ClipboardWrite`] is ever surfaced to the user;
/// the sheet variants either fall back to a clipboard copy or end the
/// attempt quietly.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("clipboard write failed: {reason}")]
    ClipboardWrite { reason: String },

    #[error("no share sheet is available")]
    SheetUnavailable,

    #[error("share dismissed")]
    SheetDismissed,

    #[error("share sheet failed: {reason}")]
    Sheet { reason: String },
}
