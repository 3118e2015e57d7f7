//! Resolution of one share attempt against the host capabilities.

use crate::share::clipboard::Clipboard;
use crate::share::error::ShareError;
use crate::share::sheet::{SharePayload, ShareSheet, ShareVerdict};

/// The two share-flavored actions a profile offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareAction {
    /// Put the profile link on the clipboard.
    CopyLink,
    /// Hand the profile to the host share surface.
    Share,
}

impl ShareAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CopyLink => "copy",
            Self::Share => "share",
        }
    }
}

/// How an attempt actually ended, after fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareResolution {
    /// The link is on the clipboard, either directly or as a fallback.
    Copied,
    /// The share surface delivered the payload.
    Presented,
    /// The user backed out of the share surface; nothing else happened.
    Dismissed,
    /// The final clipboard write failed. The only outcome worth an
    /// error notice.
    CopyFailed { reason: String },
}

/// Run one attempt to completion.
///
/// A missing or failing share surface demotes the attempt to a clipboard
/// copy of the link; a dismissal ends it quietly. The clipboard is
/// touched at most once per attempt.
pub fn resolve_share(
    action: ShareAction,
    payload: &SharePayload,
    clipboard: &mut dyn Clipboard,
    sheet: &mut dyn ShareSheet,
) -> ShareResolution {
    match attempt(action, payload, clipboard, sheet) {
        Ok(resolution) => resolution,
        Err(ShareError::SheetDismissed) => ShareResolution::Dismissed,
        Err(error @ (ShareError::SheetUnavailable | ShareError::Sheet { .. })) => {
            log::debug!("{error}; copying the link instead");
            copy_link(payload, clipboard)
        }
        Err(ShareError::ClipboardWrite { reason }) => ShareResolution::CopyFailed { reason },
    }
}

fn attempt(
    action: ShareAction,
    payload: &SharePayload,
    clipboard: &mut dyn Clipboard,
    sheet: &mut dyn ShareSheet,
) -> Result<ShareResolution, ShareError> {
    match action {
        ShareAction::CopyLink => {
            clipboard
                .write(&payload.url)
                .map_err(|reason| ShareError::ClipboardWrite { reason })?;
            Ok(ShareResolution::Copied)
        }
        ShareAction::Share => {
            if !sheet.available() {
                return Err(ShareError::SheetUnavailable);
            }
            match sheet.present(payload) {
                ShareVerdict::Delivered => Ok(ShareResolution::Presented),
                ShareVerdict::Dismissed => Err(ShareError::SheetDismissed),
                ShareVerdict::Failed(reason) => Err(ShareError::Sheet { reason }),
            }
        }
    }
}

fn copy_link(payload: &SharePayload, clipboard: &mut dyn Clipboard) -> ShareResolution {
    match clipboard.write(&payload.url) {
        Ok(()) => ShareResolution::Copied,
        Err(reason) => ShareResolution::CopyFailed { reason },
    }
}
