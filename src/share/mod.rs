//! Sharing a profile: clipboard copies, the host share surface, and the
//! worker that keeps both off the UI thread.

pub mod clipboard;
pub mod error;
pub mod open;
pub mod resolve;
pub mod runtime;
pub mod sheet;

#[cfg(test)]
pub(crate) mod testing;

pub use clipboard::{Clipboard, SystemClipboard};
pub use error::ShareError;
pub use open::open_in_browser;
pub use resolve::{ShareAction, ShareResolution, resolve_share};
pub use runtime::{ShareCommand, ShareReceipt, ShareRuntime, ShareTicket};
pub use sheet::{CommandSheet, NoSheet, SharePayload, ShareSheet, ShareVerdict, sheet_from_command};
