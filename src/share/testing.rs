//! In-memory capability doubles shared by the share and UI tests.

use std::collections::VecDeque;

use crate::share::clipboard::Clipboard;
use crate::share::sheet::{SharePayload, ShareSheet, ShareVerdict};

/// Clipboard that records writes, optionally refusing them all.
#[derive(Default)]
pub(crate) struct MemoryClipboard {
    pub writes: Vec<String>,
    fail_with: Option<String>,
}

impl MemoryClipboard {
    pub fn failing(reason: &str) -> Self {
        Self {
            writes: Vec::new(),
            fail_with: Some(reason.to_string()),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), String> {
        if let Some(reason) = &self.fail_with {
            return Err(reason.clone());
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Sheet that replays scripted verdicts and records every payload shown.
pub(crate) struct CannedSheet {
    available: bool,
    verdicts: VecDeque<ShareVerdict>,
    pub presented: Vec<SharePayload>,
}

impl CannedSheet {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            verdicts: VecDeque::new(),
            presented: Vec::new(),
        }
    }

    pub fn with_verdicts(verdicts: impl IntoIterator<Item = ShareVerdict>) -> Self {
        Self {
            available: true,
            verdicts: verdicts.into_iter().collect(),
            presented: Vec::new(),
        }
    }
}

impl ShareSheet for CannedSheet {
    fn available(&self) -> bool {
        self.available
    }

    fn present(&mut self, payload: &SharePayload) -> ShareVerdict {
        self.presented.push(payload.clone());
        self.verdicts
            .pop_front()
            .unwrap_or(ShareVerdict::Delivered)
    }
}
