//! Background execution of share attempts.
//!
//! The UI thread never blocks on a clipboard helper or a share command:
//! it queues tickets onto a worker thread and folds the receipts back in
//! on its next pump.

use std::collections::HashMap;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use crate::catalog::{Profile, ProfileId};
use crate::share::clipboard::Clipboard;
use crate::share::resolve::{ShareAction, ShareResolution, resolve_share};
use crate::share::sheet::{SharePayload, ShareSheet};

/// One queued share attempt.
#[derive(Debug, Clone)]
pub struct ShareTicket {
    pub id: u64,
    pub profile: ProfileId,
    pub action: ShareAction,
    pub payload: SharePayload,
}

/// Instruction for the share worker.
#[derive(Debug)]
pub enum ShareCommand {
    Dispatch(ShareTicket),
    Shutdown,
}

/// Completion report for one ticket.
#[derive(Debug, Clone)]
pub struct ShareReceipt {
    pub id: u64,
    pub profile: ProfileId,
    pub action: ShareAction,
    pub resolution: ShareResolution,
}

/// Start the worker thread that owns the host capabilities.
///
/// Tickets resolve one at a time in arrival order. The thread exits on
/// [`ShareCommand::Shutdown`] or once both channel ends are gone.
pub fn spawn(
    mut clipboard: Box<dyn Clipboard + Send>,
    mut sheet: Box<dyn ShareSheet + Send>,
) -> (Sender<ShareCommand>, Receiver<ShareReceipt>) {
    let (command_tx, command_rx) = channel::<ShareCommand>();
    let (receipt_tx, receipt_rx) = channel::<ShareReceipt>();

    thread::spawn(move || {
        while let Ok(command) = command_rx.recv() {
            match command {
                ShareCommand::Dispatch(ticket) => {
                    let resolution = resolve_share(
                        ticket.action,
                        &ticket.payload,
                        clipboard.as_mut(),
                        sheet.as_mut(),
                    );
                    let receipt = ShareReceipt {
                        id: ticket.id,
                        profile: ticket.profile,
                        action: ticket.action,
                        resolution,
                    };
                    if receipt_tx.send(receipt).is_err() {
                        break;
                    }
                }
                ShareCommand::Shutdown => break,
            }
        }
    });

    (command_tx, receipt_rx)
}

/// UI-side bookkeeping for in-flight share attempts.
///
/// One slot per profile and action: a repeat while the slot is pending
/// is ignored, and a receipt whose ticket id does not match its slot is
/// dropped instead of clearing it.
pub struct ShareRuntime {
    commands: Sender<ShareCommand>,
    receipts: Receiver<ShareReceipt>,
    next_ticket: u64,
    pending: HashMap<(ProfileId, ShareAction), u64>,
}

impl ShareRuntime {
    #[must_use]
    pub fn new(commands: Sender<ShareCommand>, receipts: Receiver<ShareReceipt>) -> Self {
        Self {
            commands,
            receipts,
            next_ticket: 0,
            pending: HashMap::new(),
        }
    }

    /// Spin up the bundled worker and wrap its channels.
    #[must_use]
    pub fn start(clipboard: Box<dyn Clipboard + Send>, sheet: Box<dyn ShareSheet + Send>) -> Self {
        let (commands, receipts) = spawn(clipboard, sheet);
        Self::new(commands, receipts)
    }

    #[must_use]
    pub fn is_pending(&self, profile: &ProfileId, action: ShareAction) -> bool {
        self.pending
            .keys()
            .any(|(pending_profile, pending_action)| {
                pending_profile == profile && *pending_action == action
            })
    }

    #[must_use]
    pub fn any_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Queue an attempt unless the same profile and action is already in
    /// flight. Returns whether a ticket was issued.
    pub fn request(&mut self, profile: &Profile, action: ShareAction) -> bool {
        if self.is_pending(&profile.id, action) {
            log::trace!(
                "{} already pending for profile {}",
                action.label(),
                profile.id
            );
            return false;
        }

        self.next_ticket += 1;
        let ticket = ShareTicket {
            id: self.next_ticket,
            profile: profile.id.clone(),
            action,
            payload: SharePayload::for_profile(profile),
        };
        if self.commands.send(ShareCommand::Dispatch(ticket)).is_err() {
            log::warn!("share worker is gone; dropping {} request", action.label());
            return false;
        }
        log::debug!(
            "dispatched {} ticket #{} for profile {}",
            action.label(),
            self.next_ticket,
            profile.id
        );
        self.pending
            .insert((profile.id.clone(), action), self.next_ticket);
        true
    }

    /// Collect finished attempts, clearing each one's pending slot.
    pub fn drain(&mut self) -> Vec<ShareReceipt> {
        let mut fresh = Vec::new();
        loop {
            match self.receipts.try_recv() {
                Ok(receipt) => {
                    let key = (receipt.profile.clone(), receipt.action);
                    if self.pending.get(&key) == Some(&receipt.id) {
                        self.pending.remove(&key);
                        fresh.push(receipt);
                    } else {
                        log::debug!(
                            "dropping stale share receipt #{} for profile {}",
                            receipt.id,
                            receipt.profile
                        );
                    }
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        fresh
    }
}

impl Drop for ShareRuntime {
    fn drop(&mut self) {
        let _ = self.commands.send(ShareCommand::Shutdown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::testing::{CannedSheet, MemoryClipboard};
    use std::time::{Duration, Instant};

    fn profile() -> Profile {
        Profile::new("7", "Helper", "https://x/helper").with_description("Answers questions")
    }

    fn wait_for_receipts(runtime: &mut ShareRuntime, count: usize) -> Vec<ShareReceipt> {
        let deadline = Instant::now() + Duration::from_secs(2);
        let mut collected = Vec::new();
        while collected.len() < count && Instant::now() < deadline {
            collected.extend(runtime.drain());
            thread::sleep(Duration::from_millis(5));
        }
        collected
    }

    #[test]
    fn worker_resolves_a_copy_ticket() {
        let mut runtime = ShareRuntime::start(
            Box::new(MemoryClipboard::default()),
            Box::new(CannedSheet::unavailable()),
        );
        assert!(runtime.request(&profile(), ShareAction::CopyLink));
        assert!(runtime.is_pending(&profile().id, ShareAction::CopyLink));

        let receipts = wait_for_receipts(&mut runtime, 1);
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].resolution, ShareResolution::Copied);
        assert!(!runtime.any_pending());
    }

    #[test]
    fn repeats_are_ignored_while_pending() {
        let (command_tx, command_rx) = channel();
        let (_receipt_tx, receipt_rx) = channel();
        let mut runtime = ShareRuntime::new(command_tx, receipt_rx);

        assert!(runtime.request(&profile(), ShareAction::Share));
        assert!(!runtime.request(&profile(), ShareAction::Share));

        assert!(matches!(
            command_rx.try_recv(),
            Ok(ShareCommand::Dispatch(_))
        ));
        assert!(command_rx.try_recv().is_err(), "the repeat must not queue");
    }

    #[test]
    fn copy_and_share_slots_are_independent() {
        let (command_tx, command_rx) = channel();
        let (_receipt_tx, receipt_rx) = channel();
        let mut runtime = ShareRuntime::new(command_tx, receipt_rx);

        assert!(runtime.request(&profile(), ShareAction::CopyLink));
        assert!(runtime.request(&profile(), ShareAction::Share));

        assert!(runtime.is_pending(&profile().id, ShareAction::CopyLink));
        assert!(runtime.is_pending(&profile().id, ShareAction::Share));
        assert_eq!(command_rx.try_iter().count(), 2);
    }

    #[test]
    fn stale_receipts_do_not_clear_the_slot() {
        let (command_tx, _command_rx) = channel();
        let (receipt_tx, receipt_rx) = channel();
        let mut runtime = ShareRuntime::new(command_tx, receipt_rx);

        assert!(runtime.request(&profile(), ShareAction::CopyLink));
        receipt_tx
            .send(ShareReceipt {
                id: 99,
                profile: profile().id,
                action: ShareAction::CopyLink,
                resolution: ShareResolution::Copied,
            })
            .unwrap();

        assert!(runtime.drain().is_empty());
        assert!(runtime.is_pending(&profile().id, ShareAction::CopyLink));

        receipt_tx
            .send(ShareReceipt {
                id: 1,
                profile: profile().id,
                action: ShareAction::CopyLink,
                resolution: ShareResolution::Copied,
            })
            .unwrap();

        assert_eq!(runtime.drain().len(), 1);
        assert!(!runtime.any_pending());
    }

    #[test]
    fn receipts_for_unknown_slots_are_dropped() {
        let (command_tx, _command_rx) = channel();
        let (receipt_tx, receipt_rx) = channel();
        let mut runtime = ShareRuntime::new(command_tx, receipt_rx);

        receipt_tx
            .send(ShareReceipt {
                id: 1,
                profile: ProfileId::from("ghost"),
                action: ShareAction::Share,
                resolution: ShareResolution::Presented,
            })
            .unwrap();

        assert!(runtime.drain().is_empty());
    }

    #[test]
    fn dropping_the_runtime_shuts_the_worker_down() {
        let (command_tx, command_rx) = channel();
        let (_receipt_tx, receipt_rx) = channel();
        let runtime = ShareRuntime::new(command_tx, receipt_rx);
        drop(runtime);

        assert!(matches!(command_rx.try_recv(), Ok(ShareCommand::Shutdown)));
    }
}
