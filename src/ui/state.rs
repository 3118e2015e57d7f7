//! Core state container for the browse screen.
//!
//! [`BrowseState`] bundles the catalog snapshot, the user's controls, the
//! derived row set, and the transient UI affordances (selection, notices,
//! the share card, the log pane). Everything the screen shows is either
//! stored or derivable from here.

use std::time::{Duration, Instant};

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;
use tui_textarea::{CursorMove, TextArea};

use crate::catalog::{Catalog, Profile, category_labels};
use crate::query::{Controls, visible_rows};
use crate::share::{ShareAction, ShareResolution, ShareRuntime, open_in_browser};
use crate::tui::theme::Theme;
use crate::ui::card::{CodeRenderer, ShareCard, TextCode};

const INFO_NOTICE_TTL: Duration = Duration::from_millis(2500);
const ERROR_NOTICE_TTL: Duration = Duration::from_secs(4);

/// Captures the outcome of a browse session.
#[derive(Debug, Clone)]
pub struct BrowseOutcome {
    pub accepted: bool,
    pub selection: Option<Profile>,
    pub query: String,
}

/// Severity of a status-line notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient status-line message with its own expiry.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    expires_at: Instant,
}

impl Notice {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Info,
            expires_at: Instant::now() + INFO_NOTICE_TTL,
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Error,
            expires_at: Instant::now() + ERROR_NOTICE_TTL,
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Aggregate state shared across the browse screen.
pub struct BrowseState<'a> {
    pub(crate) catalog: Catalog,
    pub(crate) labels: Vec<String>,
    pub controls: Controls,
    pub(crate) rows: Vec<usize>,
    pub table_state: TableState,
    pub input: TextArea<'a>,
    pub theme: Theme,
    pub(crate) title: String,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) share: ShareRuntime,
    pub(crate) renderer: Box<dyn CodeRenderer>,
    pub(crate) notice: Option<Notice>,
    pub(crate) card: Option<ShareCard>,
    pub(crate) show_log: bool,
}

impl<'a> BrowseState<'a> {
    /// Assemble the screen state for one catalog snapshot.
    ///
    /// A configured category that no longer exists is clamped to the
    /// sentinel before the first derivation.
    #[must_use]
    pub fn new(
        catalog: Catalog,
        mut controls: Controls,
        share: ShareRuntime,
        theme: Theme,
        title: impl Into<String>,
    ) -> Self {
        let labels = category_labels(&catalog);
        controls.clamp_category(&labels);

        let mut input = TextArea::new(vec![controls.query.clone()]);
        input.set_cursor_line_style(ratatui::style::Style::default());
        input.set_placeholder_text("type to search");
        input.move_cursor(CursorMove::End);

        let mut table_state = TableState::default();
        table_state.select(Some(0));

        let mut state = Self {
            catalog,
            labels,
            controls,
            rows: Vec::new(),
            table_state,
            input,
            theme,
            title: title.into(),
            throbber_state: ThrobberState::default(),
            share,
            renderer: Box::new(TextCode),
            notice: None,
            card: None,
            show_log: false,
        };
        state.refresh();
        state
    }

    /// Swap in a host-provided code renderer for the share card.
    pub fn set_code_renderer(&mut self, renderer: Box<dyn CodeRenderer>) {
        self.renderer = renderer;
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Catalog indices currently visible, in display order.
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    #[must_use]
    pub fn selected_profile(&self) -> Option<&Profile> {
        let selected = self.table_state.selected()?;
        let index = *self.rows.get(selected)?;
        self.catalog.get(index)
    }

    pub(crate) fn renderer(&self) -> &dyn CodeRenderer {
        self.renderer.as_ref()
    }

    /// Re-derive the visible rows after any control change.
    pub(crate) fn refresh(&mut self) {
        self.rows = visible_rows(&self.catalog, &self.controls);
        self.ensure_selection();
    }

    /// Keep the row selection valid for the current derivation.
    fn ensure_selection(&mut self) {
        if self.rows.is_empty() {
            self.table_state.select(None);
        } else if let Some(selected) = self.table_state.selected() {
            if selected >= self.rows.len() {
                self.table_state.select(Some(self.rows.len() - 1));
            }
        } else {
            self.table_state.select(Some(0));
        }
    }

    /// Mirror the textarea into the controls and re-derive on change.
    pub(crate) fn sync_query_from_input(&mut self) {
        let text = self.input.lines().first().cloned().unwrap_or_default();
        if text != self.controls.query {
            self.controls.query = text;
            self.refresh();
        }
    }

    pub(crate) fn move_selection_up(&mut self) {
        if let Some(selected) = self.table_state.selected()
            && selected > 0
        {
            self.table_state.select(Some(selected - 1));
        }
    }

    pub(crate) fn move_selection_down(&mut self) {
        if let Some(selected) = self.table_state.selected()
            && selected + 1 < self.rows.len()
        {
            self.table_state.select(Some(selected + 1));
        }
    }

    pub(crate) fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub(crate) fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(self.rows.len() - 1));
        }
    }

    pub(crate) fn cycle_category(&mut self, step: isize) {
        self.controls.cycle_category(&self.labels, step);
        self.table_state.select(Some(0));
        self.refresh();
    }

    pub(crate) fn toggle_public_only(&mut self) {
        self.controls.public_only = !self.controls.public_only;
        self.refresh();
    }

    pub(crate) fn toggle_sort(&mut self) {
        self.controls.sort = self.controls.sort.toggled();
        self.refresh();
    }

    pub(crate) fn toggle_log(&mut self) {
        self.show_log = !self.show_log;
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Drop an expired notice. Called once per loop iteration.
    pub(crate) fn tick(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
        }
    }

    #[must_use]
    pub fn card(&self) -> Option<&ShareCard> {
        self.card.as_ref()
    }

    #[must_use]
    pub fn card_open(&self) -> bool {
        self.card.is_some()
    }

    /// Open (or replace) the share card for the selected profile.
    pub(crate) fn open_card(&mut self) {
        let Some(profile) = self.selected_profile().cloned() else {
            return;
        };
        if profile.has_link() {
            self.card = Some(ShareCard::for_profile(&profile));
        } else {
            self.set_notice(Notice::error(format!("'{}' has no link to show", profile.name)));
        }
    }

    pub(crate) fn close_card(&mut self) {
        self.card = None;
    }

    /// Queue a copy or share for the selected profile.
    pub(crate) fn request_share(&mut self, action: ShareAction) {
        let Some(profile) = self.selected_profile().cloned() else {
            return;
        };
        if !profile.has_link() {
            self.set_notice(Notice::error(format!(
                "'{}' has no link to {}",
                profile.name,
                action.label()
            )));
            return;
        }
        self.share.request(&profile, action);
    }

    /// Copy the link the open card is showing, even if the catalog entry
    /// changed underneath it.
    pub(crate) fn copy_card_link(&mut self) {
        let Some(card) = self.card.clone() else {
            return;
        };
        let snapshot = Profile::new(card.profile, card.name, card.link);
        self.share.request(&snapshot, ShareAction::CopyLink);
    }

    pub(crate) fn open_selected_link(&mut self) {
        let Some(profile) = self.selected_profile().cloned() else {
            return;
        };
        if !profile.has_link() {
            self.set_notice(Notice::error(format!("'{}' has no link to open", profile.name)));
            return;
        }
        match open_in_browser(&profile.url) {
            Ok(()) => self.set_notice(Notice::info(format!("Opening '{}'", profile.name))),
            Err(reason) => self.set_notice(Notice::error(reason)),
        }
    }

    #[must_use]
    pub(crate) fn any_share_pending(&self) -> bool {
        self.share.any_pending()
    }

    /// Fold finished share attempts into notices.
    pub(crate) fn absorb_receipts(&mut self) {
        let receipts = self.share.drain();
        for receipt in receipts {
            let name = self
                .catalog
                .profiles()
                .iter()
                .find(|profile| profile.id == receipt.profile)
                .map(|profile| profile.name.clone())
                .unwrap_or_else(|| receipt.profile.to_string());
            match receipt.resolution {
                ShareResolution::Copied => {
                    self.set_notice(Notice::info(format!("Copied link for '{name}'")));
                }
                // Only copy outcomes produce a notice; the sheet has its
                // own surface.
                ShareResolution::Presented => {
                    log::debug!("shared '{name}' through the sheet");
                }
                ShareResolution::Dismissed => {
                    log::trace!("share of '{name}' dismissed");
                }
                ShareResolution::CopyFailed { reason } => {
                    self.set_notice(Notice::error(format!("Copy failed: {reason}")));
                }
            }
        }
    }

    /// Final answer for the caller once the loop ends.
    #[must_use]
    pub(crate) fn outcome(&self, accepted: bool) -> BrowseOutcome {
        BrowseOutcome {
            accepted,
            query: self.controls.query.clone(),
            selection: if accepted {
                self.selected_profile().cloned()
            } else {
                None
            },
        }
    }
}
