use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::BrowseState;
use crate::share::ShareAction;
use crate::ui::state::BrowseOutcome;

impl<'a> BrowseState<'a> {
    /// Apply one key press. `Some` ends the event loop with that outcome.
    ///
    /// While the share card is open it captures every key except the
    /// global chords; nothing leaks through to the list behind it.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(self.outcome(false));
        }
        if key.code == KeyCode::F(12) {
            self.toggle_log();
            return None;
        }
        if self.card_open() {
            self.handle_card_key(key);
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(self.outcome(false)),
            KeyCode::Enter => return Some(self.outcome(true)),
            KeyCode::Tab => self.cycle_category(1),
            KeyCode::BackTab => self.cycle_category(-1),
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            KeyCode::PageUp => self.select_first(),
            KeyCode::PageDown => self.select_last(),
            KeyCode::Char(ch) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.handle_chord(ch);
            }
            _ => {
                if self.input.input(key) {
                    self.sync_query_from_input();
                }
            }
        }
        None
    }

    fn handle_chord(&mut self, ch: char) {
        match ch {
            'y' => self.request_share(ShareAction::CopyLink),
            's' => self.request_share(ShareAction::Share),
            'o' => self.open_selected_link(),
            'p' => self.toggle_public_only(),
            'r' => self.toggle_sort(),
            'k' => self.open_card(),
            _ => {}
        }
    }

    fn handle_card_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.close_card(),
            KeyCode::Char('c') => self.copy_card_link(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{Receiver, channel};

    use super::*;
    use crate::catalog::{Catalog, Profile};
    use crate::query::{Controls, SortOrder};
    use crate::share::{ShareCommand, ShareRuntime};
    use crate::tui::theme::default_theme;

    fn state() -> (BrowseState<'static>, Receiver<ShareCommand>) {
        let (command_tx, command_rx) = channel();
        let (_receipt_tx, receipt_rx) = channel();
        let catalog = Catalog::from_profiles(vec![
            Profile::new("1", "Helper Bot", "https://x/helper")
                .with_categories(["coding"])
                .with_public(true),
            Profile::new("2", "Draft Wizard", "https://x/draft").with_categories(["writing"]),
        ])
        .unwrap();
        let browse = BrowseState::new(
            catalog,
            Controls::new(),
            ShareRuntime::new(command_tx, receipt_rx),
            default_theme(),
            "vitrin",
        );
        (browse, command_rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn chord(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn escape_quits_without_accepting() {
        let (mut browse, _commands) = state();
        let outcome = browse.handle_key(press(KeyCode::Esc)).unwrap();
        assert!(!outcome.accepted);
        assert!(outcome.selection.is_none());
    }

    #[test]
    fn enter_accepts_the_selection() {
        let (mut browse, _commands) = state();
        let outcome = browse.handle_key(press(KeyCode::Enter)).unwrap();
        assert!(outcome.accepted);
        assert!(outcome.selection.is_some());
    }

    #[test]
    fn tab_cycles_the_category() {
        let (mut browse, _commands) = state();
        assert_eq!(browse.controls.category, "all");
        browse.handle_key(press(KeyCode::Tab));
        assert_eq!(browse.controls.category, "coding");
        browse.handle_key(press(KeyCode::BackTab));
        assert_eq!(browse.controls.category, "all");
    }

    #[test]
    fn typed_characters_reach_the_query() {
        let (mut browse, _commands) = state();
        browse.handle_key(press(KeyCode::Char('d')));
        browse.handle_key(press(KeyCode::Char('r')));
        assert_eq!(browse.controls.query, "dr");
        assert_eq!(browse.rows().len(), 1);
    }

    #[test]
    fn chords_toggle_the_filters() {
        let (mut browse, _commands) = state();
        browse.handle_key(chord('p'));
        assert!(browse.controls.public_only);
        assert_eq!(browse.rows().len(), 1);

        browse.handle_key(chord('r'));
        assert_eq!(browse.controls.sort, SortOrder::Alphabetical);
    }

    #[test]
    fn copy_chord_queues_a_ticket() {
        let (mut browse, commands) = state();
        browse.handle_key(chord('y'));
        assert!(matches!(
            commands.try_recv(),
            Ok(ShareCommand::Dispatch(_))
        ));
    }

    #[test]
    fn an_open_card_swallows_list_keys() {
        let (mut browse, _commands) = state();
        browse.handle_key(chord('k'));
        assert!(browse.card_open());

        // Keys that would edit the query or move the list do nothing now.
        browse.handle_key(press(KeyCode::Char('x')));
        browse.handle_key(press(KeyCode::Tab));
        browse.handle_key(press(KeyCode::Down));
        assert_eq!(browse.controls.query, "");
        assert_eq!(browse.controls.category, "all");
        assert_eq!(browse.table_state.selected(), Some(0));

        // Enter must not accept while the card is up.
        assert!(browse.handle_key(press(KeyCode::Enter)).is_none());
    }

    #[test]
    fn card_keys_copy_and_close() {
        let (mut browse, commands) = state();
        browse.handle_key(chord('k'));
        browse.handle_key(press(KeyCode::Char('c')));
        assert!(matches!(
            commands.try_recv(),
            Ok(ShareCommand::Dispatch(_))
        ));

        browse.handle_key(press(KeyCode::Esc));
        assert!(!browse.card_open());
    }

    #[test]
    fn ctrl_c_quits_even_with_the_card_open() {
        let (mut browse, _commands) = state();
        browse.handle_key(chord('k'));
        let outcome = browse.handle_key(chord('c')).unwrap();
        assert!(!outcome.accepted);
    }
}
