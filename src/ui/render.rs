use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin};
use ratatui::widgets::{Block, Clear, Paragraph};
use tui_logger::TuiLoggerWidget;

use super::card::render_card;
use super::components::{ControlBarContext, render_control_bar, render_profile_table};
use super::state::{BrowseState, NoticeLevel};

const KEY_HINTS: &str =
    "enter select · esc quit · ^y copy · ^s share · ^k card · ^o open · ^p public · ^r sort";

impl<'a> BrowseState<'a> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.input.set_style(self.theme.input);
        self.input.set_placeholder_style(self.theme.empty);
        render_control_bar(
            frame,
            layout[0],
            ControlBarContext {
                input: &self.input,
                title: &self.title,
                labels: &self.labels,
                selected_category: &self.controls.category,
                sort: self.controls.sort,
                public_only: self.controls.public_only,
                busy: self.share.any_pending(),
                throbber_state: &self.throbber_state,
                theme: &self.theme,
            },
        );

        let results_area = layout[1];
        render_profile_table(
            frame,
            results_area,
            &mut self.table_state,
            &self.catalog,
            &self.rows,
            &self.theme,
        );

        if self.rows.is_empty() {
            let mut message_area = results_area;
            const HEADER_HEIGHT: u16 = 1;
            if message_area.height > HEADER_HEIGHT {
                message_area.y += HEADER_HEIGHT;
                message_area.height -= HEADER_HEIGHT;

                let empty = Paragraph::new("No matching profiles")
                    .alignment(Alignment::Center)
                    .style(self.theme.empty);
                frame.render_widget(Clear, message_area);
                frame.render_widget(empty, message_area);
            }
        }

        self.render_footer(frame, layout[2]);

        if self.show_log {
            self.render_log_pane(frame);
        }

        if let Some(card) = &self.card {
            render_card(frame, card, self.renderer.as_ref(), &self.theme);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let footer = match &self.notice {
            Some(notice) => {
                let style = match notice.level {
                    NoticeLevel::Info => self.theme.notice_info,
                    NoticeLevel::Error => self.theme.notice_error,
                };
                Paragraph::new(notice.text.clone()).style(style)
            }
            None => Paragraph::new(KEY_HINTS).style(self.theme.tabs),
        };
        frame.render_widget(footer, area);
    }

    /// Bottom-anchored log pane toggled with F12.
    fn render_log_pane(&self, frame: &mut Frame) {
        let frame_area = frame.area();
        let height = (frame_area.height / 5 * 2).max(6).min(frame_area.height);
        let log_area = ratatui::layout::Rect {
            y: frame_area.bottom().saturating_sub(height),
            height,
            ..frame_area
        };

        frame.render_widget(Clear, log_area);
        let logger = TuiLoggerWidget::default()
            .block(Block::bordered().title(" log "))
            .style(self.theme.row)
            .style_error(self.theme.notice_error)
            .style_warn(self.theme.tab_selected)
            .style_info(self.theme.notice_info)
            .style_debug(self.theme.tabs)
            .style_trace(self.theme.tabs);
        frame.render_widget(logger, log_area);
    }
}
