//! The share-card overlay and the code rendering seam behind it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use crate::catalog::{Profile, ProfileId};
use crate::tui::theme::Theme;

/// Turns a profile link into the visual the card centers on.
///
/// Implementations get exactly the link text and a width budget in
/// terminal columns; they never see the rest of the profile.
pub trait CodeRenderer {
    fn render(&self, link: &str, width: u16) -> Text<'static>;
}

/// Bundled renderer: the link itself, wrapped to the width budget.
///
/// Hosts that can draw scannable codes plug in their own renderer; the
/// card layout stays the same either way.
pub struct TextCode;

impl CodeRenderer for TextCode {
    fn render(&self, link: &str, width: u16) -> Text<'static> {
        let budget = usize::from(width.max(1));
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut current = String::new();
        for ch in link.chars() {
            current.push(ch);
            if current.chars().count() >= budget {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
        }
        if !current.is_empty() {
            lines.push(Line::from(current));
        }
        Text::from(lines)
    }
}

/// The at-most-one open share card.
///
/// The card snapshots what it shows, so a catalog reload cannot change
/// an open card under the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    pub profile: ProfileId,
    pub name: String,
    pub link: String,
}

impl ShareCard {
    /// Snapshot a card for `profile`. Callers guard [`Profile::has_link`]
    /// first; a linkless profile has nothing to show.
    #[must_use]
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            profile: profile.id.clone(),
            name: profile.name.clone(),
            link: profile.url.clone(),
        }
    }
}

/// Centered overlay rectangle, clamped so small terminals still fit.
#[must_use]
pub fn card_area(frame_area: Rect, content_height: u16) -> Rect {
    let width = (frame_area.width / 4 * 3).clamp(20, 72).min(frame_area.width);
    let height = content_height
        .saturating_add(4)
        .min(frame_area.height.saturating_sub(2).max(3));

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(frame_area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Draw `card` over whatever is already on the frame.
pub fn render_card(
    frame: &mut Frame,
    card: &ShareCard,
    renderer: &dyn CodeRenderer,
    theme: &Theme,
) {
    let frame_area = frame.area();
    let probe_width = (frame_area.width / 4 * 3).clamp(20, 72).saturating_sub(4);
    let code = renderer.render(&card.link, probe_width);
    let code_height = code.height() as u16;

    let area = card_area(frame_area, code_height.saturating_add(2));
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .border_style(theme.card_border)
        .title(format!(" {} ", card.name))
        .title_bottom(Line::from(" c copy · esc close ").alignment(Alignment::Center))
        .padding(Padding::uniform(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let code_paragraph = Paragraph::new(code)
        .alignment(Alignment::Center)
        .style(theme.code);
    frame.render_widget(code_paragraph, sections[0]);

    let caption = Paragraph::new(card.link.clone())
        .alignment(Alignment::Center)
        .style(theme.empty);
    frame.render_widget(caption, sections[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_snapshots_the_profile_fields() {
        let profile = Profile::new("3", "Trip Sketcher", "https://x/trip");
        let card = ShareCard::for_profile(&profile);
        assert_eq!(card.profile, profile.id);
        assert_eq!(card.name, "Trip Sketcher");
        assert_eq!(card.link, "https://x/trip");
    }

    #[test]
    fn text_code_sees_only_the_link() {
        let text = TextCode.render("https://x/abc", 40);
        assert_eq!(text.lines.len(), 1);
        assert_eq!(text.lines[0].to_string(), "https://x/abc");
    }

    #[test]
    fn text_code_wraps_to_the_width_budget() {
        let text = TextCode.render("0123456789", 4);
        let rendered: Vec<String> = text.lines.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["0123", "4567", "89"]);
    }

    #[test]
    fn card_area_stays_inside_the_frame() {
        let frame = Rect::new(0, 0, 30, 10);
        let area = card_area(frame, 20);
        assert!(area.width <= frame.width);
        assert!(area.height <= frame.height);
        assert!(area.x + area.width <= frame.width);
        assert!(area.y + area.height <= frame.height);
    }
}
