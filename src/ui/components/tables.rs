use chrono::{DateTime, NaiveDate};
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Cell, HighlightSpacing, Row, Table, TableState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::catalog::Catalog;
use crate::tui::theme::Theme;

const UPDATED_WIDTH: u16 = 10;
const BADGE_WIDTH: u16 = 3;

/// Render the visible profiles as a table with a moving selection.
pub fn render_profile_table(
    frame: &mut ratatui::Frame,
    area: Rect,
    table_state: &mut TableState,
    catalog: &Catalog,
    rows: &[usize],
    theme: &Theme,
) {
    let category_width = (area.width / 4).clamp(12, 28);
    let name_width = area
        .width
        .saturating_sub(category_width + UPDATED_WIDTH + BADGE_WIDTH + 6);

    let header = Row::new(["Name", "Categories", "Updated", ""]).style(theme.table_header);
    let table = Table::new(
        build_profile_rows(catalog, rows, theme, name_width, category_width),
        [
            Constraint::Min(name_width.min(20)),
            Constraint::Length(category_width),
            Constraint::Length(UPDATED_WIDTH),
            Constraint::Length(BADGE_WIDTH),
        ],
    )
    .header(header)
    .row_highlight_style(theme.row_selected)
    .highlight_spacing(HighlightSpacing::WhenSelected)
    .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, table_state);
}

#[must_use]
pub(crate) fn build_profile_rows<'a>(
    catalog: &'a Catalog,
    rows: &'a [usize],
    theme: &Theme,
    name_width: u16,
    category_width: u16,
) -> Vec<Row<'a>> {
    rows.iter()
        .filter_map(|&index| {
            let profile = catalog.get(index)?;
            let badge = if profile.public {
                Span::styled("pub", theme.badge_public)
            } else {
                Span::styled("prv", theme.badge_private)
            };
            Some(
                Row::new([
                    Cell::from(truncate_cell(&profile.name, name_width)),
                    Cell::from(truncate_cell(
                        &profile.categories.join(", "),
                        category_width,
                    )),
                    Cell::from(date_label(profile.updated_at.as_deref())),
                    Cell::from(badge),
                ])
                .style(theme.row),
            )
        })
        .collect()
}

/// Calendar date of the update stamp, or a dash when absent or
/// unparsable.
fn date_label(updated_at: Option<&str>) -> String {
    let Some(value) = updated_at else {
        return "—".to_string();
    };
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return stamp.format("%Y-%m-%d").to_string();
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| "—".to_string())
}

/// Width-aware truncation with a trailing ellipsis.
fn truncate_cell(text: &str, max_width: u16) -> String {
    let max = usize::from(max_width);
    if max == 0 {
        return String::new();
    }
    if text.width() <= max {
        return text.to_string();
    }

    let budget = max.saturating_sub(1);
    let mut truncated = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }
    truncated.push('…');
    truncated
}
