use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tui_textarea::TextArea;

use crate::query::SortOrder;
use crate::tui::theme::Theme;

/// Argument bundle for rendering the control bar.
pub struct ControlBarContext<'a> {
    pub input: &'a TextArea<'a>,
    pub title: &'a str,
    pub labels: &'a [String],
    pub selected_category: &'a str,
    pub sort: SortOrder,
    pub public_only: bool,
    pub busy: bool,
    pub throbber_state: &'a ThrobberState,
    pub theme: &'a Theme,
}

/// Render the top row: prompt, query input, share status, category tabs.
pub fn render_control_bar(frame: &mut ratatui::Frame, area: Rect, context: ControlBarContext<'_>) {
    let status = status_line(
        context.sort,
        context.public_only,
        context.busy,
        context.throbber_state,
        context.theme,
    );
    let status_width = status.width() as u16;

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(layout_constraints(
            prompt_width(context.title),
            status_width,
            tabs_width(context.labels),
        ))
        .split(area);

    let prompt = Paragraph::new(format!("{} > ", context.title)).style(context.theme.prompt);
    frame.render_widget(prompt, horizontal[0]);

    frame.render_widget(context.input, horizontal[1]);

    frame.render_widget(Paragraph::new(status), horizontal[2]);

    let selected = selected_tab_index(context.labels, context.selected_category);
    let tabs = Tabs::new(build_tab_titles(context.labels, selected, context.theme))
        .select(selected)
        .divider("")
        .padding("", " ")
        .style(context.theme.tabs)
        .highlight_style(context.theme.tab_selected);
    frame.render_widget(tabs, horizontal[3]);
}

fn prompt_width(title: &str) -> u16 {
    title.chars().count() as u16 + 3
}

fn layout_constraints(prompt_width: u16, status_width: u16, tabs_width: u16) -> Vec<Constraint> {
    vec![
        Constraint::Length(prompt_width),
        Constraint::Min(10),
        Constraint::Length(status_width),
        Constraint::Length(tabs_width),
    ]
}

/// Sort label, visibility marker, and a spinner while shares resolve.
fn status_line(
    sort: SortOrder,
    public_only: bool,
    busy: bool,
    throbber_state: &ThrobberState,
    theme: &Theme,
) -> Line<'static> {
    let mut line = Line::default();
    if busy {
        let spinner = Throbber::default()
            .style(theme.tabs)
            .throbber_style(theme.tab_selected);
        line.spans.push(spinner.to_symbol_span(throbber_state));
        line.spans.push(Span::raw(" "));
    }
    line.spans
        .push(Span::styled(sort.label().to_string(), theme.tabs));
    if public_only {
        line.spans.push(Span::styled(" · public", theme.tabs));
    }
    line.spans.push(Span::raw("  "));
    line
}

fn selected_tab_index(labels: &[String], selected_category: &str) -> usize {
    labels
        .iter()
        .position(|label| label == selected_category)
        .unwrap_or(0)
}

fn build_tab_titles(labels: &[String], selected: usize, theme: &Theme) -> Vec<Line<'static>> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let style = if index == selected {
                theme.tab_selected
            } else {
                theme.tabs
            };
            Line::from(format!(" {label} ")).style(style)
        })
        .collect()
}

fn tabs_width(labels: &[String]) -> u16 {
    let mut width = 0u16;
    for label in labels {
        let label_len = label.chars().count() as u16;
        width = width.saturating_add(label_len.saturating_add(3));
    }
    width.max(12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::default_theme;

    fn labels() -> Vec<String> {
        vec!["all".into(), "coding".into(), "writing".into()]
    }

    #[test]
    fn prompt_width_accounts_for_separator() {
        assert_eq!(prompt_width("vitrin"), 9); // len + " > "
    }

    #[test]
    fn selected_tab_index_matches_the_category() {
        assert_eq!(selected_tab_index(&labels(), "coding"), 1);
    }

    #[test]
    fn a_stale_category_falls_back_to_the_sentinel_tab() {
        assert_eq!(selected_tab_index(&labels(), "gone"), 0);
    }

    #[test]
    fn tab_titles_style_the_selection() {
        let theme = default_theme();
        let titles = build_tab_titles(&labels(), 1, &theme);

        assert_eq!(titles.len(), 3);
        assert_eq!(titles[1].style, theme.tab_selected);
        assert_eq!(titles[0].style, theme.tabs);
        assert_eq!(titles[1].spans[0].content.as_ref().trim(), "coding");
    }

    #[test]
    fn tabs_width_covers_every_label() {
        // 3 labels, each padded by three columns.
        assert_eq!(tabs_width(&labels()), 6 + 9 + 10);
        assert_eq!(tabs_width(&[]), 12);
    }

    #[test]
    fn status_line_reflects_the_controls() {
        let theme = default_theme();
        let state = ThrobberState::default();

        let quiet = status_line(SortOrder::Recent, false, false, &state, &theme);
        let text: String = quiet.spans.iter().map(|span| span.content.as_ref()).collect();
        assert!(text.contains("recent"));
        assert!(!text.contains("public"));

        let filtered = status_line(SortOrder::Alphabetical, true, false, &state, &theme);
        let text: String = filtered
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(text.contains("name"));
        assert!(text.contains("public"));
    }

    #[test]
    fn busy_status_gains_a_spinner_span() {
        let theme = default_theme();
        let state = ThrobberState::default();

        let idle = status_line(SortOrder::Recent, false, false, &state, &theme);
        let busy = status_line(SortOrder::Recent, false, true, &state, &theme);
        assert_eq!(busy.spans.len(), idle.spans.len() + 2);
    }
}
