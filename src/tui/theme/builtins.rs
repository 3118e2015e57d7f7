//! The themes that ship with the binary.

pub mod midnight {
    use ratatui::style::{Color, Modifier, Style};

    use crate::tui::theme::types::Theme;

    pub const NAME: &str = "midnight";

    const TEXT: Color = Color::Rgb(205, 214, 244);
    const DIM: Color = Color::Rgb(108, 112, 134);
    const BLUE: Color = Color::Rgb(137, 180, 250);
    const GREEN: Color = Color::Rgb(166, 227, 161);
    const RED: Color = Color::Rgb(243, 139, 168);
    const YELLOW: Color = Color::Rgb(249, 226, 175);
    const SELECTION: Color = Color::Rgb(49, 50, 68);

    #[must_use]
    pub fn theme() -> Theme {
        Theme {
            prompt: Style::new().fg(BLUE),
            input: Style::new().fg(TEXT),
            tabs: Style::new().fg(DIM),
            tab_selected: Style::new().fg(YELLOW).add_modifier(Modifier::BOLD),
            table_header: Style::new().fg(DIM).add_modifier(Modifier::BOLD),
            row: Style::new().fg(TEXT),
            row_selected: Style::new().bg(SELECTION).add_modifier(Modifier::BOLD),
            badge_public: Style::new().fg(GREEN),
            badge_private: Style::new().fg(DIM),
            empty: Style::new().fg(DIM).add_modifier(Modifier::ITALIC),
            notice_info: Style::new().fg(GREEN),
            notice_error: Style::new().fg(RED).add_modifier(Modifier::BOLD),
            card_border: Style::new().fg(BLUE),
            code: Style::new().fg(TEXT).add_modifier(Modifier::BOLD),
        }
    }
}

pub mod solarized {
    use ratatui::style::{Color, Modifier, Style};

    use crate::tui::theme::types::Theme;

    pub const NAME: &str = "solarized";

    const BASE01: Color = Color::Rgb(0x58, 0x6e, 0x75);
    const BASE02: Color = Color::Rgb(0x07, 0x36, 0x42);
    const BASE0: Color = Color::Rgb(0x83, 0x94, 0x96);
    const YELLOW: Color = Color::Rgb(0xb5, 0x89, 0x00);
    const BLUE: Color = Color::Rgb(0x26, 0x8b, 0xd2);
    const CYAN: Color = Color::Rgb(0x2a, 0xa1, 0x98);
    const GREEN: Color = Color::Rgb(0x85, 0x99, 0x00);
    const RED: Color = Color::Rgb(0xdc, 0x32, 0x2f);

    #[must_use]
    pub fn theme() -> Theme {
        Theme {
            prompt: Style::new().fg(CYAN),
            input: Style::new().fg(BASE0),
            tabs: Style::new().fg(BASE01),
            tab_selected: Style::new().fg(YELLOW).add_modifier(Modifier::BOLD),
            table_header: Style::new().fg(BASE01).add_modifier(Modifier::BOLD),
            row: Style::new().fg(BASE0),
            row_selected: Style::new().bg(BASE02).add_modifier(Modifier::BOLD),
            badge_public: Style::new().fg(GREEN),
            badge_private: Style::new().fg(BASE01),
            empty: Style::new().fg(BASE01).add_modifier(Modifier::ITALIC),
            notice_info: Style::new().fg(CYAN),
            notice_error: Style::new().fg(RED).add_modifier(Modifier::BOLD),
            card_border: Style::new().fg(BLUE),
            code: Style::new().fg(BASE0).add_modifier(Modifier::BOLD),
        }
    }
}

pub mod paper {
    use ratatui::style::{Color, Modifier, Style};

    use crate::tui::theme::types::Theme;

    pub const NAME: &str = "paper";

    #[must_use]
    pub fn theme() -> Theme {
        Theme {
            prompt: Style::new().fg(Color::Blue),
            input: Style::new().fg(Color::Black),
            tabs: Style::new().fg(Color::DarkGray),
            tab_selected: Style::new()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            table_header: Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            row: Style::new().fg(Color::Black),
            row_selected: Style::new().bg(Color::LightBlue).fg(Color::Black),
            badge_public: Style::new().fg(Color::Green),
            badge_private: Style::new().fg(Color::DarkGray),
            empty: Style::new().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            notice_info: Style::new().fg(Color::Green),
            notice_error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
            card_border: Style::new().fg(Color::Blue),
            code: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
        }
    }
}
