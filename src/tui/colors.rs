use ratatui::style::{Color, Modifier, Style};

/// Brand purple (#B026FF)
pub const ACCENT: Color = Color::Rgb(176, 38, 255);
/// Near-black page background (#0D0D0D)
pub const BACKGROUND: Color = Color::Rgb(13, 13, 13);
/// Accent at roughly 10% over the background
pub const PANEL: Color = Color::Rgb(29, 16, 38);
/// Accent at roughly 20%, used for the selected card
pub const PANEL_SELECTED: Color = Color::Rgb(46, 18, 64);
/// Snippet text (gray-300)
pub const SNIPPET: Color = Color::Rgb(209, 213, 219);
pub const MUTED: Color = Color::Rgb(120, 120, 130);
pub const STATUS_BG: Color = Color::Rgb(40, 20, 60);

pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn link_style() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::UNDERLINED)
}

pub fn placeholder_style() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn card_background(selected: bool) -> Color {
    if selected {
        PANEL_SELECTED
    } else {
        PANEL
    }
}
