use eframe::egui::Color32;

/// Brand purple (#B026FF), same as the TUI accent.
pub const ACCENT: Color32 = Color32::from_rgb(176, 38, 255);

/// Page background (#0D0D0D).
pub const BACKGROUND: Color32 = Color32::from_rgb(13, 13, 13);

/// Snippet text (gray-300).
pub const SNIPPET: Color32 = Color32::from_rgb(209, 213, 219);

/// Accent at 10% opacity, for panels and resting cards.
pub fn panel() -> Color32 {
    Color32::from_rgba_unmultiplied(176, 38, 255, 26)
}

/// Accent at 20% opacity, for the hovered card.
pub fn panel_hover() -> Color32 {
    Color32::from_rgba_unmultiplied(176, 38, 255, 51)
}
