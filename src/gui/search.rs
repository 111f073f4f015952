//! Search bar widget

use crate::gui::colors;
use eframe::egui::{self, FontId, RichText, TextEdit};

pub const PLACEHOLDER: &str = "Search anything...";

/// Search bar state. The query text is owned by the session.
pub struct SearchBar {
    /// Grab keyboard focus on the next frame (first frame, and after a search)
    pub wants_focus: bool,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self { wants_focus: true }
    }
}

impl SearchBar {
    /// Draw the input and the search button. Returns true when the user asked
    /// for a search, either with Enter or the button.
    pub fn show(&mut self, ui: &mut egui::Ui, query: &mut String) -> bool {
        let inner = egui::Frame::default()
            .fill(colors::ACCENT)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(16, 10))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let button_width = 36.0;
                    let response = ui.add(
                        TextEdit::singleline(query)
                            .hint_text(RichText::new(PLACEHOLDER).color(egui::Color32::from_white_alpha(180)))
                            .font(FontId::proportional(20.0))
                            .text_color(egui::Color32::WHITE)
                            .frame(false)
                            .desired_width(ui.available_width() - button_width),
                    );

                    if self.wants_focus {
                        response.request_focus();
                        self.wants_focus = false;
                    }

                    let enter =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    let clicked = ui
                        .add(
                            egui::Button::new(RichText::new("\u{1F50D}").size(20.0).color(egui::Color32::WHITE))
                                .frame(false),
                        )
                        .on_hover_text("Search")
                        .clicked();

                    enter || clicked
                })
                .inner
            });

        let triggered = inner.inner;
        if triggered {
            // Enter drops focus from the field; put it back for the next query
            self.wants_focus = true;
        }
        triggered
    }
}
