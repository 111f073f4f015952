//! Main TimeMachine window

use crate::catalog::SearchResult;
use crate::gui::colors;
use crate::gui::search::SearchBar;
use crate::session::{SearchSession, TriggerOutcome};
use crate::{logging, AppConfig};
use eframe::egui::{self, RichText};
use std::time::Duration;

const LOADING_TEXT: &str = "Searching... Please wait";
const CONTENT_MAX_WIDTH: f32 = 896.0;
const CARD_SPACING: f32 = 24.0;
/// Below this content width the cards stack in one column
const TWO_COLUMN_MIN_WIDTH: f32 = 640.0;

/// Main application state
pub struct TimeMachineApp {
    pub session: SearchSession,
    search: SearchBar,
    config: AppConfig,
    /// Card under the pointer last frame
    hovered_card: Option<usize>,
    /// Status bar message
    pub status_message: String,
}

impl TimeMachineApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            session: config.session(),
            search: SearchBar::default(),
            config,
            hovered_card: None,
            status_message: "Ready".to_string(),
        }
    }

    pub fn trigger_search(&mut self) {
        if self.session.trigger() == TriggerOutcome::Scheduled {
            self.status_message = format!("Searching for '{}'", self.session.state.query);
        }
    }

    /// Process finished searches
    pub fn process_messages(&mut self) {
        if self.session.process_messages() > 0 {
            self.hovered_card = None;
            self.status_message = format!("{} results", self.session.state.results.len());
        }
    }

    fn open(&mut self, link: &str) {
        if !self.config.open_links_in_browser {
            self.status_message = format!("Link: {}", link);
            return;
        }
        match crate::open_link(link) {
            Ok(()) => self.status_message = format!("Opened {}", link),
            Err(e) => {
                logging::warn("GUI", &e.to_string());
                self.status_message = e.to_string();
            }
        }
    }

    /// Render header
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.label(RichText::new("TimeMachine").size(56.0).strong().color(colors::ACCENT));
        ui.label(RichText::new("Search").size(36.0).strong().color(colors::ACCENT));
        ui.add_space(40.0);
    }

    /// Render status bar
    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.session.state.loading {
                    ui.spinner();
                }
                ui.label(&self.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("TimeMachine v{}", crate::VERSION));
                });
            });
        });
    }

    fn render_loading(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new(LOADING_TEXT).color(colors::ACCENT));
        });
    }

    fn render_overview(&self, ui: &mut egui::Ui) {
        let overview = &self.session.state.overview;
        if overview.is_empty() {
            return;
        }
        egui::Frame::default()
            .fill(colors::panel())
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Overview").strong().color(colors::ACCENT));
                ui.add_space(8.0);
                ui.label(RichText::new(overview).color(egui::Color32::WHITE));
            });
        ui.add_space(CARD_SPACING);
    }

    /// Render the card grid. Returns the link the user clicked, if any.
    fn render_cards(&mut self, ui: &mut egui::Ui) -> Option<&'static str> {
        let results = self.session.state.results.clone();
        let columns = if ui.available_width() >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
        let card_width =
            (ui.available_width() - CARD_SPACING * (columns as f32 - 1.0)) / columns as f32;

        let mut clicked = None;
        let mut hovered = None;

        egui::Grid::new("result_cards")
            .num_columns(columns)
            .spacing([CARD_SPACING, CARD_SPACING])
            .show(ui, |ui| {
                for (index, result) in results.iter().enumerate() {
                    let is_hovered = self.hovered_card == Some(index);
                    let (link_clicked, response) = render_card(ui, result, card_width, is_hovered);
                    if link_clicked {
                        clicked = Some(result.link);
                    }
                    if response.hovered() {
                        hovered = Some(index);
                    }
                    if (index + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });

        self.hovered_card = hovered;
        clicked
    }

    /// Draw the whole window for one frame
    pub fn show(&mut self, ctx: &egui::Context) {
        self.process_messages();
        self.render_status_bar(ctx);

        let mut clicked_link = None;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(colors::BACKGROUND)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_MAX_WIDTH);
                        self.render_header(ui);

                        if self.search.show(ui, &mut self.session.state.query) {
                            self.trigger_search();
                        }
                        ui.add_space(32.0);

                        if self.session.state.loading {
                            self.render_loading(ui);
                        } else if self.session.state.shows_results() {
                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                                self.render_overview(ui);
                                clicked_link = self.render_cards(ui);
                            });
                        }
                    });
                });
            });

        if let Some(link) = clicked_link {
            self.open(link);
        }

        if self.session.state.loading {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}

/// One result card: image, title link, snippet. Returns whether the title was clicked.
fn render_card(
    ui: &mut egui::Ui,
    result: &SearchResult,
    width: f32,
    hovered: bool,
) -> (bool, egui::Response) {
    let fill = if hovered { colors::panel_hover() } else { colors::panel() };

    let inner = egui::Frame::default()
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(width - 48.0);

            if let Some(image) = result.image {
                ui.add(
                    egui::Image::new(image)
                        .alt_text(result.title)
                        .fit_to_exact_size(egui::vec2(width - 48.0, 192.0))
                        .maintain_aspect_ratio(false)
                        .corner_radius(8.0),
                );
                ui.add_space(16.0);
            }

            let clicked = ui
                .link(RichText::new(result.title).size(20.0).strong().color(colors::ACCENT))
                .on_hover_text(result.link)
                .clicked();
            ui.add_space(8.0);
            ui.label(RichText::new(result.snippet).color(colors::SNIPPET));
            clicked
        });

    (inner.inner, inner.response)
}

impl eframe::App for TimeMachineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> TimeMachineApp {
        TimeMachineApp::with_config(AppConfig {
            search_delay: Duration::ZERO,
            open_links_in_browser: false,
            ..Default::default()
        })
    }

    fn frame(app: &mut TimeMachineApp, ctx: &egui::Context) {
        frame_with(app, ctx, Vec::new());
    }

    fn frame_with(app: &mut TimeMachineApp, ctx: &egui::Context, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.show(ctx));
    }

    fn enter() -> egui::Event {
        egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Type into the focused search field, then press Enter
    fn type_and_submit(app: &mut TimeMachineApp, ctx: &egui::Context, text: &str) {
        // First frame hands focus to the field
        frame(app, ctx);
        frame_with(app, ctx, vec![egui::Event::Text(text.to_string())]);
        assert_eq!(app.session.state.query, text);
        frame_with(app, ctx, vec![enter()]);
    }

    #[test]
    fn blank_search_keeps_status() {
        let mut app = app();
        app.session.set_query("  ");
        app.trigger_search();
        assert_eq!(app.status_message, "Ready");
        assert!(!app.session.state.loading);
    }

    #[test]
    fn search_then_process_messages() {
        let mut app = app();
        app.session.set_query("learning");
        app.trigger_search();
        assert!(app.session.state.loading);
        assert_eq!(app.status_message, "Searching for 'learning'");

        for _ in 0..500 {
            app.process_messages();
            if !app.session.state.loading {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(!app.session.state.loading);
        assert_eq!(app.status_message, "1 results");
        assert_eq!(app.session.state.results[0].title, "Machine Learning Basics");
    }

    #[test]
    fn frames_render_in_every_state() {
        let ctx = egui::Context::default();
        let mut app = TimeMachineApp::with_config(AppConfig {
            search_delay: Duration::from_millis(20),
            open_links_in_browser: false,
            ..Default::default()
        });

        // Idle
        frame(&mut app, &ctx);

        // Loading
        app.session.set_query("ai");
        app.trigger_search();
        frame(&mut app, &ctx);
        assert!(app.session.state.loading);

        // Results
        assert!(app.session.wait_for_completion(Duration::from_secs(5)));
        frame(&mut app, &ctx);
        assert!(app.session.state.shows_results());
    }

    #[test]
    fn enter_in_search_field_starts_search() {
        let ctx = egui::Context::default();
        let mut app = TimeMachineApp::with_config(AppConfig {
            search_delay: Duration::from_secs(30),
            open_links_in_browser: false,
            ..Default::default()
        });

        type_and_submit(&mut app, &ctx, "ai");
        assert!(app.session.state.loading);
        assert_eq!(app.session.in_flight(), 1);
        assert_eq!(app.status_message, "Searching for 'ai'");
    }

    #[test]
    fn enter_on_blank_field_changes_nothing() {
        let ctx = egui::Context::default();
        let mut app = app();

        type_and_submit(&mut app, &ctx, "   ");
        assert!(!app.session.state.loading);
        assert_eq!(app.session.in_flight(), 0);
        assert!(app.session.state.results.is_empty());
        assert!(app.session.state.overview.is_empty());
        assert_eq!(app.status_message, "Ready");
    }

    #[test]
    fn enter_then_completion_shows_results() {
        let ctx = egui::Context::default();
        let mut app = app();

        type_and_submit(&mut app, &ctx, "openai");
        assert!(app.session.wait_for_completion(Duration::from_secs(5)));
        frame(&mut app, &ctx);
        assert!(app.session.state.shows_results());
        assert_eq!(app.session.state.results[0].title, "OpenAI Research");
    }

    #[test]
    fn link_is_reported_when_browser_disabled() {
        let mut app = app();
        app.open("https://openai.com/research");
        assert_eq!(app.status_message, "Link: https://openai.com/research");
    }
}
