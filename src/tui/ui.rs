use crate::catalog::SearchResult;
use crate::tui::app::App;
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEARCH_PREFIX: &str = " \u{1F50D} ";
const PLACEHOLDER: &str = "Search anything...";
const LOADING_TEXT: &str = "Searching... Please wait";
/// Below this width the cards stack in a single column
const TWO_COLUMN_MIN_WIDTH: u16 = 80;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BACKGROUND)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Loading line or results
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(frame, chunks[0]);
    let cursor = draw_search_bar(frame, app, chunks[1]);

    let state = &app.session.state;
    if state.loading {
        draw_loading(frame, chunks[2]);
    } else if state.shows_results() {
        draw_results(frame, app, chunks[2]);
    }

    draw_status_bar(frame, app, chunks[3]);

    if app.search.focused {
        frame.set_cursor_position(cursor);
    }
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let version = Line::from(Span::styled(
        format!("v{} ", crate::VERSION),
        Style::default().fg(colors::MUTED),
    ));
    frame.render_widget(
        Paragraph::new(version).alignment(Alignment::Right),
        Rect::new(area.x, area.y, area.width, area.height.min(1)),
    );

    let lines = vec![
        Line::from(Span::styled("TimeMachine", colors::title_style())),
        Line::from(Span::styled("Search", colors::title_style())),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(1)),
    );
}

/// Draws the search bar and returns where the text cursor belongs.
fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) -> Position {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::border_style(app.search.focused))
        .title(" Search ")
        .title(Line::from(" Enter \u{21B5} ").right_aligned())
        .style(Style::default().bg(colors::PANEL));

    let query = &app.session.state.query;
    let prefix = SEARCH_PREFIX.width() as u16;
    let text_width = area.width.saturating_sub(2 + prefix);
    let (visible, skipped) = visible_query(query, app.search.cursor_column(query), text_width);

    let line = if query.is_empty() {
        Line::from(vec![
            Span::styled(SEARCH_PREFIX, Style::default().fg(Color::White)),
            Span::styled(PLACEHOLDER, colors::placeholder_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled(SEARCH_PREFIX, Style::default().fg(Color::White)),
            Span::styled(visible, Style::default().fg(Color::White)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);

    let cursor_x = area.x + 1 + prefix + app.search.cursor_column(query).saturating_sub(skipped);
    let max_x = area.right().saturating_sub(2);
    Position::new(cursor_x.min(max_x), area.y + 1)
}

/// The tail of `query` that fits in `width` columns with the cursor in view,
/// plus the number of columns scrolled off the left edge.
pub fn visible_query(query: &str, cursor_column: u16, width: u16) -> (&str, u16) {
    // Keep one column free for the cursor after the last character
    let overflow = cursor_column.saturating_add(1).saturating_sub(width.max(1));
    if overflow == 0 {
        return (query, 0);
    }

    let mut skipped = 0u16;
    for (i, c) in query.char_indices() {
        if skipped >= overflow {
            return (&query[i..], skipped);
        }
        skipped += c.width().unwrap_or(0) as u16;
    }
    ("", skipped)
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(LOADING_TEXT, Style::default().fg(colors::ACCENT)));
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        Rect::new(area.x, area.y + 1, area.width, 1.min(area.height)),
    );
}

fn draw_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let overview = app.session.state.overview.as_str();

    // Overview panel: wrapped text plus borders, only when there is something to say
    let overview_height = if overview.is_empty() {
        0
    } else {
        wrapped_line_count(overview, area.width.saturating_sub(4)) + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(overview_height), Constraint::Min(0)])
        .split(area);

    if !overview.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::ACCENT))
            .title(Span::styled(" Overview ", colors::title_style()))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(colors::PANEL));
        frame.render_widget(
            Paragraph::new(overview)
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: true })
                .block(block),
            chunks[0],
        );
    }

    draw_cards(frame, app, chunks[1]);
}

fn draw_cards(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns: usize = if area.width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
    app.grid.columns = columns;

    let results = &app.session.state.results;
    let card_width = area.width / columns as u16;
    let card_height = results
        .iter()
        .map(|r| card_height(r, card_width))
        .max()
        .unwrap_or(0);

    let rows = results.len().div_ceil(columns);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Length(card_height)))
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * columns + col;
            if let Some(result) = results.get(index) {
                let selected = !app.search.focused && app.grid.selected == Some(index);
                draw_card(frame, result, selected, *cell);
            }
        }
    }
}

fn draw_card(frame: &mut Frame, result: &SearchResult, selected: bool, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::border_style(selected))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(colors::card_background(selected)));

    let title_style = if selected {
        colors::title_style().add_modifier(Modifier::UNDERLINED)
    } else {
        colors::title_style()
    };

    let mut lines = vec![
        Line::from(Span::styled(result.title, title_style)),
        Line::from(Span::styled(result.link, colors::link_style())),
        Line::from(Span::styled(result.snippet, Style::default().fg(colors::SNIPPET))),
    ];
    if let Some(image) = result.image {
        lines.push(Line::from(Span::styled(
            format!("\u{1F5BC} {}: {}", result.title, image),
            Style::default().fg(colors::MUTED),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn card_height(result: &SearchResult, card_width: u16) -> u16 {
    // Borders (2) and horizontal padding (2)
    let inner = card_width.saturating_sub(4);
    let mut height = 2
        + wrapped_line_count(result.title, inner)
        + wrapped_line_count(result.link, inner)
        + wrapped_line_count(result.snippet, inner);
    if let Some(image) = result.image {
        height += wrapped_line_count(&format!("\u{1F5BC} {}: {}", result.title, image), inner);
    }
    height
}

/// Rows a word-wrapped paragraph takes at `width` columns.
pub fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut lines = 1u16;
    let mut current = 0usize;

    for word in text.split_whitespace() {
        let w = word.width();
        let needed = if current == 0 { w } else { current + 1 + w };
        if needed <= width {
            current = needed;
        } else if current == 0 {
            // A single word longer than the line is broken across rows
            lines += (w.saturating_sub(1) / width) as u16;
            current = (w.saturating_sub(1) % width) + 1;
        } else {
            lines += 1 + (w.saturating_sub(1) / width) as u16;
            current = (w.saturating_sub(1) % width) + 1;
        }
    }
    lines
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.session.state.loading {
        format!(" \u{23F3} {}", app.status_message)
    } else {
        format!(" {}", app.status_message)
    };

    let right_text = if app.search.focused {
        " Enter:Search  Tab:Results  Esc:Leave  Ctrl+Q:Quit "
    } else {
        " \u{2190}\u{2191}\u{2192}\u{2193}:Move  Enter:Open  Y:Copy link  Tab:Search  Ctrl+Q:Quit "
    };

    // Left-aligned text + padding + right-aligned hints
    let available_width = area.width as usize;
    let left_len = left_text.width();
    let right_len = right_text.width();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(colors::STATUS_BG));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppConfig;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn app() -> App {
        App::new(AppConfig {
            search_delay: Duration::ZERO,
            open_links_in_browser: false,
            ..Default::default()
        })
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn search(app: &mut App, query: &str) {
        app.session.set_query(query);
        app.trigger_search();
        assert!(app.session.wait_for_completion(Duration::from_secs(5)));
        app.grid.reset(app.session.state.results.len());
    }

    #[test]
    fn idle_view_shows_header_and_placeholder() {
        let mut app = app();
        let screen = render(&mut app, 100, 40);
        assert!(screen.contains("TimeMachine"));
        assert!(screen.contains("Search anything..."));
        assert!(!screen.contains("Searching... Please wait"));
        assert!(!screen.contains("Overview"));
    }

    #[test]
    fn loading_view_shows_only_the_indicator() {
        let mut app = App::new(AppConfig {
            search_delay: Duration::from_secs(30),
            ..Default::default()
        });
        app.session.set_query("ai");
        app.trigger_search();

        let screen = render(&mut app, 100, 40);
        assert!(screen.contains("Searching... Please wait"));
        assert!(!screen.contains("Overview"));
        assert!(!screen.contains("Wikipedia: AI"));
    }

    #[test]
    fn results_view_shows_overview_and_cards() {
        let mut app = app();
        search(&mut app, "artificial");

        let screen = render(&mut app, 120, 50);
        assert!(screen.contains("Overview"));
        // "artificial" names no topic keyword
        assert!(screen.contains("A comprehensive search exploring"));
        assert!(screen.contains("Wikipedia: AI"));
        assert!(screen.contains("OpenAI Research"));
        assert!(!screen.contains("Machine Learning Basics"));
        assert!(!screen.contains("Searching... Please wait"));
        assert_eq!(app.grid.columns, 2);
    }

    #[test]
    fn empty_results_look_like_a_fresh_view() {
        let mut app = app();
        search(&mut app, "xyz123");

        let screen = render(&mut app, 100, 40);
        assert!(!screen.contains("Overview"));
        assert!(!screen.contains("A comprehensive search"));
    }

    #[test]
    fn narrow_terminal_uses_one_column() {
        let mut app = app();
        search(&mut app, "ai");
        render(&mut app, 60, 80);
        assert_eq!(app.grid.columns, 1);
    }

    #[test]
    fn typed_query_replaces_placeholder() {
        let mut app = app();
        app.session.set_query("machine learning");
        let screen = render(&mut app, 100, 30);
        assert!(screen.contains("machine learning"));
        assert!(!screen.contains("Search anything..."));
    }

    #[test]
    fn header_shows_version() {
        let mut app = app();
        let screen = render(&mut app, 100, 30);
        assert!(screen.contains(&format!("v{}", crate::VERSION)));
    }

    #[test]
    fn visible_query_scrolls_to_the_cursor() {
        assert_eq!(visible_query("ai", 2, 10), ("ai", 0));
        assert_eq!(visible_query("abcdefghij", 10, 10), ("bcdefghij", 1));
        assert_eq!(visible_query("abcdefghij", 3, 10), ("abcdefghij", 0));
        // Wide characters scroll off whole
        assert_eq!(visible_query("日本語ai", 8, 6), ("語ai", 4));
    }

    #[test]
    fn long_query_keeps_cursor_on_its_character() {
        let mut app = app();
        let query = "the history of machine learning and artificial intelligence";
        for c in query.chars() {
            app.search.insert(&mut app.session.state.query, c);
        }

        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        let buffer = terminal.backend().buffer();

        // The character just left of the cursor is the last one typed
        assert_eq!(buffer[(cursor.x - 1, cursor.y)].symbol(), "e");
        let bar: String = (0..40).map(|x| buffer[(x, cursor.y)].symbol()).collect();
        assert!(bar.contains("intelligence"));
        assert!(!bar.contains("the history"));
    }

    #[test]
    fn wrapped_line_count_breaks_on_words() {
        assert_eq!(wrapped_line_count("", 10), 1);
        assert_eq!(wrapped_line_count("hello world", 11), 1);
        assert_eq!(wrapped_line_count("hello world", 10), 2);
        assert_eq!(wrapped_line_count("aaaaaaaaaaaaaaaaaaaa", 10), 2);
        assert_eq!(wrapped_line_count("a b c", 1), 3);
        assert_eq!(wrapped_line_count("aaaaaaaaaa b", 10), 2);
    }
}
