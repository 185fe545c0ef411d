use crate::ui::search::SearchState;
use crate::ui::theme::ThemeContext;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Height of the pagination block below the grid.
pub const PAGINATION_HEIGHT: u16 = 2;

/// "Showing movies X to Y out of Z" and the page controls.
pub fn pagination(search: &SearchState, items_per_page: u32, theme: ThemeContext) -> Paragraph<'static> {
    let palette = theme.palette;
    let (start, end) = search.showing_range(items_per_page);
    let summary = Line::from(Span::styled(
        format!(
            "Showing movies {} to {} out of {}",
            start, end, search.total_results
        ),
        Style::default().fg(palette.text_dim),
    ));

    let enabled = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let disabled = Style::default()
        .fg(palette.text_dim)
        .add_modifier(Modifier::DIM);
    let previous = if search.has_previous_page() {
        enabled
    } else {
        disabled
    };
    let next = if search.has_next_page() {
        enabled
    } else {
        disabled
    };

    let controls = Line::from(vec![
        Span::styled("‹ Previous", previous),
        Span::styled(
            format!("   Page {} of {}   ", search.current_page, search.total_pages),
            Style::default().fg(palette.text),
        ),
        Span::styled("Next ›", next),
    ]);

    Paragraph::new(vec![summary, controls]).alignment(Alignment::Center)
}
