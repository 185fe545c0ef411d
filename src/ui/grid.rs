//! Card grid for one page of results.
//!
//! Every card is a bordered box holding the poster area, the title and
//! the release year. The grid scrolls by whole rows so the selected card
//! is always on screen.

use crate::catalog::Movie;
use crate::ui::poster::{PosterSlot, ThumbnailView, THUMB_HEIGHT, THUMB_WIDTH};
use crate::ui::theme::ThemeContext;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};
use std::collections::HashMap;

pub const POSTER_ROWS: u16 = (THUMB_HEIGHT / 2) as u16;
pub const CARD_WIDTH: u16 = THUMB_WIDTH as u16 + 2;
/// Borders, poster, title and year.
pub const CARD_HEIGHT: u16 = POSTER_ROWS + 4;
const CARD_GAP: u16 = 1;

const NO_IMAGE: &str = "No Image";
const UNKNOWN_YEAR: &str = "Unknown";

/// Number of card columns that fit in `width` cells. Never zero.
pub fn columns_for_width(width: u16) -> usize {
    (width.saturating_add(CARD_GAP) / (CARD_WIDTH + CARD_GAP)).max(1) as usize
}

/// Text shown under the title.
pub fn year_label(movie: &Movie) -> String {
    movie
        .release_year()
        .map(|year| year.to_string())
        .unwrap_or_else(|| UNKNOWN_YEAR.to_string())
}

pub struct MovieGrid<'a> {
    movies: &'a [Movie],
    posters: &'a HashMap<u64, PosterSlot>,
    selected: usize,
    theme: ThemeContext,
}

impl<'a> MovieGrid<'a> {
    pub fn new(
        movies: &'a [Movie],
        posters: &'a HashMap<u64, PosterSlot>,
        selected: usize,
        theme: ThemeContext,
    ) -> Self {
        Self {
            movies,
            posters,
            selected,
            theme,
        }
    }

    fn render_card(&self, movie: &Movie, selected: bool, area: Rect, buf: &mut Buffer) {
        let palette = self.theme.palette;
        let border = if selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.border)
        };
        let block = Block::default().borders(Borders::ALL).border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let poster_area = Rect {
            height: POSTER_ROWS.min(inner.height),
            ..inner
        };
        self.render_poster(movie, poster_area, buf);

        let width = inner.width as usize;
        let title_y = inner.y + poster_area.height;
        if title_y < inner.bottom() {
            let style = Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD);
            buf.set_stringn(inner.x, title_y, truncate(&movie.title, width), width, style);
        }
        let year_y = title_y + 1;
        if year_y < inner.bottom() {
            let style = Style::default().fg(palette.text_dim);
            buf.set_stringn(inner.x, year_y, year_label(movie), width, style);
        }
    }

    fn render_poster(&self, movie: &Movie, area: Rect, buf: &mut Buffer) {
        let palette = self.theme.palette;
        match self.posters.get(&movie.id) {
            Some(slot) if slot.state.is_loaded() => {
                if let Some(thumbnail) = &slot.thumbnail {
                    ThumbnailView::new(thumbnail).render(area, buf);
                    return;
                }
            }
            Some(slot) if slot.state.is_error() => {}
            // Pending or not started yet: skeleton.
            _ => {
                let style = Style::default().fg(palette.skeleton);
                for y in area.top()..area.bottom() {
                    for x in area.left()..area.right() {
                        if let Some(cell) = buf.cell_mut((x, y)) {
                            cell.set_symbol("░").set_style(style);
                        }
                    }
                }
                return;
            }
        }

        buf.set_style(area, Style::default().bg(palette.placeholder));
        let label_width = NO_IMAGE.len() as u16;
        if area.width >= label_width && area.height > 0 {
            let x = area.x + (area.width - label_width) / 2;
            let y = area.y + area.height / 2;
            buf.set_string(
                x,
                y,
                NO_IMAGE,
                Style::default().fg(palette.text_dim).bg(palette.placeholder),
            );
        }
    }
}

impl Widget for MovieGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.movies.is_empty() {
            return;
        }
        let columns = columns_for_width(area.width);
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        let selected_row = self.selected / columns;
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        for (index, movie) in self.movies.iter().enumerate() {
            let row = index / columns;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }
            let col = (index % columns) as u16;
            let card = Rect {
                x: area.x + col * (CARD_WIDTH + CARD_GAP),
                y: area.y + (row - first_row) as u16 * CARD_HEIGHT,
                width: CARD_WIDTH,
                height: CARD_HEIGHT,
            }
            .intersection(area);
            if card.is_empty() {
                continue;
            }
            self.render_card(movie, index == self.selected, card, buf);
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
