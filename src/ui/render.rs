use crate::catalog::Movie;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::grid::{year_label, MovieGrid};
use crate::ui::header::Header;
use crate::ui::history::render_history_dialog;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::pagination::{pagination, PAGINATION_HEIGHT};
use crate::ui::search::SearchPhase;
use crate::ui::theme::ThemeContext;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const DETAIL_HEIGHT: u16 = 5;
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let theme = app.theme();
    let palette = theme.palette;
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    frame.render_widget(Header::new(app.search(), theme).widget(), header);
    draw_body(frame, app, body, theme);
    frame.render_widget(Footer::new(theme).widget(footer), footer);

    render_history_dialog(frame, body, app.history(), &theme);
}

fn draw_body(frame: &mut Frame<'_>, app: &App, body: Rect, theme: ThemeContext) {
    let palette = theme.palette;
    let search = app.search();

    match search.phase() {
        SearchPhase::Loading => {
            let spinner = SPINNER[(app.tick() % SPINNER.len() as u64) as usize];
            let line = Line::from(vec![
                Span::styled(spinner, Style::default().fg(palette.accent)),
                Span::styled(" Loading movies...", Style::default().fg(palette.text)),
            ]);
            let area = centered_rect_by_size(body, body.width, 1);
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        }
        SearchPhase::Failed => {
            let message = search.error.clone().unwrap_or_default();
            let width = (message.chars().count() as u16).saturating_add(4);
            let area = centered_rect_by_size(body, width, 3);
            let banner = Paragraph::new(Span::styled(
                message,
                Style::default().fg(palette.error).bg(palette.error_bg),
            ))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.error))
                    .style(Style::default().bg(palette.error_bg)),
            );
            frame.render_widget(banner, area);
        }
        SearchPhase::Success if search.shows_empty_notice() => {
            let notice = Paragraph::new(Span::styled(
                format!("No movies found for the year {}", search.selected_year),
                Style::default().fg(palette.text_dim),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(notice, centered_rect_by_size(body, body.width, 1));
        }
        SearchPhase::Success => draw_results(frame, app, body, theme),
        SearchPhase::Idle => {
            let welcome = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Discover popular movies by release year",
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Type a year and press Enter",
                    Style::default().fg(palette.text_dim),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(welcome, centered_rect_by_size(body, body.width, 2));
        }
    }
}

fn draw_results(frame: &mut Frame<'_>, app: &App, body: Rect, theme: ThemeContext) {
    let search = app.search();
    let footer_height = (DETAIL_HEIGHT + PAGINATION_HEIGHT).min(body.height);
    let grid_area = Rect {
        height: body.height - footer_height,
        ..body
    };
    let detail_area = Rect {
        y: grid_area.bottom(),
        height: DETAIL_HEIGHT.min(footer_height),
        ..body
    };
    let pagination_area = Rect {
        y: detail_area.bottom(),
        height: footer_height - detail_area.height,
        ..body
    };

    frame.render_widget(
        MovieGrid::new(&search.movies, app.posters(), app.selected(), theme),
        grid_area,
    );
    if let Some(movie) = app.selected_movie() {
        frame.render_widget(detail(movie, theme), detail_area);
    }
    frame.render_widget(
        pagination(search, app.items_per_page(), theme),
        pagination_area,
    );
}

fn detail(movie: &Movie, theme: ThemeContext) -> Paragraph<'static> {
    let palette = theme.palette;
    let released = movie
        .release_date
        .clone()
        .filter(|date| !date.is_empty())
        .unwrap_or_else(|| year_label(movie));
    let meta = Line::from(vec![
        Span::styled(
            movie.title.clone(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", Style::default().fg(palette.separator)),
        Span::styled(released, Style::default().fg(palette.text_dim)),
        Span::styled("  │  ", Style::default().fg(palette.separator)),
        Span::styled(
            format!("★ {:.1}", movie.vote_average),
            Style::default().fg(palette.accent),
        ),
    ]);
    let overview = Line::from(Span::styled(
        movie.overview.clone(),
        Style::default().fg(palette.text),
    ));

    Paragraph::new(vec![meta, overview])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.border)),
        )
}
