use crate::preference::ColorMode;
use crate::ui::app::YEAR_MAX_LEN;
use crate::ui::search::SearchState;
use crate::ui::theme::ThemeContext;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    search: &'a SearchState,
    theme: ThemeContext,
}

impl<'a> Header<'a> {
    pub fn new(search: &'a SearchState, theme: ThemeContext) -> Self {
        Self { search, theme }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let palette = self.theme.palette;
        let text_style = Style::default().fg(palette.text);
        let dim_style = Style::default().fg(palette.text_dim);
        let separator_style = Style::default().fg(palette.separator);

        let year = &self.search.selected_year;
        let field = format!("{:<width$}", year, width = YEAR_MAX_LEN);
        let field_style = Style::default()
            .fg(palette.text)
            .bg(palette.highlight)
            .add_modifier(Modifier::UNDERLINED);

        let go_style = if self.search.can_submit() {
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            dim_style.add_modifier(Modifier::DIM)
        };
        let go_label = if self.search.loading { " ... " } else { " Go! " };

        let toggle = match self.theme.mode {
            ColorMode::Dark => "☾ Dark",
            ColorMode::Light => "☀ Light",
        };

        let input_line = Line::from(vec![
            Span::styled("  Year: ", text_style),
            Span::styled(field, field_style),
            Span::raw("  "),
            Span::styled(go_label, go_style),
            Span::styled("  │  ", separator_style),
            Span::styled(toggle, Style::default().fg(palette.accent)),
        ]);

        let hint = if year.is_empty() {
            "  Type a release year and press Enter"
        } else {
            "  Enter: Search  Backspace: Edit"
        };
        let hint_line = Line::from(Span::styled(hint, dim_style));

        Paragraph::new(vec![input_line, hint_line])
            .style(Style::default().bg(palette.background))
            .block(
                Block::default()
                    .title(Span::styled(
                        " Movie Browser ",
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
