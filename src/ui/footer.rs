use crate::ui::theme::ThemeContext;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str =
    " ←↑↓→: Select │ PgUp/PgDn: Page │ T: Theme │ H: History │ R: Reset │ Q: Quit";

pub struct Footer {
    theme: ThemeContext,
}

impl Footer {
    pub fn new(theme: ThemeContext) -> Self {
        Self { theme }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let palette = self.theme.palette;
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the hints contain arrows.
        let hints_width = HINTS.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default()
            .fg(palette.text_dim)
            .add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style.bg(palette.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
