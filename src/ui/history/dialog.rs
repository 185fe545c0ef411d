use crate::ui::history::state::{HistoryPopup, HistoryState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::ThemeContext;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use std::time::SystemTime;

const DIALOG_WIDTH: u16 = 44;

pub fn render_history_dialog(
    frame: &mut Frame,
    area: Rect,
    state: &HistoryState,
    theme: &ThemeContext,
) {
    let HistoryPopup::Visible { selected } = state.popup else {
        return;
    };
    let palette = theme.palette;
    let inner_width = DIALOG_WIDTH.saturating_sub(2) as usize; // subtract borders

    let mut lines: Vec<Line> = if state.entries.is_empty() {
        vec![Line::from(Span::styled(
            " No searches yet.",
            Style::default().fg(palette.text_dim),
        ))]
    } else {
        state
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let description = format!("{}  ({} results)", entry.year, entry.results_count);
                let time = format_time(entry.timestamp);
                let padding = inner_width
                    .saturating_sub(description.chars().count())
                    .saturating_sub(time.len())
                    .saturating_sub(2); // 1 char margin each side
                let line = Line::from(vec![
                    Span::raw(" "),
                    Span::styled(description, Style::default().fg(palette.text)),
                    Span::raw(" ".repeat(padding.max(1))),
                    Span::styled(time, Style::default().fg(palette.text_dim)),
                    Span::raw(" "),
                ]);
                if idx == selected {
                    line.style(Style::default().bg(palette.highlight))
                } else {
                    line
                }
            })
            .collect()
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter: Search  Ctrl+D: Clear  Esc: Close",
        Style::default().fg(palette.text_dim),
    )));

    let height = lines.len().saturating_add(2) as u16;
    let popup_area = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(Span::styled(" Search History ", Style::default().fg(palette.accent)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.background));
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

fn format_time(timestamp: SystemTime) -> String {
    let duration = timestamp
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    let local_secs = duration.as_secs() as i64 + local_offset_secs();
    let local_secs = local_secs.rem_euclid(86400) as u64;
    let h = local_secs / 3600;
    let m = (local_secs / 60) % 60;
    let s = local_secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Local timezone offset in seconds from UTC.
fn local_offset_secs() -> i64 {
    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;
        unsafe {
            let now = libc::time(std::ptr::null_mut());
            let mut tm = MaybeUninit::<libc::tm>::uninit();
            if libc::localtime_r(&now, tm.as_mut_ptr()).is_null() {
                return 0;
            }
            (*tm.as_ptr()).tm_gmtoff as i64
        }
    }
    #[cfg(not(unix))]
    {
        0
    }
}
