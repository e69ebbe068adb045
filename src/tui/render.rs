//! Drawing of a list view: bordered panel, item rows, notice line and key help.

use crate::core::pagination::Page;
use crate::tui::keys::KEY_HELP;
use crate::tui::selector::ListView;
use crate::tui::theme::Theme;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::Frame;

/// Rows taken by the two panel borders, the notice line and the help line.
pub const CHROME_ROWS: u16 = 4;

/// Item rows available in a terminal `height` rows tall, never less than one.
pub fn visible_rows(height: u16) -> usize {
    usize::from(height.saturating_sub(CHROME_ROWS).max(1))
}

pub fn render_list(frame: &mut Frame, area: Rect, view: &ListView, page: Page, rows: usize, theme: &Theme) {
    let [panel, notice, help] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let block = Block::bordered()
        .border_style(theme.border)
        .title(format!(" {} ", view.title()))
        .title_bottom(Line::from(format!(" {}/{} ", page.page + 1, page.page_count)).right_aligned())
        .padding(Padding::horizontal(1));

    let label_width = usize::from(theme.label_width);
    let lines: Vec<Line> = page
        .range(view.items().len(), rows)
        .map(|index| {
            let item = &view.items()[index];
            let selected = index == view.selected();
            Line::from(vec![
                Span::styled(format!("{:<label_width$}", item.label()), theme.label),
                Span::styled(item.display_name(), theme.style_for(item, selected)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), panel);

    if let Some(message) = view.notice() {
        frame.render_widget(
            Paragraph::new(Line::from(format!("  {message}"))).style(theme.notice),
            notice,
        );
    }
    frame.render_widget(
        Paragraph::new(Line::from(format!("  {KEY_HELP}"))).style(theme.help),
        help,
    );
}
