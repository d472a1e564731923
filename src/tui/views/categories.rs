//! Category management screen

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::FormScreenLayout;

use super::{render_form, render_hints};

/// Render the category list and the new-category form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = FormScreenLayout::new(area, app.form.fields.len());
    let symbol = app.settings.currency_symbol.as_str();
    let categories = app.storage.ledger().categories();

    let block = Block::default().title(" Categories ").borders(Borders::ALL);
    if categories.is_empty() {
        let empty = Paragraph::new("No categories yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, layout.list);
    } else {
        let items: Vec<ListItem> = categories
            .iter()
            .map(|c| {
                let remaining = c.remaining_budget();
                let remaining_color = if remaining.is_negative() {
                    Color::Red
                } else {
                    Color::Green
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!(
                        "{}: {}",
                        c.name,
                        c.budget_limit.format_with_symbol(symbol)
                    )),
                    Span::styled(
                        format!("  ({} left)", remaining.format_with_symbol(symbol)),
                        Style::default().fg(remaining_color),
                    ),
                    Span::styled(
                        c.spent_fraction()
                            .map(|f| format!("  {:.0}% used", f * 100.0))
                            .unwrap_or_default(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items).block(block), layout.list);
    }

    render_form(frame, &app.form, " Add Category ", layout.form);
    render_hints(
        frame,
        "Tab: next field  Enter: add category  Esc: back",
        layout.hints,
    );
}
