//! Expense entry screen

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::display::format_expense_line;
use crate::tui::app::App;
use crate::tui::layout::FormScreenLayout;

use super::{render_form, render_hints};

/// Render every expense and the new-expense form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = FormScreenLayout::new(area, app.form.fields.len());
    let ledger = app.storage.ledger();

    let block = Block::default()
        .title(format!(" Expenses ({}) ", ledger.expense_count()))
        .borders(Borders::ALL);

    if ledger.expense_count() == 0 {
        let empty = Paragraph::new("No expenses yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, layout.list);
    } else {
        let items: Vec<ListItem> = ledger
            .expenses()
            .map(|(category, expense)| {
                ListItem::new(format_expense_line(&category.name, expense, app.settings))
            })
            .collect();
        frame.render_widget(List::new(items).block(block), layout.list);
    }

    render_form(frame, &app.form, " Add Expense ", layout.form);
    render_hints(
        frame,
        "Up/Down: pick category  Tab: next field  Enter: add  Esc: back",
        layout.hints,
    );
}
