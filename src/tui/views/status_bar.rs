//! Status bar view
//!
//! Shows the last action's outcome, or ledger totals when there is none

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, StatusKind};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some((StatusKind::Error, message)) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Some((StatusKind::Info, message)) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Green),
        )),
        None => totals_line(app),
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn totals_line(app: &App) -> Line<'static> {
    let ledger = app.storage.ledger();
    let symbol = app.settings.currency_symbol.as_str();
    let budget = ledger.total_budget();
    let spent = ledger.total_spent();

    let spent_color = if spent > budget {
        Color::Red
    } else {
        Color::Green
    };

    Line::from(vec![
        Span::styled(" Budget: ", Style::default().fg(Color::White)),
        Span::styled(
            budget.format_with_symbol(symbol),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled("Spent: ", Style::default().fg(Color::White)),
        Span::styled(spent.format_with_symbol(symbol), Style::default().fg(spent_color)),
        Span::raw(" │ "),
        Span::styled(
            format!("{} categories", ledger.categories().len()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
