//! Savings goals screen

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::FormScreenLayout;

use super::{render_form, render_hints};

/// Render a progress gauge per goal and the goal/deposit form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = FormScreenLayout::new(area, app.form.fields.len());
    let symbol = app.settings.currency_symbol.as_str();
    let goals = app.storage.ledger().savings_goals();

    let block = Block::default().title(" Savings Goals ").borders(Borders::ALL);
    let inner = block.inner(layout.list);
    frame.render_widget(block, layout.list);

    if goals.is_empty() {
        let empty = Paragraph::new("No savings goals yet.").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                goals
                    .iter()
                    .map(|_| Constraint::Length(1))
                    .chain(std::iter::once(Constraint::Min(0))),
            )
            .split(inner);

        for (goal, row) in goals.iter().zip(rows.iter()) {
            let color = if goal.is_goal_met() {
                Color::Green
            } else {
                Color::Yellow
            };
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(color))
                .ratio(goal.progress().clamp(0.0, 1.0))
                .label(format!(
                    "{}: {} / {}",
                    goal.name,
                    goal.current_amount.format_with_symbol(symbol),
                    goal.target_amount.format_with_symbol(symbol)
                ));
            frame.render_widget(gauge, *row);
        }
    }

    render_form(frame, &app.form, " Goal ", layout.form);
    render_hints(
        frame,
        "Tab: next field  Enter: set goal  Ctrl+D: deposit  Esc: back",
        layout.hints,
    );
}
