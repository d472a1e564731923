//! TUI Views module
//!
//! One render function per screen, plus the shared header and status bar.

pub mod categories;
pub mod chart;
pub mod expenses;
pub mod menu;
pub mod savings;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, Form, Screen};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match app.screen {
        Screen::MainMenu => menu::render(frame, app, layout.main),
        Screen::Categories => categories::render(frame, app, layout.main),
        Screen::Expenses => expenses::render(frame, app, layout.main),
        Screen::Savings => savings::render(frame, app, layout.main),
        Screen::Chart => chart::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(app.screen.title()))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

/// Render a form's fields inside a bordered block, one per line
pub(super) fn render_form(frame: &mut Frame, form: &Form, title: &str, area: Rect) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, field) in form.fields.iter().enumerate() {
        let row = inner.y + i as u16;
        if row >= inner.y + inner.height {
            break;
        }
        frame.render_widget(field, Rect::new(inner.x, row, inner.width, 1));
    }
}

/// Render a line of key hints
pub(super) fn render_hints(frame: &mut Frame, hints: &str, area: Rect) {
    let paragraph = Paragraph::new(hints.to_string()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
