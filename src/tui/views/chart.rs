//! Allocation chart screen

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::reports::AllocationReport;
use crate::tui::app::App;

use super::render_hints;

const BAR_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

/// Render a bar per category plus the percentage breakdown
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let report = AllocationReport::generate(app.storage.ledger(), app.chart_metric);
    let symbol = app.settings.currency_symbol.as_str();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(report.slices.len() as u16 + 2),
            Constraint::Length(1),
        ])
        .split(area);

    let title = format!(" {} ", report.metric.label());

    if report.is_empty() {
        let message = Paragraph::new("Please add categories with budgets before viewing the chart.")
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true })
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(message, chunks[0]);
    } else {
        let bars: Vec<Bar> = report
            .labels()
            .into_iter()
            .zip(report.values())
            .enumerate()
            .map(|(i, (label, value))| {
                Bar::default()
                    .value(value.cents().max(0) as u64)
                    .text_value(value.format_with_symbol(symbol))
                    .label(Line::from(label.to_string()))
                    .style(Style::default().fg(BAR_COLORS[i % BAR_COLORS.len()]))
            })
            .collect();

        let chart = BarChart::default()
            .block(Block::default().title(title).borders(Borders::ALL))
            .data(BarGroup::default().bars(&bars))
            .bar_width(12)
            .bar_gap(2)
            .value_style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(chart, chunks[0]);

        let items: Vec<ListItem> = report
            .slices
            .iter()
            .map(|slice| {
                ListItem::new(format!(
                    "{:<20} {:>12} {:>6.1}%",
                    slice.name,
                    slice.value.format_with_symbol(symbol),
                    slice.percentage
                ))
            })
            .collect();
        let breakdown = List::new(items).block(
            Block::default()
                .title(format!(" Total: {} ", report.total.format_with_symbol(symbol)))
                .borders(Borders::ALL),
        );
        frame.render_widget(breakdown, chunks[1]);
    }

    render_hints(frame, "m/Tab: toggle budget/spent  Esc: back", chunks[2]);
}
