//! TUI Views module
//!
//! Renders the dashboard: KPI boxes, the two charts, budget rows and the
//! status bar.

pub mod budget;
pub mod charts;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::layout::DashboardLayout;
use crate::models::Money;
use crate::reports::Dashboard;

/// Render the entire dashboard
pub fn render(frame: &mut Frame, app: &App) {
    let budget_rows = app
        .dashboard
        .as_ref()
        .map_or(0, |d| d.budget_progress.len());
    let layout = DashboardLayout::new(frame.area(), budget_rows);

    render_header(frame, layout.header);

    match &app.dashboard {
        Some(dashboard) if dashboard.transaction_count > 0 => {
            let currency = app.settings.currency_symbol.as_str();
            render_kpis(frame, dashboard, currency, &layout);
            charts::render_category_chart(frame, dashboard, layout.category_chart);
            charts::render_time_chart(frame, dashboard, layout.time_chart);
            budget::render(frame, dashboard, currency, layout.budget);
        }
        Some(_) => render_placeholder(
            frame,
            layout.category_chart.union(layout.time_chart),
            "No transactions recorded yet. Add one with 'findash add'.",
        ),
        None => render_placeholder(
            frame,
            layout.category_chart.union(layout.time_chart),
            "Transactions could not be loaded.",
        ),
    }

    render_status_bar(frame, app, layout.status_bar);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![Span::styled(
        " FinDash - Personal Finance ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]));
    frame.render_widget(title, area);
}

fn render_kpis(frame: &mut Frame, dashboard: &Dashboard, currency: &str, layout: &DashboardLayout) {
    let kpis = &dashboard.kpis;
    let balance_color = if kpis.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let boxes = [
        ("Income", kpis.total_income, Color::Green),
        ("Expenses", kpis.total_expense, Color::Red),
        ("Balance", kpis.balance, balance_color),
    ];

    for ((title, amount, color), area) in boxes.into_iter().zip(layout.kpis) {
        frame.render_widget(kpi_box(title, amount, color, currency), area);
    }
}

fn kpi_box<'a>(title: &'a str, amount: Money, color: Color, currency: &str) -> Paragraph<'a> {
    Paragraph::new(Line::from(Span::styled(
        amount.format_with_symbol(currency),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(title))
}

fn render_placeholder(frame: &mut Frame, area: Rect, message: &str) {
    let placeholder = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(placeholder, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.error {
        Some(error) => Line::from(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::White).bg(Color::Red),
        )),
        None => Line::from(vec![
            Span::styled(" r ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" refresh  "),
            Span::styled(" q ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" quit"),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
