//! Budget view
//!
//! One gauge per budget target for the reference month, colored by alert level

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::reports::{AlertLevel, BudgetProgress, Dashboard};

/// Render the budget targets block
pub fn render(frame: &mut Frame, dashboard: &Dashboard, currency: &str, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(format!(
        "Budget Targets for {}",
        dashboard.reference_date.format("%B %Y")
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if dashboard.budget_progress.is_empty() {
        frame.render_widget(Paragraph::new("No budget targets configured."), inner);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            dashboard
                .budget_progress
                .iter()
                .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)]),
        )
        .split(inner);

    for (progress, lines) in dashboard.budget_progress.iter().zip(rows.chunks(2)) {
        if let [caption, bar] = lines {
            frame.render_widget(caption_line(progress, currency), *caption);
            frame.render_widget(gauge(progress), *bar);
        }
    }
}

fn alert_color(alert: AlertLevel) -> Color {
    match alert {
        AlertLevel::Normal => Color::Green,
        AlertLevel::Warning => Color::Yellow,
        AlertLevel::Exceeded => Color::Red,
    }
}

fn caption_line<'a>(progress: &'a BudgetProgress, currency: &str) -> Paragraph<'a> {
    let mut spans = vec![
        Span::styled(
            progress.category.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  {} / {}",
            progress.spent.format_with_symbol(currency),
            progress.limit.format_with_symbol(currency)
        )),
    ];

    if let Some(message) = progress.alert.message() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message,
            Style::default()
                .fg(alert_color(progress.alert))
                .add_modifier(Modifier::BOLD),
        ));
    }

    Paragraph::new(Line::from(spans))
}

fn gauge(progress: &BudgetProgress) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(alert_color(progress.alert)))
        .ratio(progress.fraction().clamp(0.0, 1.0))
        .label(format!("{:.1}%", progress.percent * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetTarget, Money, Transaction, TransactionKind};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_budget_rows() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let transactions = vec![Transaction {
            id: 1,
            date,
            kind: TransactionKind::Expense,
            category: "Lazer".into(),
            description: String::new(),
            amount: Money::from_units_cents(450, 0),
        }];
        let dashboard = Dashboard::compute(&transactions, &BudgetTarget::defaults(), date);

        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, &dashboard, "R$", area)
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(text.contains("Budget Targets for May 2024"));
        assert!(text.contains("R$ 450.00 / R$ 500.00"));
        assert!(text.contains("Warning: close to the limit"));
        assert!(text.contains("90.0%"));
    }
}
