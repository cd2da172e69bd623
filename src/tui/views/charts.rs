//! Chart views
//!
//! Expenses by category as horizontal bars, and daily income/expense totals
//! as grouped vertical bars.

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::models::TransactionKind;
use crate::reports::{category_share, Dashboard};

/// Columns taken by one date group: two bars plus the gap
const GROUP_WIDTH: u16 = 2 * TIME_BAR_WIDTH + TIME_GROUP_GAP;
const TIME_BAR_WIDTH: u16 = 3;
const TIME_GROUP_GAP: u16 = 2;

/// Render the expense-by-category chart, largest category first
pub fn render_category_chart(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Expenses by Category");

    let shares = category_share(&dashboard.expense_by_category);
    if shares.is_empty() {
        let empty = Paragraph::new("No expenses recorded for the chart.").block(block);
        frame.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = shares
        .iter()
        .map(|(category, amount, pct)| {
            Bar::default()
                .value(amount.cents().max(0) as u64)
                .label(Line::from(category.clone()))
                .text_value(format!("{} ({:.1}%)", amount, pct))
                .style(Style::default().fg(Color::Magenta))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

/// Render income and expense totals per day
///
/// Only the most recent days that fit the width are drawn.
pub fn render_time_chart(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Income vs Expenses by Day");

    let mut days: Vec<(chrono::NaiveDate, u64, u64)> = Vec::new();
    for point in &dashboard.time_series {
        let cents = point.total.cents().max(0) as u64;
        if days.last().map(|(date, _, _)| *date) != Some(point.date) {
            days.push((point.date, 0, 0));
        }
        if let Some(day) = days.last_mut() {
            match point.kind {
                TransactionKind::Income => day.1 += cents,
                TransactionKind::Expense => day.2 += cents,
            }
        }
    }

    let fit = (area.width.saturating_sub(2) / GROUP_WIDTH).max(1) as usize;
    let visible = &days[days.len().saturating_sub(fit)..];

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(TIME_BAR_WIDTH)
        .bar_gap(0)
        .group_gap(TIME_GROUP_GAP);

    for (date, income, expense) in visible {
        let bars = [
            Bar::default()
                .value(*income)
                .text_value(String::new())
                .style(Style::default().fg(Color::Green)),
            Bar::default()
                .value(*expense)
                .text_value(String::new())
                .style(Style::default().fg(Color::Red)),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(date.format("%m-%d").to_string()))
                .bars(&bars),
        );
    }

    frame.render_widget(chart, area);
}
