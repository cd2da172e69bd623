//! Layout definitions for the TUI
//!
//! Header, KPI row, the two charts side by side, budget rows and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions of the dashboard
pub struct DashboardLayout {
    pub header: Rect,
    /// Three KPI boxes
    pub kpis: [Rect; 3],
    pub category_chart: Rect,
    pub time_chart: Rect,
    pub budget: Rect,
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Calculate layout from available area and the number of budget rows
    pub fn new(area: Rect, budget_rows: usize) -> Self {
        // Two lines per budget row (bar + caption) plus the block border
        let budget_height = (budget_rows.max(1) * 2 + 2) as u16;

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),             // Header
                Constraint::Length(3),             // KPIs
                Constraint::Min(8),                // Charts
                Constraint::Length(budget_height), // Budget targets
                Constraint::Length(1),             // Status bar
            ])
            .split(area);

        let kpis = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(vertical[1]);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[2]);

        Self {
            header: vertical[0],
            kpis: [kpis[0], kpis[1], kpis[2]],
            category_chart: charts[0],
            time_chart: charts[1],
            budget: vertical[3],
            status_bar: vertical[4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = DashboardLayout::new(area, 4);

        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.budget.height, 10);
        assert_eq!(
            layout.header.height
                + layout.kpis[0].height
                + layout.category_chart.height
                + layout.budget.height
                + layout.status_bar.height,
            40
        );
        assert_eq!(layout.category_chart.y, layout.time_chart.y);
    }
}
