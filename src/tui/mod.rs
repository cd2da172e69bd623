//! Terminal User Interface module
//!
//! A read-only dashboard built on ratatui. It shows the KPIs, both charts and
//! budget progress, and re-reads the store on a timer or on demand.

pub mod app;
pub mod event;
pub mod terminal;

// Views
pub mod views;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_dashboard;
