//! Page components for the dashboard.

pub mod chart;
pub mod layout;
mod theme;

pub use chart::LineChart;
pub use layout::{render_page, Component};
pub use theme::Theme;
