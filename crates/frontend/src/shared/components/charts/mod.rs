pub mod bar_chart;
pub mod donut_chart;
pub mod geometry;
pub mod line_chart;

pub use bar_chart::{BarChart, BarDatum};
pub use donut_chart::DonutChart;
pub use line_chart::LineChart;
