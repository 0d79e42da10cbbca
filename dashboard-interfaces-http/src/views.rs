pub mod dashboard_page;
pub mod escape;
pub mod trend_chart;

pub use dashboard_page::*;
pub use escape::*;
pub use trend_chart::*;
