pub mod trend_series;

pub use trend_series::*;
