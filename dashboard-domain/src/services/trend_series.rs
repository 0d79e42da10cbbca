// Trend series
// Daily counts ordered by date, plus the geometry needed to draw them

use chrono::NaiveDate;

use crate::entities::TrendPoint;

#[derive(Debug, Clone, Default)]
pub struct TrendSeries {
    points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn new(mut points: Vec<TrendPoint>) -> Self {
        points.sort_by_key(|point| point.date);
        Self { points }
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn max_count(&self) -> u64 {
        self.points.iter().map(|point| point.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.points.iter().map(|point| point.count).sum()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|point| point.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|point| point.date)
    }

    /// Maps every point into a `width` x `height` box with the origin at the
    /// top-left corner. Dates are spaced evenly; counts scale to the maximum.
    pub fn plot(&self, width: f64, height: f64) -> Vec<(f64, f64)> {
        let max = self.max_count();
        let last_index = self.points.len().saturating_sub(1);
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let x = if last_index == 0 {
                    width / 2.0
                } else {
                    width * index as f64 / last_index as f64
                };
                let y = if max == 0 {
                    height
                } else {
                    height - height * point.count as f64 / max as f64
                };
                (x, y)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, count: u64) -> TrendPoint {
        TrendPoint {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date"),
            count,
        }
    }

    #[test]
    fn new_orders_points_by_date() {
        let series = TrendSeries::new(vec![
            point("2024-03-03", 1),
            point("2024-03-01", 5),
            point("2024-03-02", 2),
        ]);
        let dates: Vec<String> = series
            .points()
            .iter()
            .map(|p| p.date.format("%Y-%m-%d").to_string())
            .collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-03-02", "2024-03-03"]);
        assert_eq!(series.max_count(), 5);
        assert_eq!(series.total(), 8);
    }

    #[test]
    fn plot_spans_full_width_and_scales_to_max() {
        let series = TrendSeries::new(vec![
            point("2024-03-01", 0),
            point("2024-03-02", 5),
            point("2024-03-03", 10),
        ]);
        let coords = series.plot(100.0, 50.0);
        assert_eq!(coords, vec![(0.0, 50.0), (50.0, 25.0), (100.0, 0.0)]);
    }

    #[test]
    fn plot_centers_a_single_point() {
        let series = TrendSeries::new(vec![point("2024-03-01", 4)]);
        assert_eq!(series.plot(200.0, 80.0), vec![(100.0, 0.0)]);
    }

    #[test]
    fn empty_series_has_no_geometry() {
        let series = TrendSeries::new(Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.max_count(), 0);
        assert!(series.plot(100.0, 50.0).is_empty());
        assert!(series.first_date().is_none());
    }
}
