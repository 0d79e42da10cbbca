use dashboard_domain::TrendSeries;

use crate::views::escape::escape_html;

pub const NO_TREND_MESSAGE: &str = "No trend data available";

const PAD_LEFT: u32 = 48;
const PAD_RIGHT: u32 = 16;
const PAD_TOP: u32 = 16;
const PAD_BOTTOM: u32 = 32;

/// Inline SVG line chart of daily counts, or the empty-state message.
pub fn render_trend_chart(series: &TrendSeries, width: u32, height: u32) -> String {
    if series.is_empty() {
        return format!("<p class=\"empty\">{}</p>", NO_TREND_MESSAGE);
    }

    let plot_width = width.saturating_sub(PAD_LEFT + PAD_RIGHT).max(1);
    let plot_height = height.saturating_sub(PAD_TOP + PAD_BOTTOM).max(1);
    let left = f64::from(PAD_LEFT);
    let top = f64::from(PAD_TOP);
    let bottom = top + f64::from(plot_height);
    let right = left + f64::from(plot_width);

    let coords: Vec<(f64, f64)> = series
        .plot(f64::from(plot_width), f64::from(plot_height))
        .into_iter()
        .map(|(x, y)| (x + left, y + top))
        .collect();

    let polyline = coords
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ");

    let mut markers = String::new();
    for ((x, y), point) in coords.iter().zip(series.points()) {
        markers.push_str(&format!(
            "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"3\"><title>{date}: {count}</title></circle>",
            x = x,
            y = y,
            date = point.date,
            count = point.count,
        ));
    }

    let first = series.first_date().map(|d| d.to_string()).unwrap_or_default();
    let last = series.last_date().map(|d| d.to_string()).unwrap_or_default();

    format!(
        r#"<svg class="chart" viewBox="0 0 {width} {height}" width="{width}" height="{height}" role="img" aria-label="Daily player history events">
<line class="axis" x1="{left:.1}" y1="{top:.1}" x2="{left:.1}" y2="{bottom:.1}" />
<line class="axis" x1="{left:.1}" y1="{bottom:.1}" x2="{right:.1}" y2="{bottom:.1}" />
<text class="tick" x="{tick_x:.1}" y="{top_label:.1}" text-anchor="end">{max}</text>
<text class="tick" x="{tick_x:.1}" y="{bottom:.1}" text-anchor="end">0</text>
<text class="tick" x="{left:.1}" y="{date_y:.1}" text-anchor="start">{first}</text>
<text class="tick" x="{right:.1}" y="{date_y:.1}" text-anchor="end">{last}</text>
<polyline class="line" fill="none" points="{polyline}" />
{markers}
</svg>"#,
        width = width,
        height = height,
        left = left,
        top = top,
        bottom = bottom,
        right = right,
        tick_x = left - 6.0,
        top_label = top + 4.0,
        date_y = bottom + 20.0,
        max = series.max_count(),
        first = escape_html(&first),
        last = escape_html(&last),
        polyline = polyline,
        markers = markers,
    )
}

pub fn render_trend_table(series: &TrendSeries) -> String {
    let mut rows = String::new();
    for point in series.points() {
        rows.push_str(&format!(
            "<tr><td class=\"date\">{}</td><td class=\"count\">{}</td></tr>",
            point.date, point.count
        ));
    }
    format!(
        "<details class=\"trend-table\"><summary>Daily counts ({days} days, {total} events)</summary>\
<table class=\"table\"><thead><tr><th>Date</th><th>Count</th></tr></thead><tbody>{rows}</tbody></table></details>",
        days = series.len(),
        total = series.total(),
        rows = rows,
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dashboard_domain::TrendPoint;

    use super::*;

    fn series(points: &[(&str, u64)]) -> TrendSeries {
        TrendSeries::new(
            points
                .iter()
                .map(|(date, count)| TrendPoint {
                    date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date"),
                    count: *count,
                })
                .collect(),
        )
    }

    #[test]
    fn empty_series_renders_message() {
        let html = render_trend_chart(&TrendSeries::default(), 720, 240);
        assert!(html.contains(NO_TREND_MESSAGE));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn chart_has_one_marker_per_day_and_date_labels() {
        let html = render_trend_chart(
            &series(&[("2024-01-01", 3), ("2024-01-02", 1), ("2024-01-03", 6)]),
            720,
            240,
        );
        assert!(html.contains("<polyline"));
        assert_eq!(html.matches("<circle").count(), 3);
        assert!(html.contains(">2024-01-01</text>"));
        assert!(html.contains(">2024-01-03</text>"));
        assert!(html.contains(">6</text>"));
        assert!(html.contains("<title>2024-01-02: 1</title>"));
    }

    #[test]
    fn tiny_dimensions_do_not_underflow() {
        let html = render_trend_chart(&series(&[("2024-01-01", 2)]), 10, 10);
        assert!(html.contains("<svg"));
    }

    #[test]
    fn table_lists_days_in_order() {
        let html = render_trend_table(&series(&[("2024-01-02", 2), ("2024-01-01", 5)]));
        let first = html.find("2024-01-01").expect("first day");
        let second = html.find("2024-01-02").expect("second day");
        assert!(first < second);
        assert!(html.contains("2 days, 7 events"));
    }
}
