use dashboard_application::{DashboardSnapshot, FormFeedback, GuildConfigForm};
use dashboard_domain::{AccountFlag, TrendSeries};

use crate::views::escape::escape_html;
use crate::views::trend_chart::{render_trend_chart, render_trend_table};

pub const PAGE_TITLE: &str = "Alt Detection Dashboard";

pub struct DashboardView<'a> {
    pub snapshot: &'a DashboardSnapshot,
    pub feedback: Option<&'a FormFeedback>,
    /// Values to put back into the form, used after a rejected submit.
    pub form: Option<&'a GuildConfigForm>,
    pub chart_width: u32,
    pub chart_height: u32,
}

pub fn render_dashboard(view: &DashboardView<'_>) -> String {
    let stats = &view.snapshot.stats;
    let mut cards = metric_card("Total Players", stats.total_players);
    for flag in AccountFlag::ALL {
        cards.push_str(&metric_card(flag.label(), stats.flag_count(flag)));
    }

    let series = TrendSeries::new(view.snapshot.trend.clone());
    let trend = if series.is_empty() {
        render_trend_chart(&series, view.chart_width, view.chart_height)
    } else {
        format!(
            "{}\n{}",
            render_trend_chart(&series, view.chart_width, view.chart_height),
            render_trend_table(&series)
        )
    };

    let feedback = view
        .feedback
        .map(|feedback| {
            let class = if feedback.is_error() {
                "notice notice-error"
            } else {
                "notice notice-success"
            };
            format!(
                "<div class=\"{}\" role=\"status\">{}</div>",
                class,
                escape_html(feedback.message())
            )
        })
        .unwrap_or_default();

    let (guild_id, server_name) = view
        .form
        .map(|form| (escape_html(&form.guild_id), escape_html(&form.server_name)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title}</title>
<style>
:root {{
  --ink: #0f172a;
  --muted: #64748b;
  --border: #e2e8f0;
  --accent: #2563eb;
  --ok: #16a34a;
  --bad: #dc2626;
}}
* {{ box-sizing: border-box; }}
body {{
  margin: 0;
  font-family: "IBM Plex Sans", "Source Sans 3", sans-serif;
  background: #f8fafc;
  color: var(--ink);
}}
.page {{ max-width: 1100px; margin: 0 auto; padding: 32px 20px 48px; }}
h1 {{ margin: 0 0 24px; font-size: 28px; }}
h2 {{ margin: 32px 0 12px; font-size: 20px; }}
.summary {{
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 12px;
}}
.card {{
  background: #ffffff;
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 16px 18px;
}}
.card .label {{
  font-size: 11px;
  text-transform: uppercase;
  letter-spacing: 0.12em;
  color: var(--muted);
}}
.card .value {{ font-size: 26px; font-weight: 700; margin-top: 6px; font-variant-numeric: tabular-nums; }}
.chart {{ max-width: 100%; height: auto; background: #ffffff; border: 1px solid var(--border); border-radius: 12px; }}
.chart .axis {{ stroke: #cbd5e1; stroke-width: 1; }}
.chart .line {{ stroke: var(--accent); stroke-width: 2; }}
.chart circle {{ fill: var(--accent); }}
.chart .tick {{ font-size: 11px; fill: var(--muted); }}
.empty {{ color: var(--muted); }}
.table {{ border-collapse: collapse; font-size: 14px; margin-top: 8px; }}
.table th, .table td {{ padding: 6px 12px; border-bottom: 1px solid var(--border); text-align: left; }}
.table .count {{ text-align: right; font-variant-numeric: tabular-nums; }}
.form {{ display: grid; gap: 12px; max-width: 420px; }}
.form label {{ display: grid; gap: 4px; font-size: 14px; }}
.form input {{ padding: 8px 10px; border: 1px solid var(--border); border-radius: 8px; font-size: 14px; }}
.form button {{ padding: 10px 14px; border: none; border-radius: 8px; background: var(--accent); color: #ffffff; font-size: 14px; cursor: pointer; }}
.notice {{ padding: 10px 14px; border-radius: 8px; margin-bottom: 12px; max-width: 420px; }}
.notice-success {{ background: #dcfce7; color: var(--ok); }}
.notice-error {{ background: #fee2e2; color: var(--bad); }}
</style>
</head>
<body>
<div class="page">
  <h1>{title}</h1>

  <section>
    <h2>Summary Statistics</h2>
    <div class="summary">
      {cards}
    </div>
  </section>

  <section>
    <h2>Alt Detection Trends</h2>
    {trend}
  </section>

  <section>
    <h2>Manage Guild Configurations</h2>
    {feedback}
    <form class="form" method="post" action="/guild-config">
      <label>Guild ID
        <input type="text" name="guild_id" value="{guild_id}" title="Enter the guild ID" />
      </label>
      <label>New Server Name
        <input type="text" name="server_name" value="{server_name}" title="Enter the new server name" />
      </label>
      <button type="submit">Update Configuration</button>
    </form>
  </section>
</div>
</body>
</html>"#,
        title = PAGE_TITLE,
        cards = cards,
        trend = trend,
        feedback = feedback,
        guild_id = guild_id,
        server_name = server_name,
    )
}

fn metric_card(label: &str, value: u64) -> String {
    format!(
        "<div class=\"card\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>",
        escape_html(label),
        value
    )
}
