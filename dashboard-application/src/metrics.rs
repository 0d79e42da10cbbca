use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    page_renders: AtomicU64,
    report_errors: AtomicU64,
    guild_updates: AtomicU64,
    guild_update_failures: AtomicU64,
    form_rejections: AtomicU64,
}

impl Metrics {
    pub fn record_page_render(&self) {
        self.page_renders.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_report_error(&self) {
        self.report_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_guild_update(&self) {
        self.guild_updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_guild_update_failure(&self) {
        self.guild_update_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_form_rejection(&self) {
        self.form_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn guild_updates(&self) -> u64 {
        self.guild_updates.load(Ordering::Relaxed)
    }

    pub fn form_rejections(&self) -> u64 {
        self.form_rejections.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let renders = self.page_renders.load(Ordering::Relaxed);
        let report_errors = self.report_errors.load(Ordering::Relaxed);
        let updates = self.guild_updates.load(Ordering::Relaxed);
        let update_failures = self.guild_update_failures.load(Ordering::Relaxed);
        let rejections = self.form_rejections.load(Ordering::Relaxed);

        format!(
            "# TYPE altwatch_page_renders_total counter\n\
altwatch_page_renders_total {}\n\
# TYPE altwatch_report_errors_total counter\n\
altwatch_report_errors_total {}\n\
# TYPE altwatch_guild_updates_total counter\n\
altwatch_guild_updates_total {}\n\
# TYPE altwatch_guild_update_failures_total counter\n\
altwatch_guild_update_failures_total {}\n\
# TYPE altwatch_form_rejections_total counter\n\
altwatch_form_rejections_total {}\n",
            renders, report_errors, updates, update_failures, rejections
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prometheus_output_reflects_counters() {
        let metrics = Metrics::default();
        metrics.record_page_render();
        metrics.record_page_render();
        metrics.record_guild_update_failure();
        let text = metrics.render_prometheus();
        assert!(text.contains("altwatch_page_renders_total 2\n"));
        assert!(text.contains("altwatch_guild_update_failures_total 1\n"));
        assert!(text.contains("altwatch_form_rejections_total 0\n"));
    }
}
