//! Deliverable counter on stderr, kept off stdout so reports can be piped

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "{spinner:.cyan} {msg:24} [{bar:30.cyan/blue}] {pos}/{len}";

/// Counts deliverables as the reconciler reads them
pub struct Progress {
    visible: bool,
    bar: Option<ProgressBar>,
}

impl Progress {
    pub fn new(visible: bool) -> Self {
        Self { visible, bar: None }
    }

    /// Never draws; used for non-terminals, `--quiet` and tests
    pub fn hidden() -> Self {
        Self::new(false)
    }

    /// Begin counting `total` deliverables
    pub fn begin(&mut self, total: usize) {
        if !self.visible {
            return;
        }

        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("█▓▒░"));
        }
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    /// Show the project currently being reconciled
    pub fn project(&self, name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(name.to_string());
        }
    }

    pub fn advance(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Remove the bar before the report is written
    pub fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
