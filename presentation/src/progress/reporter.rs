//! Progress reporting for pipeline runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tailor_application::ProgressNotifier;
use tailor_domain::ProgressEvent;

/// Reports progress as a single percentage bar on stderr
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(Self::bar_style());
        bar.set_prefix("tailor");
        bar.set_message("Starting...");
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    /// Leave the bar where it stopped, marked as failed.
    pub fn abandon(&self) {
        if !self.bar.is_finished() {
            self.bar.abandon_with_message(format!("{}", "failed".red()));
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_progress(&self, event: &ProgressEvent) {
        self.bar.set_position(u64::from(event.percent));
        if event.percent >= 100 {
            self.bar
                .finish_with_message(format!("{}", event.stage_label.green()));
        } else {
            self.bar.set_message(event.stage_label.clone());
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SimpleProgress {
    fn line(event: &ProgressEvent) -> String {
        format!("[{:>3}%] {}", event.percent, event.stage_label)
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_progress(&self, event: &ProgressEvent) {
        if event.percent >= 100 {
            eprintln!("{} {}", "v".green(), Self::line(event));
        } else {
            eprintln!("{} {}", "->".cyan(), Self::line(event));
        }
    }
}
