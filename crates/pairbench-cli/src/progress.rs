//! Progress bar observer.

use std::cell::RefCell;

use indicatif::{ProgressBar, ProgressStyle};
use pairbench_harness::{ProgressObserver, SummaryRow};
use tracing::debug;

use crate::output::{format_nanos, format_number};
use crate::ui;

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta}) {msg}";

/// Draws one progress bar per run on stderr, with the opening banner and
/// completion line on stdout.
#[derive(Default)]
pub struct BarObserver {
    bar: RefCell<Option<ProgressBar>>,
}

impl BarObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
    }
}

impl ProgressObserver for BarObserver {
    fn on_start(&self, name: &str, total: u64) {
        ui::print_banner(&format!("Running {name} tests..."));
        let bar = ProgressBar::new(total).with_style(Self::style());
        debug!(name, total, hidden = bar.is_hidden(), "progress bar started");
        *self.bar.borrow_mut() = Some(bar);
    }

    fn on_progress(&self, done: u64, _total: u64) {
        if let Some(bar) = self.bar.borrow().as_ref() {
            bar.set_position(done);
        }
    }

    fn on_size_complete(&self, row: &SummaryRow) {
        if let Some(bar) = self.bar.borrow().as_ref() {
            bar.set_message(format!(
                "n={} median {}",
                format_number(row.n),
                format_nanos(row.summary.median())
            ));
        }
    }

    fn on_finish(&self, name: &str) {
        if let Some(bar) = self.bar.borrow_mut().take() {
            bar.finish();
            debug!(name, position = bar.position(), "progress bar finished");
        }
        println!();
        ui::print_success(&format!("{name} done!"));
    }
}
