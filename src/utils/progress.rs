// file: src/utils/progress.rs
// description: spinner shown while a view waits on its fetch
// reference: uses indicatif for progress reporting

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct LoadingSpinner {
    bar: ProgressBar,
}

impl LoadingSpinner {
    pub fn new(message: impl Into<String>, colored: bool) -> Self {
        let template = if colored {
            "{spinner:.green} {msg}"
        } else {
            "{spinner} {msg}"
        };
        let style = ProgressStyle::default_spinner()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    pub fn message(&self) -> String {
        self.bar.message()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for LoadingSpinner {
    fn drop(&mut self) {
        self.finish();
    }
}
