//! Progress display for the incremental fill loop

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FILL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Tiles: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single-run progress bar over the board's tile count
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no visible bar yet
    #[must_use]
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Show the bar sized to the number of tiles to place
    pub fn initialize(&mut self, tile_count: usize) {
        let bar = ProgressBar::new(tile_count as u64);
        bar.set_style(FILL_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Report the current number of placed tiles
    pub fn update(&self, placed: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_position(placed as u64);
        }
    }

    /// Finish the bar with a closing message
    pub fn finish(&self, message: &str) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(message.to_string());
        }
    }
}
