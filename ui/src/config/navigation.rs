use serde::Deserialize;
use std::time::Duration;

/// Which section wins when several cross the threshold in one batch.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// The last entry of the batch in document order.
    #[default]
    Last,
    /// The intersecting section closest to the top of the page.
    Topmost,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct NavigationConfig {
    active_threshold: Option<f32>,
    tie_break: Option<TieBreak>,
    hide_on_scroll_rows: Option<u16>,
    scrolled_rows: Option<u16>,
    smooth_scroll_ms: Option<u64>,
    page_overlap_rows: Option<u16>,
}

impl NavigationConfig {
    /// Visible fraction a section needs to become the active one.
    pub fn active_threshold(&self) -> f32 {
        self.active_threshold.unwrap_or(0.5)
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break.unwrap_or_default()
    }

    /// Scrolling down past this offset hides the navbar.
    pub fn hide_on_scroll_rows(&self) -> u16 {
        self.hide_on_scroll_rows.unwrap_or(4)
    }

    /// Offset after which the navbar draws its background.
    pub fn scrolled_rows(&self) -> u16 {
        self.scrolled_rows.unwrap_or(2)
    }

    pub fn smooth_scroll(&self) -> Duration {
        Duration::from_millis(self.smooth_scroll_ms.unwrap_or(500))
    }

    /// Rows kept on screen when paging.
    pub fn page_overlap_rows(&self) -> u16 {
        self.page_overlap_rows.unwrap_or(2)
    }
}
