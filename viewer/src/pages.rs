#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use serde::{Deserialize, Serialize};

/// One-based page position within a document of `total` pages.
///
/// `current` stays within `[1, total]`; with no pages it stays at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    pub current: u32,
    pub total: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { current: 1, total: 0 }
    }
}

impl PageCursor {
    /// Adopt the page count reported by the renderer, re-clamping `current`.
    pub fn set_total(&mut self, total: u32) {
        self.total = total;
        self.current = self.clamp(self.current);
    }

    /// Step back one page. Returns whether `current` changed.
    pub fn previous(&mut self) -> bool {
        self.go_to(self.current.saturating_sub(1))
    }

    /// Step forward one page. Returns whether `current` changed.
    pub fn next(&mut self) -> bool {
        self.go_to(self.current.saturating_add(1))
    }

    /// Jump to `page`, clamped. Returns whether `current` changed.
    pub fn go_to(&mut self, page: u32) -> bool {
        let target = self.clamp(page);
        if target == self.current {
            return false;
        }
        self.current = target;
        true
    }

    /// Zero-based index of the current page, for renderer calls.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.current.saturating_sub(1)
    }

    /// Human-readable position, e.g. `Page 2 of 7`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.total)
    }

    fn clamp(&self, page: u32) -> u32 {
        if self.total == 0 { 1 } else { page.clamp(1, self.total) }
    }
}
