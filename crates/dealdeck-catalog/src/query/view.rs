//! The load-more pagination window.

use serde::{Deserialize, Serialize};

/// Default number of deals revealed per "load more".
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// A presentation-owned cursor over the derived view.
///
/// The engine has no notion of pages; the window just tracks how many items
/// of the ordered view are currently revealed and slices a prefix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewWindow {
    page_size: usize,
    visible: usize,
}

impl ViewWindow {
    /// Window revealing one page of the given size.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            visible: page_size,
        }
    }

    /// Number of items currently revealed.
    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Reveal one more page.
    pub fn load_more(&mut self) {
        self.visible += self.page_size;
    }

    /// Shrink back to a single page (e.g., after the filters change).
    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    /// Whether more items remain beyond the window.
    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// The revealed prefix of an ordered view.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.visible.min(items.len());
        &items[..end]
    }
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
