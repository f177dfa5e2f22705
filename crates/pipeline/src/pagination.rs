//! Growable prefix over the ordered result list ("load more").

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Tracks how much of the result list is exposed to the renderer.
///
/// `visible_count` is session-only state: it is reset whenever the query
/// changes and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationWindow {
    page_size: usize,
    visible_count: usize,
}

impl PaginationWindow {
    /// Create a window showing one page. A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible_count: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Grow by one page, capped at `total`. Never shrinks the window.
    ///
    /// Returns the new visible count.
    pub fn load_more(&mut self, total: usize) -> usize {
        let grown = self.visible_count.saturating_add(self.page_size).min(total);
        self.visible_count = self.visible_count.max(grown);
        self.visible_count
    }

    /// Back to a single page
    pub fn reset(&mut self) {
        self.visible_count = self.page_size;
    }

    /// Whether `load_more` would expose anything new
    pub fn has_more(&self, total: usize) -> bool {
        self.visible_count < total
    }

    /// The visible prefix of `items`
    pub fn window<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        &items[..self.visible_count.min(items.len())]
    }
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
