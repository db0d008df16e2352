#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Specials-carousel position: the leftmost visible item and how many items
/// fit in the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub items_per_view: usize,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            index: 0,
            items_per_view: 3,
        }
    }
}

impl CarouselState {
    /// Highest reachable index for a list of `item_count` items.
    pub fn max_index(&self, item_count: usize) -> usize {
        item_count.saturating_sub(self.items_per_view)
    }

    /// Step one item back, stopping at the start.
    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Step one item forward, stopping at the last full window.
    pub fn next(&mut self, item_count: usize) {
        self.index = (self.index + 1).min(self.max_index(item_count));
    }

    /// Jump to a dot indicator's position, clamped to the valid range.
    pub fn go_to(&mut self, index: usize, item_count: usize) {
        self.index = index.min(self.max_index(item_count));
    }

    /// Adopt the items-per-view for a viewport width and re-clamp the index,
    /// so widening the window never leaves a dangling offset.
    pub fn set_viewport_width(&mut self, width: f64, item_count: usize) {
        self.items_per_view = items_per_view_for(width);
        self.index = self.index.min(self.max_index(item_count));
    }
}

/// Responsive breakpoints: 1 item on phones, 2 on tablets, 3 on desktop.
fn items_per_view_for(width: f64) -> usize {
    if width <= 480.0 {
        1
    } else if width <= 768.0 {
        2
    } else {
        3
    }
}
