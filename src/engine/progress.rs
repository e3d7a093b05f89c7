/// Where the engine reads scroll position and scrollable extent from.
pub trait ProgressSource {
    /// Pixels scrolled from the top of the document.
    fn current_scroll(&self) -> f64;

    /// Total scrollable distance: document height minus viewport height.
    fn max_scroll(&self) -> f64;

    fn viewport_height(&self) -> f64;
}

/// Fixed readings, for exercising the engine without a browser.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedProgress {
    pub scroll: f64,
    pub max: f64,
    pub viewport: f64,
}

#[cfg(test)]
impl ProgressSource for FixedProgress {
    fn current_scroll(&self) -> f64 {
        self.scroll
    }

    fn max_scroll(&self) -> f64 {
        self.max
    }

    fn viewport_height(&self) -> f64 {
        self.viewport
    }
}

