//! Tracker construction options.

/// Options applied when a [`PositionTracker`](crate::PositionTracker) is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Number of line-end slots reserved up front.
    ///
    /// The index grows past this on demand; the reservation only avoids
    /// early reallocations for typical documents.
    pub initial_line_capacity: usize,
}

impl TrackerConfig {
    /// Default number of reserved line-end slots.
    pub const DEFAULT_LINE_CAPACITY: usize = 500;

    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of line-end slots reserved up front.
    #[must_use]
    pub fn with_initial_line_capacity(mut self, capacity: usize) -> Self {
        self.initial_line_capacity = capacity;
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            initial_line_capacity: Self::DEFAULT_LINE_CAPACITY,
        }
    }
}
