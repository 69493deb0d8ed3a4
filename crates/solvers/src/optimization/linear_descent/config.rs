/// Configuration for the linear descent solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Config {
    /// Creates a config that allows at most `max_iters` descent steps.
    ///
    /// A budget of zero returns the starting point unchanged.
    #[must_use]
    pub const fn new(max_iters: usize) -> Self {
        Self { max_iters }
    }

    /// Returns the maximum number of descent steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
