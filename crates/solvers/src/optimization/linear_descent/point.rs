/// An input with its evaluated loss.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    /// The evaluated input.
    pub input: T,

    /// The loss at `input`.
    pub loss: f32,
}

impl<T> Point<T> {
    /// Creates a new point.
    #[must_use]
    pub fn new(input: T, loss: f32) -> Self {
        Self { input, loss }
    }

    /// Returns `true` if `loss` does not make this point worse.
    ///
    /// Equal losses count as no worse, so plateaus are walked. A `NaN` loss
    /// is always worse, and any other loss improves on a `NaN` best.
    pub(super) fn admits(&self, loss: f32) -> bool {
        loss <= self.loss || (self.loss.is_nan() && !loss.is_nan())
    }
}
