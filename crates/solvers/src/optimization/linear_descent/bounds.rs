/// Inclusive, per-component range every step candidate is clamped into.
///
/// The starting point is not clamped. `min <= max` must hold component-wise;
/// contracts that can check it report [`Error::InvalidBounds`] up front.
///
/// [`Error::InvalidBounds`]: super::Error::InvalidBounds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<T> {
    /// The lower corner.
    pub min: T,

    /// The upper corner.
    pub max: T,
}

impl<T> Bounds<T> {
    /// Creates bounds from a lower and upper corner.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}
