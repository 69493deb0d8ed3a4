use crate::{Descendible, direction};

/// Adapter that clamps only the masked components of a vector input.
///
/// Components whose mask entry is `false` are left free: the solver may move
/// them outside `[min, max]`. Everything else (loss, directions, addition) is
/// delegated to the wrapped contract.
///
/// ```
/// use descent_core::{Descendible, LossFn, PartialClamp};
///
/// let contract = PartialClamp::new(LossFn::new(|v: &[f32; 3]| v[1]), [true, false, true]);
/// let clamped = contract.clamp(&[2.0, 2.0, -2.0], &[-1.0; 3], &[1.0; 3]);
/// assert_eq!(clamped, [1.0, 2.0, -1.0]);
/// ```
pub struct PartialClamp<D, const N: usize> {
    inner: D,
    mask: [bool; N],
}

impl<D, const N: usize> PartialClamp<D, N>
where
    D: Descendible<Input = [f32; N]>,
{
    /// Wraps `inner`, clamping only components where `mask` is `true`.
    pub fn new(inner: D, mask: [bool; N]) -> Self {
        Self { inner, mask }
    }

    /// Returns the clamp mask.
    #[must_use]
    pub fn mask(&self) -> [bool; N] {
        self.mask
    }

    /// Returns the wrapped contract.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D, const N: usize> Descendible for PartialClamp<D, N>
where
    D: Descendible<Input = [f32; N]>,
{
    type Input = [f32; N];
    type Error = D::Error;

    fn loss(&self, input: &[f32; N]) -> Result<f32, Self::Error> {
        self.inner.loss(input)
    }

    fn directions(&self, epsilon: &[f32; N]) -> Vec<[f32; N]> {
        self.inner.directions(epsilon)
    }

    fn add(&self, a: &[f32; N], b: &[f32; N]) -> [f32; N] {
        self.inner.add(a, b)
    }

    fn clamp(&self, value: &[f32; N], min: &[f32; N], max: &[f32; N]) -> [f32; N] {
        direction::clamp_masked(*value, *min, *max, self.mask)
    }

    fn bounds_ordered(&self, min: &[f32; N], max: &[f32; N]) -> bool {
        direction::is_ordered_masked(*min, *max, self.mask)
    }
}
