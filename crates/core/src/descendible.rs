/// Defines an input type and loss function that linear descent can minimize.
///
/// The solver never inspects the shape of [`Self::Input`]. Everything it
/// needs (the loss, the probe directions, vector addition, and clamping) goes
/// through this trait, so any numeric vector type can be optimized.
///
/// Most callers do not implement this trait by hand. Wrapping a closure in
/// [`LossFn`] or [`TryLossFn`] gives a contract backed by the
/// [`DirectionProvider`] impls for `f32` and `[f32; N]`, and [`PartialClamp`]
/// leaves selected axes unclamped.
///
/// [`LossFn`]: crate::LossFn
/// [`TryLossFn`]: crate::TryLossFn
/// [`PartialClamp`]: crate::PartialClamp
/// [`DirectionProvider`]: crate::DirectionProvider
pub trait Descendible {
    type Input: Clone;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the loss for `input`. Lower is better.
    ///
    /// The solver treats this as a black box and may call it many times per
    /// iteration, so it should be free of side effects.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the loss cannot be computed.
    fn loss(&self, input: &Self::Input) -> Result<f32, Self::Error>;

    /// Returns the probe directions for the step scale `epsilon`.
    ///
    /// Must be deterministic and must not contain the zero direction.
    fn directions(&self, epsilon: &Self::Input) -> Vec<Self::Input>;

    /// Returns `a + b`, component-wise.
    fn add(&self, a: &Self::Input, b: &Self::Input) -> Self::Input;

    /// Clamps `value` into `[min, max]`, component-wise.
    fn clamp(&self, value: &Self::Input, min: &Self::Input, max: &Self::Input) -> Self::Input;

    /// Returns `true` if `min` and `max` form a usable range.
    ///
    /// The default implementation does not check anything. Override it when
    /// the input type has a meaningful component-wise ordering so the solver
    /// can reject reversed bounds before evaluating any loss.
    fn bounds_ordered(&self, _min: &Self::Input, _max: &Self::Input) -> bool {
        true
    }
}
