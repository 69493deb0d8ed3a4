use std::{convert::Infallible, marker::PhantomData};

use crate::{Descendible, DirectionProvider};

/// Adapter that turns an infallible loss closure into a [`Descendible`].
///
/// Directions, addition, and clamping come from the input type's
/// [`DirectionProvider`] impl.
///
/// ```
/// use descent_core::{Descendible, LossFn};
///
/// let parabola = LossFn::new(|x: &f32| (x - 3.0).powi(2));
/// assert_eq!(parabola.loss(&3.0), Ok(0.0));
/// ```
pub struct LossFn<T, F> {
    loss: F,
    _input: PhantomData<fn(&T)>,
}

impl<T, F> LossFn<T, F>
where
    T: DirectionProvider,
    F: Fn(&T) -> f32,
{
    /// Wraps `loss`.
    pub fn new(loss: F) -> Self {
        Self {
            loss,
            _input: PhantomData,
        }
    }
}

impl<T, F> Descendible for LossFn<T, F>
where
    T: DirectionProvider,
    F: Fn(&T) -> f32,
{
    type Input = T;
    type Error = Infallible;

    fn loss(&self, input: &T) -> Result<f32, Self::Error> {
        Ok((self.loss)(input))
    }

    fn directions(&self, epsilon: &T) -> Vec<T> {
        T::directions(*epsilon)
    }

    fn add(&self, a: &T, b: &T) -> T {
        a.add(*b)
    }

    fn clamp(&self, value: &T, min: &T, max: &T) -> T {
        value.clamp(*min, *max)
    }

    fn bounds_ordered(&self, min: &T, max: &T) -> bool {
        T::is_ordered(*min, *max)
    }
}

/// Adapter that turns a fallible loss closure into a [`Descendible`].
///
/// Use this when the loss can fail, for example when it runs a simulation
/// that may diverge. The closure's error becomes the contract's error and is
/// handed back unchanged by the solver.
pub struct TryLossFn<T, F, E> {
    loss: F,
    _marker: PhantomData<fn(&T) -> E>,
}

impl<T, F, E> TryLossFn<T, F, E>
where
    T: DirectionProvider,
    F: Fn(&T) -> Result<f32, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    /// Wraps `loss`.
    pub fn new(loss: F) -> Self {
        Self {
            loss,
            _marker: PhantomData,
        }
    }
}

impl<T, F, E> Descendible for TryLossFn<T, F, E>
where
    T: DirectionProvider,
    F: Fn(&T) -> Result<f32, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Input = T;
    type Error = E;

    fn loss(&self, input: &T) -> Result<f32, E> {
        (self.loss)(input)
    }

    fn directions(&self, epsilon: &T) -> Vec<T> {
        T::directions(*epsilon)
    }

    fn add(&self, a: &T, b: &T) -> T {
        a.add(*b)
    }

    fn clamp(&self, value: &T, min: &T, max: &T) -> T {
        value.clamp(*min, *max)
    }

    fn bounds_ordered(&self, min: &T, max: &T) -> bool {
        T::is_ordered(*min, *max)
    }
}
