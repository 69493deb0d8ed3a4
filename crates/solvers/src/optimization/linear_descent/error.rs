/// Errors that can occur during linear descent.
///
/// `E` is the contract's loss error, returned unchanged in [`Error::Loss`].
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    /// The loss function failed and the observer did not absorb the failure.
    #[error("loss evaluation failed")]
    Loss(#[source] E),

    /// The contract produced no directions for the given epsilon.
    #[error("no descent directions for the given epsilon")]
    NoDirections,

    /// A lower bound exceeds its upper bound.
    #[error("lower bound exceeds upper bound")]
    InvalidBounds,
}
