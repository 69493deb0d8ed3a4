/// Actions an observer can take during linear descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the best point found so far.
    ///
    /// A step candidate reported in the same event is not adopted.
    StopEarly,

    /// Treat this point as worse than the current best.
    ///
    /// - On [`Event::Stepped`], the step is rejected and the search ends as if
    ///   the loss had gone up.
    /// - On [`Event::LossFailed`], the failure is absorbed instead of returned:
    ///   a failed probe is skipped during the direction scan, and a failed step
    ///   candidate is rejected.
    ///
    /// [`Event::Stepped`]: super::Event::Stepped
    /// [`Event::LossFailed`]: super::Event::LossFailed
    AssumeWorse,
}
