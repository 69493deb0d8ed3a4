/// Receives solver events and optionally steers the solver.
///
/// `observe` returns `None` to let the solver carry on, or `Some(action)` to
/// request one of the solver's actions (stop early, discard a point, ...).
/// Each solver defines its own event and action types.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is
/// an observer that never acts. Stateful observers that should outlive the
/// solve usually implement the trait for `&mut Self` as well.
pub trait Observer<E, A> {
    /// Handles one event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Act {
        Stop,
    }

    fn drive<O: Observer<u32, Act>>(mut observer: O, events: &[u32]) -> Option<Act> {
        events.iter().find_map(|e| observer.observe(e))
    }

    #[test]
    fn unit_never_acts() {
        assert_eq!(drive((), &[1, 2, 3]), None);
    }

    #[test]
    fn closure_can_act() {
        let mut seen = Vec::new();
        let action = drive(
            |e: &u32| {
                seen.push(*e);
                (*e == 2).then_some(Act::Stop)
            },
            &[1, 2, 3],
        );

        assert_eq!(action, Some(Act::Stop));
        assert_eq!(seen, [1, 2]);
    }
}
