/// Receives stepper events and optionally returns a control action.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is a
/// no-op observer that never acts.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
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

    #[test]
    fn unit_never_acts() {
        let mut obs = ();
        let action: Option<bool> = obs.observe(&1.0_f64);
        assert!(action.is_none());
    }

    #[test]
    fn closure_sees_every_event() {
        let mut seen = Vec::new();
        let mut obs = |event: &u32| {
            seen.push(*event);
            (*event == 2).then_some("stop")
        };

        assert_eq!(obs.observe(&1_u32), None);
        assert_eq!(obs.observe(&2_u32), Some("stop"));
        assert_eq!(seen, vec![1, 2]);
    }
}
