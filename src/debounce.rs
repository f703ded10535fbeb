use std::time::{Duration, Instant};


/// Runs `f` only if `predicate` holds for `target`.
pub fn debounce_until<T: ?Sized, R>(
    target: &mut T,
    predicate: impl FnOnce(&T) -> bool,
    f: impl FnOnce(&mut T) -> R,
) -> Option<R> {
    if predicate(target) {
        Some(f(target))
    } else {
        None
    }
}

/// Trailing debounce over an externally supplied clock.
///
/// Each [`call`](Self::call) replaces the pending arguments and restarts the delay.
/// [`poll`](Self::poll) yields the last arguments once the delay has elapsed
/// without another call.
#[derive(Debug)]
pub struct Debounce<A> {
    delay: Duration,
    pending: Option<Pending<A>>,
}

#[derive(Debug)]
struct Pending<A> {
    deadline: Instant,
    args: A,
}

impl<A> Debounce<A> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn call(&mut self, args: A, now: Instant) {
        if self.pending.is_some() {
            tracing::trace!("debounce: pending call replaced");
        }
        self.pending = Some(Pending {
            deadline: now + self.delay,
            args,
        });
    }

    pub fn poll(&mut self, now: Instant) -> Option<A> {
        if self.pending.as_ref()?.deadline <= now {
            self.pending.take().map(|p| p.args)
        } else {
            None
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|p| p.args)
    }
}
