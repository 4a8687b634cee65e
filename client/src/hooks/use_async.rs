//! Generic async-state hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page hands over a thunk that builds a future and a closure returning its
//! watched inputs. The hook runs the thunk on mount and again whenever the
//! inputs compare unequal to those of the previous run, exposing the latest
//! run's `AsyncState`.
//!
//! TRADE-OFFS
//! ==========
//! In-flight runs are never aborted. `RunTracker` drops their results instead,
//! so the signal only ever reflects the most recently started run.

#[cfg(test)]
#[path = "use_async_test.rs"]
mod use_async_test;

use std::future::Future;

use leptos::prelude::*;

use crate::state::async_state::AsyncState;
use crate::state::run_tracker::RunTracker;

/// Options accepted by [`use_async`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AsyncOptions {
    /// Skip the run on mount. Runs start on input change or `refetch`.
    pub manual: bool,
}

/// Handle returned by [`use_async`].
pub struct AsyncResource<T, E> {
    state: ReadSignal<AsyncState<T, E>>,
    nonce: RwSignal<u64>,
}

impl<T, E> Clone for AsyncResource<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for AsyncResource<T, E> {}

impl<T, E> AsyncResource<T, E>
where
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    pub fn state(&self) -> AsyncState<T, E>
    where
        T: Clone,
        E: Clone,
    {
        self.state.get()
    }

    pub fn data(&self) -> Option<T>
    where
        T: Clone,
    {
        self.state.with(|s| s.data.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<E>
    where
        E: Clone,
    {
        self.state.with(|s| s.error.clone())
    }

    /// Start a fresh run with the current inputs.
    pub fn refetch(&self) {
        self.nonce.update(|n| *n = n.wrapping_add(1));
    }
}

/// Run `operation` on mount and whenever `deps()` changes.
pub fn use_async<T, E, D, F, Fut>(
    operation: F,
    options: AsyncOptions,
    deps: impl Fn() -> D + 'static,
) -> AsyncResource<T, E>
where
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
    D: PartialEq + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let initial = if options.manual { AsyncState::default() } else { AsyncState::pending() };
    let state = RwSignal::new(initial);
    let nonce = RwSignal::new(0_u64);
    let tracker = RunTracker::new(state);

    Effect::new(move |prev: Option<(D, u64)>| {
        let key = (deps(), nonce.get());
        let should_run = match &prev {
            None => !options.manual,
            Some(prev) => *prev != key,
        };
        if should_run {
            let run = tracker.start(operation());
            leptos::task::spawn_local(async move {
                run.await;
            });
        }
        key
    });

    AsyncResource { state: state.read_only(), nonce }
}
