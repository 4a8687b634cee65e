//! Latest-run-wins bookkeeping for re-runnable async pipelines.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hooks re-run their pipeline whenever watched inputs change, but nothing
//! aborts work already in flight. Each run captures a `RunTicket` when it
//! starts; its result is written only if no newer run has started since.
//!
//! The tracker writes through `StateSink`, so the same logic drives a Leptos
//! signal in the browser and a plain `RefCell` in tests.

#[cfg(test)]
#[path = "run_tracker_test.rs"]
mod run_tracker_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::{RwSignal, Update};

use super::async_state::AsyncState;

/// Identifies one started run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunTicket(u64);

/// Shared monotonically increasing run counter.
#[derive(Clone, Debug, Default)]
pub struct RunGeneration(Arc<AtomicU64>);

impl RunGeneration {
    /// Start a new run, superseding every earlier ticket.
    pub fn begin(&self) -> RunTicket {
        RunTicket(self.0.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: RunTicket) -> bool {
        self.0.load(Ordering::Acquire) == ticket.0
    }
}

/// Somewhere an `AsyncState` can be mutated in place.
pub trait StateSink<T, E> {
    fn apply(&self, f: impl FnOnce(&mut AsyncState<T, E>));
}

impl<T, E> StateSink<T, E> for Rc<RefCell<AsyncState<T, E>>> {
    fn apply(&self, f: impl FnOnce(&mut AsyncState<T, E>)) {
        f(&mut self.borrow_mut());
    }
}

impl<T, E> StateSink<T, E> for RwSignal<AsyncState<T, E>>
where
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    fn apply(&self, f: impl FnOnce(&mut AsyncState<T, E>)) {
        Update::update(self, f);
    }
}

/// Runs futures against a sink, reporting only the most recently started one.
#[derive(Clone, Debug)]
pub struct RunTracker<S> {
    generation: RunGeneration,
    sink: S,
}

impl<S> RunTracker<S> {
    pub fn new(sink: S) -> Self {
        Self { generation: RunGeneration::default(), sink }
    }

    /// Begin a run and return the future that settles it.
    ///
    /// The state flips to loading immediately, before the returned future is
    /// first polled. The future resolves to `true` when its result was applied
    /// and `false` when a newer run had already started.
    pub fn start<T, E, Fut>(&self, fut: Fut) -> impl Future<Output = bool> + use<S, T, E, Fut>
    where
        S: StateSink<T, E> + Clone,
        Fut: Future<Output = Result<T, E>>,
    {
        let ticket = self.generation.begin();
        self.sink.apply(AsyncState::begin);

        let generation = self.generation.clone();
        let sink = self.sink.clone();
        async move {
            let result = fut.await;
            if !generation.is_current(ticket) {
                log::debug!("discarding result of superseded run {ticket:?}");
                return false;
            }
            sink.apply(|state| state.settle(result));
            true
        }
    }
}
