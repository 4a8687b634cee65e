//! Reported state of one asynchronous operation.
//!
//! DESIGN
//! ======
//! The triple mirrors what pages render: a value, a spinner flag, and an
//! error. `begin`/`settle` are the only transitions so every producer keeps
//! the same shape (at most one of `data`/`error` populated).

#[cfg(test)]
#[path = "async_state_test.rs"]
mod async_state_test;

/// `{ data, loading, error }` for the latest run of an async operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsyncState<T, E = String> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<E>,
}

impl<T, E> Default for AsyncState<T, E> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

impl<T, E> AsyncState<T, E> {
    /// State for an operation that is about to start.
    pub fn pending() -> Self {
        Self { data: None, loading: true, error: None }
    }

    /// Mark a new run as started. Previous data stays visible until settle.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of a run.
    pub fn settle(&mut self, result: Result<T, E>) {
        self.loading = false;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            Err(err) => {
                self.data = None;
                self.error = Some(err);
            }
        }
    }
}
