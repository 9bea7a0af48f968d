//! One-time initialization cell for shared connection handles
//!
//! `ConnectionCell` wraps [`tokio::sync::OnceCell`] so that concurrent first
//! callers run a single construction future while every other caller waits
//! for it and then observes the same value. The cell never hands out a
//! partially built value and has no path to replace one once it is set.

use std::future::Future;

use tokio::sync::OnceCell;

use crate::error::{Error, Result};

/// A process-wide slot holding a lazily constructed handle
#[derive(Debug)]
pub struct ConnectionCell<T> {
    inner: OnceCell<T>,
}

impl<T> ConnectionCell<T> {
    /// Create an empty cell. Usable in `static` items.
    pub const fn new() -> Self {
        Self {
            inner: OnceCell::const_new(),
        }
    }

    /// Return the handle, constructing it with `open` if the cell is empty.
    ///
    /// Exactly one `open` future runs at a time. If it fails the cell stays
    /// empty, the error is returned to that caller, and the next waiting
    /// caller gets its own attempt.
    pub async fn get_or_try_init<F, Fut>(&self, open: F) -> Result<&T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.inner.get_or_try_init(open).await
    }

    /// The handle, if it has been constructed
    pub fn get(&self) -> Option<&T> {
        self.inner.get()
    }

    /// The handle, or [`Error::NotInitialized`]
    pub fn try_get(&self) -> Result<&T> {
        self.inner.get().ok_or(Error::NotInitialized)
    }

    /// Whether a handle has been constructed
    pub fn initialized(&self) -> bool {
        self.inner.initialized()
    }
}

impl<T> Default for ConnectionCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
