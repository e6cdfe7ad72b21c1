//! Exactly-once lazy registry construction

use crate::registry::LogRegistry;
use crate::Result;
use once_cell::sync::OnceCell;

/// A [`LogRegistry`] built on first access
///
/// The loader runs at most once successfully. Threads that race on the first
/// [`get`](Self::get) block until that run finishes and then share its
/// result; nobody sees a partially built registry. A failed load is returned
/// to the caller that triggered it and is retried by the next caller.
pub struct LazyLogRegistry<F = fn() -> Result<LogRegistry>> {
    cell: OnceCell<LogRegistry>,
    loader: F,
}

impl<F> LazyLogRegistry<F>
where
    F: Fn() -> Result<LogRegistry>,
{
    pub const fn new(loader: F) -> Self {
        Self {
            cell: OnceCell::new(),
            loader,
        }
    }

    /// Get the registry, building it if this is the first call
    pub fn get(&self) -> Result<&LogRegistry> {
        self.cell.get_or_try_init(|| {
            tracing::debug!("initializing log registry");
            (self.loader)()
        })
    }

    /// The registry, if it has already been built
    pub fn get_if_initialized(&self) -> Option<&LogRegistry> {
        self.cell.get()
    }
}
