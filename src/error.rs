//! Errors returned by the containers in this crate.

use std::collections::TryReserveError;

/// Errors triggered by container operations.
///
/// Lookups that miss are not errors: they return `None`. Inserting an element
/// that is already present is not an error either.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Memory for a node or a result buffer could not be reserved. The
    /// container is left exactly as it was before the call.
    #[error("failed to allocate {what}")]
    Allocation {
        /// What the allocation was for.
        what: &'static str,
        /// The underlying reservation failure.
        #[source]
        source: TryReserveError,
    },
}

impl Error {
    pub(crate) fn allocation(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| {
            log::warn!("allocation failed for {what}: {source}");
            Self::Allocation { what, source }
        }
    }
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
