//! Cancellation for checks owned by a mounted view.
//!
//! A guard that is torn down while its request is in flight cancels the token;
//! the wrapped future then completes with `None` and nothing is committed.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::future::Future;

use futures::future::{AbortHandle, Abortable};

/// Handle that cancels one wrapped future. Clones cancel the same future.
#[derive(Clone, Debug)]
pub struct CancelToken {
    handle: AbortHandle,
}

impl CancelToken {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

/// Wrap `fut` so it can be cancelled through the returned token.
///
/// The wrapped future yields `Some(output)` on completion and `None` if the
/// token was cancelled before completion was observed.
pub fn cancellable<F: Future>(fut: F) -> (impl Future<Output = Option<F::Output>>, CancelToken) {
    let (handle, registration) = AbortHandle::new_pair();
    let wrapped = Abortable::new(fut, registration);
    let task = async move {
        match wrapped.await {
            Ok(output) => Some(output),
            Err(_aborted) => None,
        }
    };
    (task, CancelToken { handle })
}
