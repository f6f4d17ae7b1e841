//! Cooperative cancellation for view-initiated requests.
//!
//! A view owns a [`ViewLifetime`]; every request it starts is awaited through
//! a [`CancelSignal`] obtained from it. Dropping the lifetime (view teardown)
//! cancels all outstanding requests so their results are never applied.

use std::future::Future;

use tokio::sync::watch;

use crate::client::ClientError;

#[derive(Debug)]
pub struct ViewLifetime {
    tx: watch::Sender<bool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    pub fn signal(&self) -> CancelSignal {
        CancelSignal { rx: self.tx.subscribe() }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewLifetime {
    fn drop(&mut self) {
        self.tx.send_replace(true);
    }
}

#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// A signal that is never cancelled.
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation has been requested.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                // Sender gone without cancelling: only `never()` does that.
                if *rx.borrow() {
                    return;
                }
                std::future::pending::<()>().await;
            }
        }
    }

    /// Await `fut` unless cancellation wins first.
    pub async fn guard<T, F>(&self, fut: F) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        if self.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        tokio::select! {
            biased;
            _ = self.cancelled() => Err(ClientError::Cancelled),
            result = fut => result,
        }
    }
}
