//! Asynchronous call dispatch with exactly-once completion.
//!
//! A dispatched call runs on the tokio pool; the caller holds a
//! [`PendingCall`] and observes exactly one terminal outcome, either by
//! awaiting it or through [`PendingCall::on_complete`]. Cancellation is not
//! supported: dropping the handle detaches the in-flight task but cannot
//! recall the request.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use momo_sdk_client::{Error, ErrorKind, Result};

/// An in-flight API call.
///
/// The underlying oneshot channel guarantees that exactly one of success or
/// failure is delivered, exactly once, regardless of outcome.
#[derive(Debug)]
pub struct PendingCall<T> {
    reference_id: Option<String>,
    rx: oneshot::Receiver<Result<T>>,
}

impl<T> PendingCall<T> {
    /// The reference id generated for this call, when the operation created a
    /// new resource. Status and lookup calls return `None`.
    pub fn reference_id(&self) -> Option<&str> {
        self.reference_id.as_deref()
    }

    pub(crate) fn with_reference(mut self, reference_id: String) -> Self {
        self.reference_id = Some(reference_id);
        self
    }
}

impl<T: Send + 'static> PendingCall<T> {
    /// Deliver the outcome to a callback instead of awaiting the call.
    ///
    /// The callback fires exactly once, with `Ok` on a decoded 2xx response
    /// and `Err` otherwise.
    pub fn on_complete<F>(self, complete: F)
    where
        F: FnOnce(Result<T>) + Send + 'static,
    {
        tokio::spawn(async move {
            complete(self.await);
        });
    }
}

impl<T> Future for PendingCall<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // The dispatch task can only vanish without sending if the
            // runtime is shutting down underneath us.
            Poll::Ready(Err(_)) => Poll::Ready(Err(Error::new(ErrorKind::Other(
                "call terminated before completion".into(),
            )))),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Run a prepared call on the background pool, returning a handle to its
/// eventual outcome. Never blocks the caller.
pub fn dispatch<T, Fut>(call: Fut) -> PendingCall<T>
where
    T: Send + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        // The receiver may already be gone; the outcome is discarded then.
        let _ = tx.send(call.await);
    });
    PendingCall {
        reference_id: None,
        rx,
    }
}

/// A call that failed before dispatch (bad configuration, serialization).
/// The error still arrives through the normal completion path.
pub(crate) fn completed<T>(outcome: Result<T>) -> PendingCall<T> {
    let (tx, rx) = oneshot::channel();
    let _ = tx.send(outcome);
    PendingCall {
        reference_id: None,
        rx,
    }
}
