use std::future::Future;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Keeps at most one lookup attempt alive. Starting a new attempt cancels
/// the previous one at whatever suspension point it is parked on; the
/// store's sequence guard is the backstop for anything that already raced
/// past its last await.
pub struct WorkflowSupervisor {
    cancel: Option<CancellationToken>,
    current: Option<JoinHandle<()>>,
}

impl WorkflowSupervisor {
    pub fn new() -> Self {
        Self {
            cancel: None,
            current: None,
        }
    }

    /// Cancels the in-flight attempt, if any, and starts `attempt` as the
    /// new current one. The whole attempt future races the token, so
    /// cancellation takes effect mid-delay or mid-request.
    pub fn supersede<F, Fut>(&mut self, attempt: F)
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel_current();

        let token = CancellationToken::new();
        let fut = attempt(token.clone());
        let guard = token.clone();
        self.cancel = Some(token);
        self.current = Some(tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = guard.cancelled() => {}
                _ = fut => {}
            }
        }));
    }

    /// Cancels the current attempt without starting a new one.
    pub fn cancel_current(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
    }

    /// Waits for the current attempt task to wind down. Cancellation counts
    /// as finished.
    pub async fn join_current(&mut self) {
        if let Some(handle) = self.current.take() {
            let _ = handle.await;
        }
    }
}

impl Default for WorkflowSupervisor {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for WorkflowSupervisor {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
    }
}
