//! OS signal handling and the one-shot stop request it feeds.
//!
//! SIGINT (Ctrl+C) and, on Unix, SIGTERM both stop the server. Handlers are
//! registered synchronously by [`install`], so a signal arriving at any point
//! after that call takes the clean exit path rather than the default
//! disposition.

use std::future::pending;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Create a connected trigger/signal pair.
pub fn shutdown_channel() -> (ShutdownTrigger, ShutdownSignal) {
    let (tx, rx) = oneshot::channel();
    (ShutdownTrigger { tx }, ShutdownSignal { rx })
}

/// Requests that the accept loop stop. Fires at most once.
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: oneshot::Sender<()>,
}

impl ShutdownTrigger {
    pub fn fire(self) {
        let _ = self.tx.send(());
    }
}

/// Resolves when the paired [`ShutdownTrigger`] fires.
#[derive(Debug)]
pub struct ShutdownSignal {
    rx: oneshot::Receiver<()>,
}

impl ShutdownSignal {
    /// Wait for the stop request.
    ///
    /// A trigger dropped without firing never resolves this.
    pub async fn wait(self) {
        if self.rx.await.is_err() {
            pending::<()>().await;
        }
    }
}

/// Register SIGINT/SIGTERM handlers and fire `trigger` on the first one.
#[cfg(unix)]
pub fn install(trigger: ShutdownTrigger) -> std::io::Result<JoinHandle<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(tokio::spawn(async move {
        tokio::select! {
            _ = interrupt.recv() => tracing::info!(signal = "SIGINT", "Termination signal received"),
            _ = terminate.recv() => tracing::info!(signal = "SIGTERM", "Termination signal received"),
        }
        trigger.fire();
    }))
}

/// Register a Ctrl+C handler and fire `trigger` when it arrives.
#[cfg(not(unix))]
pub fn install(trigger: ShutdownTrigger) -> std::io::Result<JoinHandle<()>> {
    let mut ctrl_c = tokio::signal::windows::ctrl_c()?;

    Ok(tokio::spawn(async move {
        ctrl_c.recv().await;
        tracing::info!("Termination signal received");
        trigger.fire();
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn fired_trigger_resolves_signal() {
        let (trigger, signal) = shutdown_channel();
        trigger.fire();
        tokio::time::timeout(Duration::from_secs(1), signal.wait())
            .await
            .expect("signal did not resolve");
    }

    #[tokio::test]
    async fn dropped_trigger_keeps_serving() {
        let (trigger, signal) = shutdown_channel();
        drop(trigger);
        let waited = tokio::time::timeout(Duration::from_millis(50), signal.wait()).await;
        assert!(waited.is_err(), "dropping the trigger must not stop the server");
    }

    #[tokio::test]
    async fn install_registers_handlers() {
        let (trigger, _signal) = shutdown_channel();
        let handle = install(trigger).unwrap();
        assert!(!handle.is_finished());
        handle.abort();
    }
}
