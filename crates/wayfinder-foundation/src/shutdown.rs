//! Ctrl-C shutdown handling for the runtime

use tokio::sync::watch;

pub struct ShutdownHandler {
    tx: watch::Sender<bool>,
    rx: watch::Receiver<bool>,
}

impl Default for ShutdownHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownHandler {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx, rx }
    }

    /// Spawn the ctrl-c watcher and return a guard to await shutdown on.
    pub fn install(self) -> ShutdownGuard {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl-C received, requesting shutdown");
                let _ = tx.send(true);
            }
        });
        ShutdownGuard {
            tx: self.tx,
            rx: self.rx,
        }
    }
}

pub struct ShutdownGuard {
    tx: watch::Sender<bool>,
    rx: watch::Receiver<bool>,
}

impl ShutdownGuard {
    /// Resolves once shutdown has been requested.
    pub async fn wait(&mut self) {
        while !*self.rx.borrow() {
            if self.rx.changed().await.is_err() {
                break;
            }
        }
    }

    /// Request shutdown programmatically.
    pub fn trigger(&self) {
        let _ = self.tx.send(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn trigger_resolves_wait() {
        let mut guard = ShutdownHandler::new().install();
        guard.trigger();
        tokio::time::timeout(Duration::from_secs(1), guard.wait())
            .await
            .expect("wait should resolve after trigger");
    }
}
