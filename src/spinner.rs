//! Background spinner animation.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::screen::{SharedScreen, lock};

/// A spinner animating on the shared screen from a background task.
///
/// The task draws a frame, sleeps for one interval and repeats until
/// [`SpinnerLoop::stop`] is called or the output sink goes away.
pub struct SpinnerLoop {
    handle: JoinHandle<()>,
    cancel: watch::Sender<bool>,
}

impl SpinnerLoop {
    /// Spawn the animation on the current tokio runtime.
    pub(crate) fn start(screen: SharedScreen, interval: Duration) -> Self {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            loop {
                let drawn = lock(&screen).tick();
                if let Err(e) = drawn {
                    debug!(error = %e, "spinner output closed, stopping");
                    break;
                }

                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = cancel_rx.changed() => break,
                }
            }
        });

        Self {
            handle,
            cancel: cancel_tx,
        }
    }

    /// False once the task has exited, whether asked to or not.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop the spinner and wait for its task to exit. No frame is drawn
    /// after this returns.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        let _ = self.handle.await;
    }

    /// Cancel without waiting, for contexts that can't await.
    pub(crate) fn abort(&self) {
        self.handle.abort();
    }
}
