//! Deferred completion of pull-to-refresh.
//!
//! There is no data source behind the dashboard; a refresh is a timer that
//! reports back through the app's message channel once the configured delay
//! has elapsed.

use std::time::Duration;

use gridline_protocol::Message;
use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};

/// Spawns a task that sends [`Message::RefreshComplete`] after `delay`.
///
/// Must be called from within a tokio runtime. If the receiving side has
/// been dropped by the time the delay elapses, the completion is discarded.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use gridline_protocol::Message;
/// use gridline_tui::refresh::schedule_refresh;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
/// schedule_refresh(Duration::from_millis(1), tx);
/// assert_eq!(rx.recv().await, Some(Message::RefreshComplete));
/// # }
/// ```
pub fn schedule_refresh(delay: Duration, tx: UnboundedSender<Message>) -> JoinHandle<()> {
    tracing::debug!(?delay, "refresh scheduled");
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(Message::RefreshComplete).is_err() {
            tracing::debug!("refresh completed after the app shut down");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    use tokio::time::{Instant, timeout};

    const DELAY: Duration = Duration::from_millis(2000);

    #[tokio::test(start_paused = true)]
    async fn completes_after_delay() {
        let (tx, mut rx) = unbounded_channel();
        let start = Instant::now();

        schedule_refresh(DELAY, tx);
        let msg = rx.recv().await;

        assert_eq!(msg, Some(Message::RefreshComplete));
        assert!(start.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_arrives_early() {
        let (tx, mut rx) = unbounded_channel();
        schedule_refresh(DELAY, tx);

        let early = timeout(DELAY - Duration::from_millis(1), rx.recv()).await;
        assert!(early.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn aborted_refresh_never_completes() {
        let (tx, mut rx) = unbounded_channel();
        let handle = schedule_refresh(DELAY, tx);
        handle.abort();

        // The sender is dropped with the aborted task, closing the channel.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_receiver_is_tolerated() {
        let (tx, rx) = unbounded_channel();
        let handle = schedule_refresh(DELAY, tx);
        drop(rx);

        assert!(handle.await.is_ok());
    }
}
