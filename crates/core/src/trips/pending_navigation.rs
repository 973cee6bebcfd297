//! Deferred hand-off from the intake form to the itinerary view.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::navigation::ITINERARY_PATH;

use super::TripRequest;

/// Transient route state carried to the itinerary view. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub path: String,
    pub trip_request: TripRequest,
}

/// A one-shot navigation scheduled after a fixed delay.
///
/// The timer is owned by this handle: cancelling or dropping it aborts the
/// timer, so a navigation can never fire after the owning view has gone away.
/// Must be created from within a Tokio runtime.
#[derive(Debug)]
pub struct PendingNavigation {
    task: JoinHandle<()>,
}

impl PendingNavigation {
    pub fn schedule(
        trip_request: TripRequest,
        delay: Duration,
        navigator: UnboundedSender<Navigation>,
    ) -> Self {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let navigation = Navigation {
                path: ITINERARY_PATH.to_string(),
                trip_request,
            };
            if navigator.send(navigation).is_err() {
                debug!("Navigation target closed before the hand-off fired");
            }
        });
        Self { task }
    }

    /// Abandons the hand-off. Equivalent to dropping the handle.
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PendingNavigation {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::TripRequestForm;
    use tokio::sync::mpsc;

    fn request() -> TripRequest {
        TripRequestForm {
            destination: "Lisbon".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-05".to_string(),
            budget: "90000".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _pending = PendingNavigation::schedule(request(), Duration::from_millis(1500), tx);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());

        let navigation = rx.recv().await.unwrap();
        assert_eq!(navigation.path, "/itinerary");
        assert_eq!(navigation.trip_request.destination, "Lisbon");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_navigation_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let pending = PendingNavigation::schedule(request(), Duration::from_millis(1500), tx);

        pending.cancel();
        tokio::time::sleep(Duration::from_millis(3000)).await;

        // Sender was dropped together with the aborted task.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels_navigation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let _pending =
                PendingNavigation::schedule(request(), Duration::from_millis(1500), tx);
        }
        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert!(rx.recv().await.is_none());
    }
}
