//! One-second ticker driving the clock label.
//!
//! The tick is a cooperative suspension point on the single-threaded
//! runtime: no two ticks run concurrently, and each tick captures the
//! instant at fire time. Cancellation is tied to teardown: dropping the
//! `Ticker` aborts the task, so the timer cannot outlive the view.

use std::sync::Arc;
use std::time::Duration;

use chrono::DateTime;
use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use tzclock_core::Clock;

pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Starts ticking immediately; the first tick fires right away.
    ///
    /// Stops on its own if the receiver goes away.
    pub fn spawn(
        period: Duration,
        clock: Arc<dyn Clock>,
        tx: mpsc::Sender<DateTime<Utc>>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // A tick delayed past the next period is dropped, not replayed.
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(clock.now()).await.is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tzclock_core::ManualClock;

    fn instants() -> Vec<DateTime<Utc>> {
        vec![
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 1).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 2).unwrap(),
        ]
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_carry_the_clocks_instants_in_order() {
        let script = instants();
        let clock = Arc::new(ManualClock::new(script.clone()));
        let (tx, mut rx) = mpsc::channel(8);
        let _ticker = Ticker::spawn(Duration::from_secs(1), clock, tx);

        assert_eq!(rx.recv().await, Some(script[0]));
        assert_eq!(rx.recv().await, Some(script[1]));
        assert_eq!(rx.recv().await, Some(script[2]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_the_ticker() {
        let clock = Arc::new(ManualClock::new(instants()));
        let (tx, mut rx) = mpsc::channel(8);
        let ticker = Ticker::spawn(Duration::from_secs(1), clock, tx);

        assert!(rx.recv().await.is_some());
        drop(ticker);

        // Aborting the task drops the sender; at most the channel capacity
        // of already-buffered ticks can still arrive before it closes.
        let mut leftover = 0;
        while rx.recv().await.is_some() {
            leftover += 1;
            assert!(leftover <= 8, "ticker kept producing after drop");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_stops_when_receiver_is_dropped() {
        let clock = Arc::new(ManualClock::new(instants()));
        let (tx, rx) = mpsc::channel(8);
        let ticker = Ticker::spawn(Duration::from_secs(1), clock, tx);

        drop(rx);
        // The send failure breaks the loop and the task finishes on its own.
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(ticker.handle.is_finished());
    }
}
