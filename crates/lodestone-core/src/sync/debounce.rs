//! Write coalescing for rapid parameter updates.

use futures_util::stream::FusedStream;
use futures_util::{select, FutureExt, StreamExt};

use crate::platform;
use crate::sync::value::ParamValue;

/// Drains `updates` into `sink`, coalescing bursts.
///
/// Each update opens a debounce window; further updates inside the
/// window restart it and replace the pending value, so only the last
/// value of a burst reaches the sink. With `debounce_ms` of zero every
/// update is forwarded immediately.
///
/// The future completes when `updates` ends. A value still inside its
/// window at that point is discarded, matching a widget unmounting
/// mid-keystroke: the teardown must not spend a history entry.
pub async fn drive<St>(mut updates: St, debounce_ms: u64, mut sink: impl FnMut(ParamValue))
where
    St: FusedStream<Item = ParamValue> + Unpin,
{
    while let Some(received) = updates.next().await {
        let mut latest = received;
        if debounce_ms > 0 {
            let mut window = Box::pin(platform::sleep_ms(debounce_ms).fuse());
            loop {
                select! {
                    next = updates.next() => match next {
                        Some(value) => {
                            latest = value;
                            window.set(platform::sleep_ms(debounce_ms).fuse());
                        }
                        None => return,
                    },
                    () = window => break,
                }
            }
        }
        sink(latest);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use futures_channel::mpsc;
    use futures_util::join;

    use super::*;

    fn collector() -> (Rc<RefCell<Vec<ParamValue>>>, impl FnMut(ParamValue)) {
        let writes: Rc<RefCell<Vec<ParamValue>>> = Rc::default();
        let sink = {
            let writes = writes.clone();
            move |value| writes.borrow_mut().push(value)
        };
        (writes, sink)
    }

    #[tokio::test(start_paused = true)]
    async fn bursts_collapse_to_the_last_value() {
        let (tx, rx) = mpsc::unbounded();
        let (writes, sink) = collector();

        let scenario = async move {
            tx.unbounded_send("b".into()).unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
            tx.unbounded_send("bo".into()).unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
            tx.unbounded_send("boots".into()).unwrap();
            tokio::time::sleep(Duration::from_millis(300)).await;
            drop(tx);
        };
        join!(drive(rx, 200, sink), scenario);

        assert_eq!(writes.borrow().as_slice(), [ParamValue::from("boots")]);
    }

    #[tokio::test(start_paused = true)]
    async fn separated_updates_each_reach_the_sink() {
        let (tx, rx) = mpsc::unbounded();
        let (writes, sink) = collector();

        let scenario = async move {
            tx.unbounded_send("a".into()).unwrap();
            tokio::time::sleep(Duration::from_millis(250)).await;
            tx.unbounded_send("b".into()).unwrap();
            tokio::time::sleep(Duration::from_millis(250)).await;
            drop(tx);
        };
        join!(drive(rx, 200, sink), scenario);

        assert_eq!(
            writes.borrow().as_slice(),
            [ParamValue::from("a"), ParamValue::from("b")]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn zero_debounce_forwards_everything() {
        let (tx, rx) = mpsc::unbounded();
        let (writes, sink) = collector();

        tx.unbounded_send("a".into()).unwrap();
        tx.unbounded_send("b".into()).unwrap();
        drop(tx);
        drive(rx, 0, sink).await;

        assert_eq!(
            writes.borrow().as_slice(),
            [ParamValue::from("a"), ParamValue::from("b")]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn closing_mid_window_discards_the_pending_value() {
        let (tx, rx) = mpsc::unbounded();
        let (writes, sink) = collector();

        let scenario = async move {
            tx.unbounded_send("half-typed".into()).unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
            drop(tx);
        };
        join!(drive(rx, 200, sink), scenario);

        assert!(writes.borrow().is_empty());
    }
}
