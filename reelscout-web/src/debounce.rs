//! Timer-reset-on-input debouncer.
//!
//! Every push replaces the pending value and restarts the quiet period. When
//! the period elapses without another push, the latest value is delivered to
//! the single consumer.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep};

/// Capacity of the settled-value channel.
const SETTLED_CHANNEL_CAPACITY: usize = 16;

/// Producer side of a debounced channel.
///
/// Dropping every clone stops the timer task; a value still waiting for its
/// quiet period is discarded.
#[derive(Debug)]
pub struct Debouncer<T> {
    sender: mpsc::UnboundedSender<T>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T> Debouncer<T> {
    /// Replaces the pending value and restarts the quiet period.
    ///
    /// Returns false once the consumer has gone away.
    pub fn push(&self, value: T) -> bool {
        self.sender.send(value).is_ok()
    }
}

/// Spawns a debouncer task with the given quiet period.
pub fn debounce<T: Send + 'static>(interval: Duration) -> (Debouncer<T>, mpsc::Receiver<T>) {
    let (input_sender, input_receiver) = mpsc::unbounded_channel();
    let (settled_sender, settled_receiver) = mpsc::channel(SETTLED_CHANNEL_CAPACITY);

    tokio::spawn(run_debouncer(interval, input_receiver, settled_sender));

    (
        Debouncer {
            sender: input_sender,
        },
        settled_receiver,
    )
}

async fn run_debouncer<T>(
    interval: Duration,
    mut input: mpsc::UnboundedReceiver<T>,
    settled: mpsc::Sender<T>,
) {
    let mut pending: Option<T> = None;
    let timer = sleep(interval);
    tokio::pin!(timer);

    loop {
        tokio::select! {
            received = input.recv() => match received {
                Some(value) => {
                    pending = Some(value);
                    timer.as_mut().reset(Instant::now() + interval);
                }
                None => break,
            },
            () = &mut timer, if pending.is_some() => {
                if let Some(value) = pending.take() {
                    if settled.send(value).await.is_err() {
                        break;
                    }
                }
            }
        }
    }

    tracing::trace!("Debouncer stopped");
}
