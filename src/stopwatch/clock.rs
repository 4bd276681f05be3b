// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.


//! Periodic tick sources for the stopwatch engine.
//!
//! The engine never sleeps or spawns anything itself. Instead it asks a
//! [`Clock`] to call it back at a fixed interval and cancels that
//! subscription when it stops. Two clocks are provided:
//!
//! * [`ThreadClock`]: a real clock that runs each subscription on its own
//!   background thread.
//! * `ManualClock`: a test clock whose ticks are delivered synchronously by
//!   the test itself, so no test ever waits on wall-clock time.

use std::{
    collections::HashMap,
    io,
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicU64, Ordering},
        mpsc::{self, RecvTimeoutError, Sender},
    },
    thread,
    time::Duration,
};

use thiserror::Error;

/// Callback invoked once per tick.
pub(crate) type TickCallback = Box<dyn FnMut() + Send + 'static>;

/// Identifies one active subscription on a [`Clock`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct SubscriptionHandle(u64);

#[derive(Debug, Error)]
pub(crate) enum ClockError {
    #[error("failed to spawn tick thread")]
    Spawn(#[source] io::Error),
}

/// A source of periodic ticks.
pub(crate) trait Clock: Send + Sync {
    /// Starts invoking `callback` roughly every `interval` until cancelled.
    fn subscribe(
        &self,
        interval: Duration,
        callback: TickCallback,
    ) -> Result<SubscriptionHandle, ClockError>;

    /// Stops a subscription. Cancelling an unknown handle does nothing.
    fn cancel(&self, handle: SubscriptionHandle);
}

/// Clock backed by one background thread per subscription.
///
/// Each thread waits on a cancellation channel with a timeout of one
/// interval. A timeout fires the callback; dropping the sender in
/// [`Clock::cancel`] disconnects the channel and the thread exits.
#[derive(Default)]
pub(crate) struct ThreadClock {
    next_id: AtomicU64,
    subscriptions: Mutex<HashMap<SubscriptionHandle, Sender<()>>>,
}

impl ThreadClock {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl Clock for ThreadClock {
    fn subscribe(
        &self,
        interval: Duration,
        mut callback: TickCallback,
    ) -> Result<SubscriptionHandle, ClockError> {
        let handle = SubscriptionHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        thread::Builder::new()
            .name(format!("stopwatch-tick-{}", handle.0))
            .spawn(move || {
                loop {
                    match cancel_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => callback(),
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                tracing::trace!(subscription = handle.0, "tick thread finished");
            })
            .map_err(ClockError::Spawn)?;

        self.subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(handle, cancel_tx);

        Ok(handle)
    }

    fn cancel(&self, handle: SubscriptionHandle) {
        // Dropping the sender wakes the tick thread immediately.
        self.subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&handle);
    }
}

/// Clock driven by the test that owns it.
///
/// Ticks are delivered on the caller's thread by [`ManualClock::advance`].
/// Cancelled callbacks are kept aside so a test can replay a tick that was
/// already in flight when the subscription was cancelled.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct ManualClock {
    next_id: AtomicU64,
    active: Mutex<std::collections::BTreeMap<SubscriptionHandle, (Duration, TickCallback)>>,
    cancelled: Mutex<Vec<TickCallback>>,
}

#[cfg(test)]
impl ManualClock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Fires every active subscription `ticks` times.
    pub(crate) fn advance(&self, ticks: usize) {
        for _ in 0..ticks {
            let mut active = self.active.lock().unwrap();
            for (_, callback) in active.values_mut() {
                callback();
            }
        }
    }

    /// Fires each cancelled callback once, as a late in-flight tick would.
    pub(crate) fn deliver_in_flight(&self) {
        let mut cancelled = self.cancelled.lock().unwrap();
        for callback in cancelled.iter_mut() {
            callback();
        }
    }

    pub(crate) fn active_subscriptions(&self) -> usize {
        self.active.lock().unwrap().len()
    }

    pub(crate) fn intervals(&self) -> Vec<Duration> {
        self.active
            .lock()
            .unwrap()
            .values()
            .map(|(interval, _)| *interval)
            .collect()
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn subscribe(
        &self,
        interval: Duration,
        callback: TickCallback,
    ) -> Result<SubscriptionHandle, ClockError> {
        let handle = SubscriptionHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.active.lock().unwrap().insert(handle, (interval, callback));
        Ok(handle)
    }

    fn cancel(&self, handle: SubscriptionHandle) {
        if let Some((_, callback)) = self.active.lock().unwrap().remove(&handle) {
            self.cancelled.lock().unwrap().push(callback);
        }
    }
}
