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


//! Stopwatch timing and lap state machine.
//!
//! This module provides the [`Stopwatch`] engine used by the UI. The engine
//! owns the run state, the accumulated elapsed time, the captured laps and
//! the label being typed for the next lap. It performs no rendering and no
//! terminal I/O.
//!
//! # Ticks
//!
//! Elapsed time advances only through ticks. While running, the engine holds
//! exactly one subscription on its injected [`Clock`], which adds
//! [`TICK_INTERVAL_MS`] per callback. Time is never corrected against the
//! wall clock, so the total is always `TICK_INTERVAL_MS` times the number of
//! ticks delivered.
//!
//! # Observers
//!
//! Every command that changes state notifies each registered
//! [`StopwatchObserver`] once with a fresh [`StopwatchSnapshot`]. Commands
//! that turn out to be no-ops notify nobody. Observers run while the state
//! lock is held, so they must not call back into the engine.

pub(crate) mod clock;

use std::{
    mem,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};

use tracing::{debug, error, trace};

use crate::{
    model::{LapRecord, RunState, StopwatchSnapshot},
    stopwatch::clock::{Clock, SubscriptionHandle},
};

/// Milliseconds added by each clock tick.
pub(crate) const TICK_INTERVAL_MS: u64 = 10;

/// Receives a snapshot after every state change.
pub(crate) trait StopwatchObserver: Send {
    fn on_stopwatch_changed(&mut self, snapshot: &StopwatchSnapshot);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ObserverId(u64);

#[derive(Default)]
struct StopwatchState {
    run_state: RunState,
    elapsed_ms: u64,
    // Copied on write when a lap is added while a snapshot still holds it.
    laps: Arc<Vec<LapRecord>>,
    pending_lap_label: String,

    // Bumped on every start so ticks from an earlier run are recognised.
    run_id: u64,
    subscription: Option<SubscriptionHandle>,

    next_observer_id: u64,
    observers: Vec<(ObserverId, Box<dyn StopwatchObserver>)>,
}

impl StopwatchState {
    fn snapshot(&self) -> StopwatchSnapshot {
        StopwatchSnapshot {
            run_state: self.run_state,
            elapsed_ms: self.elapsed_ms,
            laps: Arc::clone(&self.laps),
            pending_lap_label: self.pending_lap_label.clone(),
        }
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, observer) in self.observers.iter_mut() {
            observer.on_stopwatch_changed(&snapshot);
        }
    }

    fn advance(&mut self, delta_ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        trace!(elapsed_ms = self.elapsed_ms, "tick");
        self.notify();
    }

    // Tick delivered by the clock subscription of run `run_id`.
    fn tick_from(&mut self, run_id: u64, delta_ms: u64) {
        if !self.run_state.is_running() || run_id != self.run_id {
            trace!(run_id, current = self.run_id, "ignoring stale tick");
            return;
        }
        self.advance(delta_ms);
    }
}

fn lock(state: &Mutex<StopwatchState>) -> MutexGuard<'_, StopwatchState> {
    // Every mutation leaves the state consistent, so a poisoned lock is safe
    // to keep using.
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A handle to the stopwatch engine.
///
/// Clones share the same state, and every command is a single atomic step
/// relative to the others.
#[derive(Clone)]
pub(crate) struct Stopwatch {
    state: Arc<Mutex<StopwatchState>>,
    clock: Arc<dyn Clock>,
}

impl Stopwatch {
    /// Creates a stopped stopwatch that will draw its ticks from `clock`.
    pub(crate) fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(Mutex::new(StopwatchState::default())),
            clock,
        }
    }

    /// Starts accumulating time. Does nothing if already running.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn start(&self) {
        let mut state = lock(&self.state);
        if self.start_locked(&mut state) {
            state.notify();
        }
    }

    /// Stops accumulating time. Does nothing if already stopped.
    pub(crate) fn stop(&self) {
        let mut state = lock(&self.state);
        if self.stop_locked(&mut state) {
            state.notify();
        }
    }

    /// Starts a stopped stopwatch or stops a running one.
    pub(crate) fn toggle(&self) {
        let mut state = lock(&self.state);
        let changed = if state.run_state.is_running() {
            self.stop_locked(&mut state)
        } else {
            self.start_locked(&mut state)
        };
        if changed {
            state.notify();
        }
    }

    /// Stops the stopwatch and clears the elapsed time, the laps and the
    /// pending lap label.
    pub(crate) fn reset(&self) {
        let mut state = lock(&self.state);
        let was_running = self.stop_locked(&mut state);

        let changed = was_running
            || state.elapsed_ms != 0
            || !state.laps.is_empty()
            || !state.pending_lap_label.is_empty();

        state.elapsed_ms = 0;
        state.laps = Arc::default();
        state.pending_lap_label.clear();

        if changed {
            debug!("stopwatch reset");
            state.notify();
        }
    }

    /// Adds `delta_ms` to the elapsed time. Ignored while stopped.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn tick(&self, delta_ms: u64) {
        let mut state = lock(&self.state);
        if state.run_state.is_running() {
            state.advance(delta_ms);
        }
    }

    /// Stores the label for the next lap exactly as given.
    pub(crate) fn set_pending_lap_label(&self, text: impl Into<String>) {
        let text = text.into();
        let mut state = lock(&self.state);
        if state.pending_lap_label != text {
            state.pending_lap_label = text;
            state.notify();
        }
    }

    /// Captures a lap at the current elapsed time.
    ///
    /// Does nothing unless the stopwatch is running and the pending label
    /// has non-whitespace content. The label is stored untrimmed and the
    /// pending label is cleared.
    pub(crate) fn lap(&self) {
        let mut state = lock(&self.state);
        if !state.run_state.is_running() || state.pending_lap_label.trim().is_empty() {
            return;
        }

        let label = mem::take(&mut state.pending_lap_label);
        let record = LapRecord::new(state.elapsed_ms, label);
        debug!(
            lap = state.laps.len() + 1,
            elapsed_ms = record.captured_elapsed,
            label = %record.label,
            "lap captured"
        );
        Arc::make_mut(&mut state.laps).push(record);
        state.notify();
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn elapsed(&self) -> u64 {
        lock(&self.state).elapsed_ms
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn run_state(&self) -> RunState {
        lock(&self.state).run_state
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn laps(&self) -> Vec<LapRecord> {
        lock(&self.state).laps.to_vec()
    }

    pub(crate) fn pending_lap_label(&self) -> String {
        lock(&self.state).pending_lap_label.clone()
    }

    pub(crate) fn snapshot(&self) -> StopwatchSnapshot {
        lock(&self.state).snapshot()
    }

    /// Registers an observer to be told about every subsequent change.
    pub(crate) fn subscribe(&self, observer: impl StopwatchObserver + 'static) -> ObserverId {
        let observer: Box<dyn StopwatchObserver> = Box::new(observer);
        let mut state = lock(&self.state);
        let id = ObserverId(state.next_observer_id);
        state.next_observer_id += 1;
        state.observers.push((id, observer));
        id
    }

    /// Removes an observer, returning whether it was registered.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut state = lock(&self.state);
        let before = state.observers.len();
        state.observers.retain(|(observer_id, _)| *observer_id != id);
        state.observers.len() != before
    }

    // Returns whether the state changed.
    fn start_locked(&self, state: &mut StopwatchState) -> bool {
        if state.run_state.is_running() {
            return false;
        }

        let run_id = state.run_id.wrapping_add(1);
        let weak: Weak<Mutex<StopwatchState>> = Arc::downgrade(&self.state);
        let callback = Box::new(move || {
            if let Some(state) = weak.upgrade() {
                lock(&state).tick_from(run_id, TICK_INTERVAL_MS);
            }
        });

        match self
            .clock
            .subscribe(Duration::from_millis(TICK_INTERVAL_MS), callback)
        {
            Ok(handle) => {
                state.run_id = run_id;
                state.subscription = Some(handle);
                state.run_state = RunState::Running;
                debug!(elapsed_ms = state.elapsed_ms, "stopwatch started");
                true
            }
            Err(e) => {
                error!(error = %e, "failed to start stopwatch clock");
                false
            }
        }
    }

    // Returns whether the state changed. The subscription is cancelled before
    // returning and any tick still in flight is discarded by `tick_from`.
    fn stop_locked(&self, state: &mut StopwatchState) -> bool {
        if let Some(handle) = state.subscription.take() {
            self.clock.cancel(handle);
        }
        if !state.run_state.is_running() {
            return false;
        }
        state.run_state = RunState::Stopped;
        debug!(elapsed_ms = state.elapsed_ms, "stopwatch stopped");
        true
    }
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use super::{
        clock::{ManualClock, ThreadClock},
        *,
    };

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<StopwatchSnapshot>>>);

    impl Recorder {
        fn count(&self) -> usize {
            self.0.lock().unwrap().len()
        }

        fn last(&self) -> Option<StopwatchSnapshot> {
            self.0.lock().unwrap().last().cloned()
        }
    }

    impl StopwatchObserver for Recorder {
        fn on_stopwatch_changed(&mut self, snapshot: &StopwatchSnapshot) {
            self.0.lock().unwrap().push(snapshot.clone());
        }
    }

    fn manual_stopwatch() -> (Stopwatch, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let stopwatch = Stopwatch::new(clock.clone());
        (stopwatch, clock)
    }

    #[test]
    fn starts_stopped_and_empty() {
        let (stopwatch, clock) = manual_stopwatch();
        assert_eq!(stopwatch.run_state(), RunState::Stopped);
        assert_eq!(stopwatch.elapsed(), 0);
        assert!(stopwatch.laps().is_empty());
        assert_eq!(stopwatch.pending_lap_label(), "");
        assert_eq!(clock.active_subscriptions(), 0);
    }

    #[test]
    fn ticks_accumulate_while_running() {
        let (stopwatch, _clock) = manual_stopwatch();
        stopwatch.start();
        stopwatch.tick(10);
        stopwatch.tick(10);
        assert_eq!(stopwatch.elapsed(), 20);
    }

    #[test]
    fn clock_ticks_add_fixed_interval() {
        let (stopwatch, clock) = manual_stopwatch();
        stopwatch.start();
        assert_eq!(clock.intervals(), vec![Duration::from_millis(TICK_INTERVAL_MS)]);

        clock.advance(7);
        assert_eq!(stopwatch.elapsed(), 70);

        stopwatch.stop();
        clock.advance(5);
        assert_eq!(stopwatch.elapsed(), 70);

        stopwatch.start();
        clock.advance(3);
        assert_eq!(stopwatch.elapsed(), 100);
    }

    #[test]
    fn tick_while_stopped_is_ignored() {
        let (stopwatch, _clock) = manual_stopwatch();
        stopwatch.tick(10);
        assert_eq!(stopwatch.elapsed(), 0);
    }

    #[test]
    fn double_start_keeps_one_subscription() {
        let (stopwatch, clock) = manual_stopwatch();
        let recorder = Recorder::default();
        stopwatch.subscribe(recorder.clone());

        stopwatch.start();
        stopwatch.start();

        assert_eq!(stopwatch.run_state(), RunState::Running);
        assert_eq!(clock.active_subscriptions(), 1);
        assert_eq!(recorder.count(), 1);

        clock.advance(1);
        assert_eq!(stopwatch.elapsed(), 10);
    }

    #[test]
    fn double_stop_matches_single_stop() {
        let (stopwatch, clock) = manual_stopwatch();
        stopwatch.start();
        clock.advance(4);

        stopwatch.stop();
        let once = stopwatch.snapshot();
        stopwatch.stop();

        assert_eq!(stopwatch.snapshot(), once);
        assert_eq!(once.run_state, RunState::Stopped);
        assert_eq!(clock.active_subscriptions(), 0);
    }

    #[test]
    fn toggle_flips_run_state() {
        let (stopwatch, clock) = manual_stopwatch();
        stopwatch.toggle();
        assert_eq!(stopwatch.run_state(), RunState::Running);
        assert_eq!(clock.active_subscriptions(), 1);

        stopwatch.toggle();
        assert_eq!(stopwatch.run_state(), RunState::Stopped);
        assert_eq!(clock.active_subscriptions(), 0);
    }

    #[test]
    fn reset_clears_everything_from_any_state() {
        let (stopwatch, clock) = manual_stopwatch();
        stopwatch.start();
        clock.advance(12);
        stopwatch.set_pending_lap_label("first");
        stopwatch.lap();
        stopwatch.set_pending_lap_label("unsent");

        stopwatch.reset();
        assert_eq!(stopwatch.snapshot(), StopwatchSnapshot::default());
        assert_eq!(clock.active_subscriptions(), 0);

        stopwatch.reset();
        assert_eq!(stopwatch.snapshot(), StopwatchSnapshot::default());
    }

    #[test]
    fn reset_while_stopped_clears_elapsed() {
        let (stopwatch, clock) = manual_stopwatch();
        stopwatch.start();
        clock.advance(3);
        stopwatch.stop();

        stopwatch.reset();
        assert_eq!(stopwatch.elapsed(), 0);
        assert_eq!(stopwatch.run_state(), RunState::Stopped);
    }

    #[test]
    fn in_flight_tick_after_stop_is_discarded() {
        let (stopwatch, clock) = manual_stopwatch();
        stopwatch.start();
        clock.advance(2);
        stopwatch.stop();

        clock.deliver_in_flight();
        assert_eq!(stopwatch.elapsed(), 20);
    }

    #[test]
    fn in_flight_tick_from_earlier_run_is_discarded() {
        let (stopwatch, clock) = manual_stopwatch();
        stopwatch.start();
        stopwatch.reset();
        stopwatch.start();

        // The callback from the first run arrives while the second is live.
        clock.deliver_in_flight();
        assert_eq!(stopwatch.elapsed(), 0);

        clock.advance(1);
        assert_eq!(stopwatch.elapsed(), 10);
    }

    #[test]
    fn lap_records_in_capture_order() {
        let (stopwatch, _clock) = manual_stopwatch();
        stopwatch.start();
        stopwatch.set_pending_lap_label("A");
        stopwatch.lap();
        stopwatch.tick(500);
        stopwatch.set_pending_lap_label("B");
        stopwatch.lap();

        assert_eq!(
            stopwatch.laps(),
            vec![LapRecord::new(0, "A"), LapRecord::new(500, "B")]
        );
        assert_eq!(stopwatch.pending_lap_label(), "");
    }

    #[test]
    fn lap_requires_non_blank_label() {
        let (stopwatch, _clock) = manual_stopwatch();
        stopwatch.start();

        stopwatch.lap();
        stopwatch.set_pending_lap_label("   \t");
        stopwatch.lap();

        assert!(stopwatch.laps().is_empty());
        assert_eq!(stopwatch.pending_lap_label(), "   \t");
    }

    #[test]
    fn lap_while_stopped_is_ignored() {
        let (stopwatch, _clock) = manual_stopwatch();
        stopwatch.set_pending_lap_label("early");
        stopwatch.lap();

        stopwatch.start();
        stopwatch.stop();
        stopwatch.lap();

        assert!(stopwatch.laps().is_empty());
        assert_eq!(stopwatch.pending_lap_label(), "early");
    }

    #[test]
    fn lap_label_is_kept_verbatim() {
        let (stopwatch, _clock) = manual_stopwatch();
        stopwatch.start();
        stopwatch.set_pending_lap_label("  padded  ");
        stopwatch.lap();

        assert_eq!(stopwatch.laps()[0].label, "  padded  ");
    }

    #[test]
    fn observers_see_each_change_once() {
        let (stopwatch, clock) = manual_stopwatch();
        let recorder = Recorder::default();
        stopwatch.subscribe(recorder.clone());

        stopwatch.start();
        assert_eq!(recorder.count(), 1);

        clock.advance(2);
        assert_eq!(recorder.count(), 3);

        stopwatch.set_pending_lap_label("split");
        stopwatch.set_pending_lap_label("split");
        assert_eq!(recorder.count(), 4);

        stopwatch.lap();
        assert_eq!(recorder.count(), 5);
        let last = recorder.last().unwrap();
        assert_eq!(*last.laps, vec![LapRecord::new(20, "split")]);
        assert_eq!(last.pending_lap_label, "");

        stopwatch.reset();
        assert_eq!(recorder.count(), 6);
        assert_eq!(recorder.last().unwrap(), StopwatchSnapshot::default());
    }

    #[test]
    fn no_ops_do_not_notify() {
        let (stopwatch, _clock) = manual_stopwatch();
        let recorder = Recorder::default();
        stopwatch.subscribe(recorder.clone());

        stopwatch.stop();
        stopwatch.tick(10);
        stopwatch.lap();
        stopwatch.reset();

        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn unsubscribed_observer_is_not_notified() {
        let (stopwatch, _clock) = manual_stopwatch();
        let recorder = Recorder::default();
        let id = stopwatch.subscribe(recorder.clone());

        assert!(stopwatch.unsubscribe(id));
        assert!(!stopwatch.unsubscribe(id));

        stopwatch.start();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn tick_snapshots_share_the_lap_list() {
        let (stopwatch, clock) = manual_stopwatch();
        let recorder = Recorder::default();
        stopwatch.subscribe(recorder.clone());

        stopwatch.start();
        clock.advance(1);
        stopwatch.set_pending_lap_label("first");
        stopwatch.lap();
        clock.advance(1);
        let before = recorder.last().unwrap();
        clock.advance(1);
        let after = recorder.last().unwrap();

        assert_eq!(after.elapsed_ms, before.elapsed_ms + TICK_INTERVAL_MS);
        assert!(Arc::ptr_eq(&before.laps, &after.laps));

        stopwatch.set_pending_lap_label("second");
        stopwatch.lap();
        assert_eq!(before.laps.len(), 1);
        assert_eq!(recorder.last().unwrap().laps.len(), 2);
    }

    #[test]
    fn clones_share_state() {
        let (stopwatch, _clock) = manual_stopwatch();
        let other = stopwatch.clone();
        other.start();
        other.tick(30);

        assert_eq!(stopwatch.run_state(), RunState::Running);
        assert_eq!(stopwatch.elapsed(), 30);
    }

    #[test]
    fn thread_clock_drives_elapsed_time() {
        let stopwatch = Stopwatch::new(Arc::new(ThreadClock::new()));
        stopwatch.start();
        thread::sleep(Duration::from_millis(100));
        stopwatch.stop();

        let elapsed = stopwatch.elapsed();
        assert!(elapsed > 0);
        assert_eq!(elapsed % TICK_INTERVAL_MS, 0);

        thread::sleep(Duration::from_millis(50));
        assert_eq!(stopwatch.elapsed(), elapsed);
    }
}
