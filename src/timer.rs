//! Rest-interval countdown.
//!
//! A single-slot timer: at most one countdown task exists system-wide. The
//! countdown decrements an atomic once per tick until it reaches zero and the
//! task ends itself. `start` always aborts the previous task before spawning
//! a new one, and `stop` aborts and zeroes, so the task handle is released on
//! every path that ends or restarts the countdown.
//!
//! The remaining value is polled by the caller, not pushed; the core stays
//! UI-agnostic.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;

const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Observable timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
  Idle,
  Running(u64),
}

pub struct RestTimer {
  remaining: Arc<AtomicU64>,
  task: Mutex<Option<JoinHandle<()>>>,
  tick: Duration,
}

impl RestTimer {
  /// A timer ticking once per second.
  pub fn new() -> Self {
    Self::with_tick(DEFAULT_TICK)
  }

  /// A timer with a custom tick period. Tests use short ticks.
  pub fn with_tick(tick: Duration) -> Self {
    Self {
      remaining: Arc::new(AtomicU64::new(0)),
      task: Mutex::new(None),
      tick,
    }
  }

  /// Begin a countdown from `seconds`, superseding any countdown in flight.
  /// Must be called from within a tokio runtime.
  pub fn start(&self, seconds: u64) {
    let mut slot = self.task.lock().expect("timer task slot poisoned");
    if let Some(previous) = slot.take() {
      previous.abort();
    }

    self.remaining.store(seconds, Ordering::SeqCst);
    if seconds == 0 {
      return;
    }

    let remaining = Arc::clone(&self.remaining);
    let tick = self.tick;
    *slot = Some(tokio::spawn(async move {
      let mut ticker = time::interval(tick);
      // the first interval tick resolves immediately; consume it so the
      // countdown holds its starting value for one full tick
      ticker.tick().await;
      loop {
        ticker.tick().await;
        let now = remaining.load(Ordering::SeqCst);
        if now <= 1 {
          remaining.store(0, Ordering::SeqCst);
          break;
        }
        remaining.store(now - 1, Ordering::SeqCst);
      }
    }));
  }

  /// Cancel any countdown in flight and reset the remaining value to zero.
  pub fn stop(&self) {
    let mut slot = self.task.lock().expect("timer task slot poisoned");
    if let Some(task) = slot.take() {
      task.abort();
    }
    self.remaining.store(0, Ordering::SeqCst);
  }

  /// Remaining seconds, observable at any point between ticks.
  pub fn remaining(&self) -> u64 {
    self.remaining.load(Ordering::SeqCst)
  }

  pub fn state(&self) -> TimerState {
    let running = self
      .task
      .lock()
      .expect("timer task slot poisoned")
      .as_ref()
      .is_some_and(|task| !task.is_finished());
    if running {
      TimerState::Running(self.remaining())
    } else {
      TimerState::Idle
    }
  }
}

impl Default for RestTimer {
  fn default() -> Self {
    Self::new()
  }
}

impl Drop for RestTimer {
  fn drop(&mut self) {
    self.stop();
  }
}
