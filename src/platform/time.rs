//! Deferred callbacks on a virtual clock
//!
//! The game has a single timer slot: at most one callback is pending at any
//! time. Arming the slot while it is occupied is a broken invariant.

/// What to run when the timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Advance the simulation one step
    Tick,
    /// Serve a new ball after a lost life
    Respawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scheduled {
    due_ms: u64,
    action: TimerAction,
}

/// Single-slot scheduler driven by `advance`
#[derive(Debug, Clone, Default)]
pub struct Timer {
    now_ms: u64,
    pending: Option<Scheduled>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending action, if any
    pub fn pending(&self) -> Option<TimerAction> {
        self.pending.map(|s| s.action)
    }

    /// Arm the timer. Panics if a callback is already pending.
    pub fn schedule_after(&mut self, delay_ms: u64, action: TimerAction) {
        if let Some(existing) = self.pending {
            panic!(
                "timer armed with {:?} while {:?} is still pending",
                action, existing.action
            );
        }
        log::debug!("Timer: {:?} in {} ms", action, delay_ms);
        self.pending = Some(Scheduled {
            due_ms: self.now_ms + delay_ms,
            action,
        });
    }

    /// Disarm the timer, returning what was pending
    pub fn cancel(&mut self) -> Option<TimerAction> {
        self.pending.take().map(|s| s.action)
    }

    /// Take the pending action if it is due by `until_ms`, moving the clock
    /// to its due time. Returns `None` (and leaves the clock alone) otherwise.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerAction> {
        match self.pending {
            Some(s) if s.due_ms <= until_ms => {
                self.pending = None;
                self.now_ms = self.now_ms.max(s.due_ms);
                Some(s.action)
            }
            _ => None,
        }
    }

    /// Move the clock forward without firing anything
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_due() {
        let mut timer = Timer::new();
        timer.schedule_after(50, TimerAction::Tick);

        assert_eq!(timer.pop_due(49), None);
        assert!(timer.is_pending());

        assert_eq!(timer.pop_due(120), Some(TimerAction::Tick));
        assert_eq!(timer.now_ms(), 50);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_cancel() {
        let mut timer = Timer::new();
        timer.schedule_after(1000, TimerAction::Respawn);
        assert_eq!(timer.cancel(), Some(TimerAction::Respawn));
        assert_eq!(timer.cancel(), None);
        // Slot is free again
        timer.schedule_after(50, TimerAction::Tick);
        assert_eq!(timer.pending(), Some(TimerAction::Tick));
    }

    #[test]
    #[should_panic(expected = "still pending")]
    fn test_double_schedule_panics() {
        let mut timer = Timer::new();
        timer.schedule_after(50, TimerAction::Tick);
        timer.schedule_after(50, TimerAction::Tick);
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut timer = Timer::new();
        timer.set_now(200);
        timer.schedule_after(50, TimerAction::Tick);
        assert_eq!(timer.pop_due(249), None);
        assert_eq!(timer.pop_due(250), Some(TimerAction::Tick));
    }
}
