// Reminder scheduler: the single repeating timer that triggers breaks.

use tracing::{debug, info};

use crate::interval::Interval;
use crate::timer::{TimerId, TimerSpec, Timers};

/// Holds at most one armed reminder timer.
#[derive(Debug, Default)]
pub struct ReminderScheduler {
    armed: Option<(TimerId, Interval)>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a repeating timer for `interval`, cancelling any previous one first.
    pub fn start<T: Timers + ?Sized>(&mut self, timers: &mut T, id: TimerId, interval: Interval) {
        self.stop(timers);
        timers.arm(TimerSpec::repeating(id, interval.period()));
        self.armed = Some((id, interval));
        info!("Reminder armed: every {} (timer {:?})", interval, id);
    }

    /// Returns false when nothing was armed.
    pub fn stop<T: Timers + ?Sized>(&mut self, timers: &mut T) -> bool {
        match self.armed.take() {
            Some((id, interval)) => {
                timers.cancel(id);
                info!("Reminder stopped (was every {})", interval);
                true
            }
            None => {
                debug!("Reminder stop requested while idle");
                false
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.armed.is_some()
    }

    pub fn interval(&self) -> Option<Interval> {
        self.armed.map(|(_, interval)| interval)
    }

    /// Whether a fire with `id` belongs to the live reminder timer.
    pub fn owns(&self, id: TimerId) -> bool {
        matches!(self.armed, Some((armed, _)) if armed == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Repeat;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        armed: Vec<TimerSpec>,
        cancelled: Vec<TimerId>,
    }

    impl Timers for Recorder {
        fn arm(&mut self, spec: TimerSpec) {
            self.armed.push(spec);
        }

        fn cancel(&mut self, id: TimerId) {
            self.cancelled.push(id);
        }
    }

    #[test]
    fn test_start_arms_repeating_timer_for_each_interval() {
        for (n, interval) in Interval::ALL.into_iter().enumerate() {
            let mut timers = Recorder::default();
            let mut scheduler = ReminderScheduler::new();
            let id = TimerId(n as u64 + 1);
            scheduler.start(&mut timers, id, interval);

            assert_eq!(timers.armed.len(), 1);
            assert_eq!(timers.armed[0].id, id);
            assert_eq!(timers.armed[0].repeat, Repeat::Forever);
            assert_eq!(
                timers.armed[0].period,
                Duration::from_secs(interval.minutes() * 60)
            );
            assert!(scheduler.is_running());
            assert_eq!(scheduler.interval(), Some(interval));
        }
    }

    #[test]
    fn test_restart_cancels_previous_timer() {
        let mut timers = Recorder::default();
        let mut scheduler = ReminderScheduler::new();
        scheduler.start(&mut timers, TimerId(1), Interval::Ten);
        scheduler.start(&mut timers, TimerId(2), Interval::Thirty);

        assert_eq!(timers.cancelled, vec![TimerId(1)]);
        assert!(!scheduler.owns(TimerId(1)));
        assert!(scheduler.owns(TimerId(2)));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timers = Recorder::default();
        let mut scheduler = ReminderScheduler::new();
        assert!(!scheduler.stop(&mut timers));

        scheduler.start(&mut timers, TimerId(1), Interval::Twenty);
        assert!(scheduler.stop(&mut timers));
        assert!(!scheduler.stop(&mut timers));
        assert_eq!(timers.cancelled, vec![TimerId(1)]);
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.interval(), None);
    }
}
