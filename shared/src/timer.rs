// Timer abstraction shared by the reminder scheduler and the break countdown.
//
// A backend only has to arm and cancel; routing of fires happens in `App`
// through the `TimerId` carried by `Event::TimerFired`.

use std::collections::HashMap;
use std::time::Duration;

/// Identifies one armed timer. Ids are never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSpec {
    pub id: TimerId,
    pub period: Duration,
    pub repeat: Repeat,
}

impl TimerSpec {
    pub fn repeating(id: TimerId, period: Duration) -> Self {
        Self {
            id,
            period,
            repeat: Repeat::Forever,
        }
    }

    pub fn once(id: TimerId, delay: Duration) -> Self {
        Self {
            id,
            period: delay,
            repeat: Repeat::Once,
        }
    }
}

/// Backend that delivers `Event::TimerFired(id)` on the main context.
pub trait Timers {
    fn arm(&mut self, spec: TimerSpec);

    /// Cancelling an unknown or already-fired id must be a no-op.
    fn cancel(&mut self, id: TimerId);
}

/// Monotonic id source.
#[derive(Debug, Default)]
pub struct TimerIds {
    next: u64,
}

impl TimerIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> TimerId {
        self.next += 1;
        TimerId(self.next)
    }
}

/// Native timer handles a backend keeps alive, keyed by id.
///
/// One-shot entries leave the table when they fire, so the table only ever
/// holds timers that can still fire.
#[derive(Debug)]
pub struct TimerTable<H> {
    live: HashMap<TimerId, (H, Repeat)>,
}

impl<H> Default for TimerTable<H> {
    fn default() -> Self {
        Self {
            live: HashMap::new(),
        }
    }
}

impl<H> TimerTable<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle previously stored under the same id, if any.
    pub fn insert(&mut self, id: TimerId, handle: H, repeat: Repeat) -> Option<H> {
        self.live.insert(id, (handle, repeat)).map(|(old, _)| old)
    }

    /// Record a fire. A one-shot timer is removed and its handle returned.
    pub fn fired(&mut self, id: TimerId) -> Option<H> {
        match self.live.get(&id) {
            Some((_, Repeat::Once)) => self.live.remove(&id).map(|(handle, _)| handle),
            _ => None,
        }
    }

    pub fn remove(&mut self, id: TimerId) -> Option<H> {
        self.live.remove(&id).map(|(handle, _)| handle)
    }

    pub fn drain(&mut self) -> impl Iterator<Item = H> + '_ {
        self.live.drain().map(|(_, (handle, _))| handle)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
