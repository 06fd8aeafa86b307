// NSTimer-backed implementation of the shared `Timers` trait.
//
// Timers are scheduled on the main run loop. A fire only posts
// `Event::TimerFired(id)` into the mailbox; the controller decides what the
// fire means and drops fires of timers it already cancelled. A one-shot
// timer drops its table entry when it fires.

use std::cell::RefCell;
use std::ptr::NonNull;
use std::rc::Rc;

use block2::RcBlock;
use objc2::rc::Retained;
use objc2_foundation::NSTimer;
use tracing::debug;

use lookaway_shared::{Event, Mailbox, Repeat, TimerId, TimerSpec, TimerTable, Timers};

pub struct MacTimers {
    mailbox: Mailbox<Event>,
    live: Rc<RefCell<TimerTable<Retained<NSTimer>>>>,
}

impl MacTimers {
    pub fn new(mailbox: Mailbox<Event>) -> Self {
        Self {
            mailbox,
            live: Rc::new(RefCell::new(TimerTable::new())),
        }
    }
}

impl Timers for MacTimers {
    fn arm(&mut self, spec: TimerSpec) {
        let id = spec.id;
        let mailbox = self.mailbox.clone();
        let live = Rc::clone(&self.live);
        let block = RcBlock::new(move |_timer: NonNull<NSTimer>| {
            // The run loop keeps the timer alive for the rest of this fire.
            let finished = live.borrow_mut().fired(id);
            drop(finished);
            mailbox.post(Event::TimerFired(id));
        });

        let repeats = spec.repeat == Repeat::Forever;
        let timer = unsafe {
            NSTimer::scheduledTimerWithTimeInterval_repeats_block(
                spec.period.as_secs_f64(),
                repeats,
                &block,
            )
        };
        debug!(
            "NSTimer {:?} armed: every {:?}, repeats={}",
            id, spec.period, repeats
        );

        let mut live = self.live.borrow_mut();
        if let Some(previous) = live.insert(id, timer, spec.repeat) {
            previous.invalidate();
        }
        debug!("{} NSTimer(s) live", live.len());
    }

    fn cancel(&mut self, id: TimerId) {
        let removed = self.live.borrow_mut().remove(id);
        if let Some(timer) = removed {
            timer.invalidate();
            debug!("NSTimer {:?} invalidated", id);
        }
    }
}

impl Drop for MacTimers {
    fn drop(&mut self) {
        let timers: Vec<_> = self.live.borrow_mut().drain().collect();
        for timer in timers {
            timer.invalidate();
        }
    }
}
