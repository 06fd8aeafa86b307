// Break countdown and the view model rendered by the overlay.

/// Result of advancing the countdown by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting; carries the seconds left.
    Remaining(u32),
    /// Just reached zero. Returned exactly once.
    Expired,
    /// Already finished (expired or skipped) before this tick.
    Finished,
}

/// Fixed-length countdown, one step per second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    finished: bool,
}

impl Countdown {
    /// A zero length is bumped to one second so the view is shown at least once.
    pub fn new(seconds: u32) -> Self {
        let total = seconds.max(1);
        Self {
            total,
            remaining: total,
            finished: false,
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Finished;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.finished = true;
            Tick::Expired
        } else {
            Tick::Remaining(self.remaining)
        }
    }

    /// Finish early. Returns true only if this call finished the countdown.
    pub fn skip(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.finished = true;
        true
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Fraction of the break still ahead, 1.0 at start and 0.0 at expiry.
    pub fn progress(&self) -> f64 {
        f64::from(self.remaining) / f64::from(self.total)
    }
}

pub const BREAK_TITLE: &str = "Please look somewhere else!";
pub const SKIP_LABEL: &str = "Skip";

/// Everything the overlay needs to draw one frame of a break.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakView {
    countdown: Countdown,
}

impl BreakView {
    pub fn new(seconds: u32) -> Self {
        Self {
            countdown: Countdown::new(seconds),
        }
    }

    pub fn title(&self) -> &'static str {
        BREAK_TITLE
    }

    pub fn subtitle(&self) -> String {
        format!(
            "Take a {}-second break to protect your eyes.",
            self.countdown.total()
        )
    }

    pub fn skip_label(&self) -> &'static str {
        SKIP_LABEL
    }

    pub fn remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn progress(&self) -> f64 {
        self.countdown.progress()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn countdown_mut(&mut self) -> &mut Countdown {
        &mut self.countdown
    }
}
