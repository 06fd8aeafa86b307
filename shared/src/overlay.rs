// Overlay presenter: Hidden/Shown state machine around the break window.
//
// The presenter owns the live `BreakView` and its one-second tick timer.
// `present` and `dismiss` are idempotent: at most one window is open and it
// is closed exactly once.

use std::time::Duration;

use tracing::{debug, info};

use crate::countdown::{BreakView, Tick};
use crate::timer::{TimerId, TimerSpec, Timers};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Native side of the overlay: one full-screen window at a time.
pub trait OverlayHost {
    /// Create and order front the window for `view`.
    fn open(&mut self, view: &BreakView);
    /// Redraw countdown text and progress.
    fn refresh(&mut self, view: &BreakView);
    /// Order out and release the window.
    fn close(&mut self);
}

struct ActiveBreak {
    view: BreakView,
    tick_timer: TimerId,
}

#[derive(Default)]
pub struct OverlayPresenter {
    active: Option<ActiveBreak>,
}

impl OverlayPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shown(&self) -> bool {
        self.active.is_some()
    }

    pub fn view(&self) -> Option<&BreakView> {
        self.active.as_ref().map(|a| &a.view)
    }

    /// Whether `id` is the tick timer of the break on screen.
    pub fn owns(&self, id: TimerId) -> bool {
        matches!(&self.active, Some(a) if a.tick_timer == id)
    }

    /// Show a fresh break. Returns false (and does nothing) if one is already shown.
    pub fn present<P>(&mut self, platform: &mut P, tick_timer: TimerId, seconds: u32) -> bool
    where
        P: Timers + OverlayHost + ?Sized,
    {
        if self.active.is_some() {
            debug!("Overlay already shown; ignoring present");
            return false;
        }

        let view = BreakView::new(seconds);
        platform.arm(TimerSpec::repeating(tick_timer, TICK_PERIOD));
        platform.open(&view);
        info!("Overlay shown for a {}s break", view.countdown().total());
        self.active = Some(ActiveBreak { view, tick_timer });
        true
    }

    /// Tear down the break. Returns false if nothing was shown.
    pub fn dismiss<P>(&mut self, platform: &mut P) -> bool
    where
        P: Timers + OverlayHost + ?Sized,
    {
        let Some(mut active) = self.active.take() else {
            debug!("Overlay already hidden; ignoring dismiss");
            return false;
        };

        active.view.countdown_mut().skip();
        platform.cancel(active.tick_timer);
        platform.close();
        info!(
            "Overlay dismissed with {}s left",
            active.view.remaining()
        );
        true
    }

    /// Advance the countdown for a fire of `id`. Stale ids are ignored.
    pub fn tick<P>(&mut self, platform: &mut P, id: TimerId)
    where
        P: Timers + OverlayHost + ?Sized,
    {
        let Some(active) = self.active.as_mut().filter(|a| a.tick_timer == id) else {
            debug!("Dropping tick from stale timer {:?}", id);
            return;
        };

        match active.view.countdown_mut().tick() {
            Tick::Remaining(left) => {
                debug!("Break countdown: {}s left", left);
                platform.refresh(&active.view);
            }
            Tick::Expired => {
                platform.refresh(&active.view);
                self.dismiss(platform);
            }
            // `dismiss` clears `active`, so a finished countdown never ticks here.
            Tick::Finished => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        Arm(TimerId),
        Cancel(TimerId),
        Open(u32),
        Refresh(u32),
        Close,
    }

    #[derive(Default)]
    struct Host {
        calls: Vec<Call>,
    }

    impl Timers for Host {
        fn arm(&mut self, spec: TimerSpec) {
            self.calls.push(Call::Arm(spec.id));
        }

        fn cancel(&mut self, id: TimerId) {
            self.calls.push(Call::Cancel(id));
        }
    }

    impl OverlayHost for Host {
        fn open(&mut self, view: &BreakView) {
            self.calls.push(Call::Open(view.remaining()));
        }

        fn refresh(&mut self, view: &BreakView) {
            self.calls.push(Call::Refresh(view.remaining()));
        }

        fn close(&mut self) {
            self.calls.push(Call::Close);
        }
    }

    #[test]
    fn test_present_twice_opens_one_window() {
        let mut host = Host::default();
        let mut presenter = OverlayPresenter::new();
        assert!(presenter.present(&mut host, TimerId(1), 10));
        assert!(!presenter.present(&mut host, TimerId(2), 10));

        assert_eq!(host.calls, vec![Call::Arm(TimerId(1)), Call::Open(10)]);
        assert!(presenter.owns(TimerId(1)));
        assert!(!presenter.owns(TimerId(2)));
    }

    #[test]
    fn test_dismiss_while_hidden_is_noop() {
        let mut host = Host::default();
        let mut presenter = OverlayPresenter::new();
        assert!(!presenter.dismiss(&mut host));
        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_countdown_dismisses_at_zero() {
        let mut host = Host::default();
        let mut presenter = OverlayPresenter::new();
        presenter.present(&mut host, TimerId(5), 3);
        host.calls.clear();

        presenter.tick(&mut host, TimerId(5));
        presenter.tick(&mut host, TimerId(5));
        assert!(presenter.is_shown());
        presenter.tick(&mut host, TimerId(5));
        assert!(!presenter.is_shown());

        assert_eq!(
            host.calls,
            vec![
                Call::Refresh(2),
                Call::Refresh(1),
                Call::Refresh(0),
                Call::Cancel(TimerId(5)),
                Call::Close,
            ]
        );
    }

    #[test]
    fn test_skip_then_late_tick_closes_once() {
        let mut host = Host::default();
        let mut presenter = OverlayPresenter::new();
        presenter.present(&mut host, TimerId(9), 10);
        presenter.tick(&mut host, TimerId(9));
        host.calls.clear();

        assert!(presenter.dismiss(&mut host));
        presenter.tick(&mut host, TimerId(9));
        assert!(!presenter.dismiss(&mut host));

        assert_eq!(host.calls, vec![Call::Cancel(TimerId(9)), Call::Close]);
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let mut host = Host::default();
        let mut presenter = OverlayPresenter::new();
        presenter.present(&mut host, TimerId(2), 10);
        host.calls.clear();

        presenter.tick(&mut host, TimerId(1));
        assert!(host.calls.is_empty());
        assert_eq!(presenter.view().map(|v| v.remaining()), Some(10));
    }
}
