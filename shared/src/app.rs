// Status controller: the owned application state driven by the event loop.
//
// `App` is created once in the composition root and moved into the mailbox
// consumer. Every menu click, button press and timer fire arrives here as an
// `Event`; nothing else mutates scheduler or overlay state.

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::interval::Interval;
use crate::overlay::{OverlayHost, OverlayPresenter};
use crate::scheduler::ReminderScheduler;
use crate::timer::{TimerId, TimerIds, Timers};

pub const START_TITLE: &str = "Start Timer";
pub const STOP_TITLE: &str = "Stop Timer";

/// Status-bar menu surface.
pub trait StatusMenu {
    /// Relabel the start/stop item.
    fn set_toggle_title(&mut self, title: &str);
    /// Enable or disable the "Select Time" submenu.
    fn set_interval_menu_enabled(&mut self, enabled: bool);
}

/// Everything the controller needs from the native side.
pub trait Platform: Timers + OverlayHost + StatusMenu {}

impl<T: Timers + OverlayHost + StatusMenu + ?Sized> Platform for T {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// "Start Timer" / "Stop Timer" clicked.
    ToggleTimer,
    /// An interval item clicked; carries its minutes (menu item tag).
    SelectMinutes(i64),
    TimerFired(TimerId),
    /// "Skip" clicked on the overlay.
    Skip,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<P: Platform> {
    platform: P,
    config: AppConfig,
    scheduler: ReminderScheduler,
    presenter: OverlayPresenter,
    ids: TimerIds,
}

impl<P: Platform> App<P> {
    /// Starts stopped, with the interval submenu disabled until "Start Timer".
    pub fn new(mut platform: P, config: AppConfig) -> Self {
        platform.set_toggle_title(START_TITLE);
        platform.set_interval_menu_enabled(false);
        Self {
            platform,
            config,
            scheduler: ReminderScheduler::new(),
            presenter: OverlayPresenter::new(),
            ids: TimerIds::new(),
        }
    }

    pub fn handle(&mut self, event: Event) -> Flow {
        debug!("Handling {:?}", event);
        match event {
            Event::ToggleTimer => self.toggle(),
            Event::SelectMinutes(minutes) => match Interval::from_minutes(minutes) {
                Some(interval) => self.start(interval),
                None => debug!("Ignoring unmapped interval selection: {}", minutes),
            },
            Event::TimerFired(id) => self.timer_fired(id),
            Event::Skip => {
                self.presenter.dismiss(&mut self.platform);
            }
            Event::Quit => {
                self.scheduler.stop(&mut self.platform);
                self.presenter.dismiss(&mut self.platform);
                info!("Quitting");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn toggle(&mut self) {
        if self.scheduler.is_running() {
            self.stop();
        } else {
            // Nothing is armed until an interval is picked.
            self.platform.set_interval_menu_enabled(true);
        }
    }

    /// (Re)arm the reminder and show the first break right away.
    pub fn start(&mut self, interval: Interval) {
        let id = self.ids.next_id();
        self.scheduler.start(&mut self.platform, id, interval);
        self.platform.set_toggle_title(STOP_TITLE);
        self.show_break();
    }

    pub fn stop(&mut self) {
        self.scheduler.stop(&mut self.platform);
        self.platform.set_toggle_title(START_TITLE);
    }

    fn timer_fired(&mut self, id: TimerId) {
        if self.scheduler.owns(id) {
            self.show_break();
        } else if self.presenter.owns(id) {
            self.presenter.tick(&mut self.platform, id);
        } else {
            debug!("Dropping fire from cancelled timer {:?}", id);
        }
    }

    fn show_break(&mut self) {
        if self.presenter.is_shown() {
            debug!("Reminder fired during a break; keeping current overlay");
            return;
        }
        let tick = self.ids.next_id();
        self.presenter
            .present(&mut self.platform, tick, self.config.break_seconds);
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn interval(&self) -> Option<Interval> {
        self.scheduler.interval()
    }

    pub fn overlay(&self) -> &OverlayPresenter {
        &self.presenter
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}
