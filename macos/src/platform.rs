// Glue between the shared controller traits and the AppKit pieces.

use lookaway_shared::{BreakView, OverlayHost, StatusMenu, TimerId, TimerSpec, Timers};

use crate::overlay::OverlayWindowHost;
use crate::timers::MacTimers;
use crate::tray::Tray;

pub struct MacPlatform {
    pub tray: Tray,
    pub overlay: OverlayWindowHost,
    pub timers: MacTimers,
}

impl Timers for MacPlatform {
    fn arm(&mut self, spec: TimerSpec) {
        self.timers.arm(spec);
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.cancel(id);
    }
}

impl OverlayHost for MacPlatform {
    fn open(&mut self, view: &BreakView) {
        self.overlay.open(view);
    }

    fn refresh(&mut self, view: &BreakView) {
        self.overlay.refresh(view);
    }

    fn close(&mut self) {
        self.overlay.close();
    }
}

impl StatusMenu for MacPlatform {
    fn set_toggle_title(&mut self, title: &str) {
        self.tray.set_toggle_title(title);
    }

    fn set_interval_menu_enabled(&mut self, enabled: bool) {
        self.tray.set_intervals_enabled(enabled);
    }
}
