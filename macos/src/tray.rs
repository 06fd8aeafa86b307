// macOS system tray (menu bar status item) using NSStatusBar.
//
// Creates an NSStatusItem with an eye icon and a menu containing:
//   • Start Timer / Stop Timer   (⌘T)
//   • Select Time ▸ 10/20/30/40/60 Min   (disabled until Start is chosen)
//   • Quit   (⌘Q)

use objc2::rc::Retained;
use objc2::runtime::Sel;
use objc2::{sel, MainThreadMarker};
use objc2_app_kit::{NSImage, NSMenu, NSMenuItem, NSSquareStatusItemLength, NSStatusBar, NSStatusItem};
use objc2_foundation::NSString;
use tracing::warn;

use lookaway_shared::app::START_TITLE;
use lookaway_shared::Interval;

use crate::app::ActionTarget;

const TOGGLE_TAG: isize = 1;

pub struct Tray {
    mtm: MainThreadMarker,
    item: Retained<NSStatusItem>,
    toggle: Retained<NSMenuItem>,
    intervals: Retained<NSMenuItem>,
}

/// Set up the status item and its menu.
pub fn setup(mtm: MainThreadMarker, target: &ActionTarget) -> Tray {
    let status_bar = NSStatusBar::systemStatusBar(mtm);
    let item = status_bar.statusItemWithLength(NSSquareStatusItemLength);

    if let Some(button) = item.button(mtm) {
        let icon = NSImage::imageWithSystemSymbolName_accessibilityDescription(
            &NSString::from_str("eye"),
            Some(&NSString::from_str("LookAway")),
        );
        match icon {
            Some(icon) => button.setImage(Some(&icon)),
            None => {
                // SF Symbols missing (pre-11 macOS)
                warn!("SF Symbol 'eye' unavailable; using text icon");
                button.setTitle(&NSString::from_str("👁"));
            }
        }
    }

    let menu = NSMenu::new(mtm);
    // Enabled state is driven by the controller, not by responder lookup.
    menu.setAutoenablesItems(false);

    let toggle = menu_item(mtm, START_TITLE, Some(sel!(toggleTimer:)), "t", target);
    toggle.setTag(TOGGLE_TAG);
    menu.addItem(&toggle);

    let intervals = menu_item(mtm, "Select Time", None, "", target);
    intervals.setEnabled(false);
    let submenu = NSMenu::new(mtm);
    submenu.setAutoenablesItems(false);
    for interval in Interval::ALL {
        let entry = menu_item(mtm, &interval.label(), Some(sel!(selectInterval:)), "", target);
        entry.setTag(interval.minutes() as isize);
        submenu.addItem(&entry);
    }
    intervals.setSubmenu(Some(&submenu));
    menu.addItem(&intervals);

    menu.addItem(&NSMenuItem::separatorItem(mtm));
    menu.addItem(&menu_item(mtm, "Quit", Some(sel!(quitApp:)), "q", target));

    item.setMenu(Some(&menu));

    Tray {
        mtm,
        item,
        toggle,
        intervals,
    }
}

impl Tray {
    pub fn set_toggle_title(&self, title: &str) {
        self.toggle.setTitle(&NSString::from_str(title));
    }

    pub fn set_intervals_enabled(&self, enabled: bool) {
        self.intervals.setEnabled(enabled);
    }
}

impl Drop for Tray {
    fn drop(&mut self) {
        NSStatusBar::systemStatusBar(self.mtm).removeStatusItem(&self.item);
    }
}

fn menu_item(
    mtm: MainThreadMarker,
    title: &str,
    action: Option<Sel>,
    key: &str,
    target: &ActionTarget,
) -> Retained<NSMenuItem> {
    let item = unsafe {
        NSMenuItem::initWithTitle_action_keyEquivalent(
            mtm.alloc::<NSMenuItem>(),
            &NSString::from_str(title),
            action,
            &NSString::from_str(key),
        )
    };
    if action.is_some() {
        unsafe { item.setTarget(Some(target.as_object())) };
    }
    item
}
