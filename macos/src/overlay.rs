// Full-screen break overlay window.
//
// One borderless window covering the main screen, at screen-saver level,
// visible on every Space and next to full-screen apps. It hosts the break
// view: title, subtitle, circular progress, seconds left and a Skip button.
//
// Whether a window should exist is decided by the shared presenter; this
// host only builds, updates and releases it.

use objc2::rc::Retained;
use objc2::{define_class, msg_send, sel, MainThreadMarker, MainThreadOnly};
use objc2_app_kit::{
    NSApplication, NSBackingStoreType, NSButton, NSFont, NSProgressIndicator,
    NSProgressIndicatorStyle, NSResponder, NSScreen, NSScreenSaverWindowLevel, NSTextField,
    NSView, NSWindow, NSWindowCollectionBehavior, NSWindowStyleMask,
};
use objc2_foundation::{NSObject, NSObjectProtocol, NSPoint, NSRect, NSSize, NSString};
use tracing::{debug, warn};

use lookaway_shared::BreakView;

use crate::app::ActionTarget;
use crate::ui::theme::*;
use crate::ui::{color, make_label};

define_class!(
    // Borderless windows refuse key status by default; the overlay must take
    // it so the Skip button and keyboard focus work.
    #[unsafe(super(NSWindow, NSResponder, NSObject))]
    #[name = "LookAwayOverlayWindow"]
    #[thread_kind = MainThreadOnly]
    struct OverlayWindow;

    unsafe impl NSObjectProtocol for OverlayWindow {}

    impl OverlayWindow {
        #[unsafe(method(canBecomeKeyWindow))]
        fn can_become_key_window(&self) -> bool {
            true
        }

        #[unsafe(method(canBecomeMainWindow))]
        fn can_become_main_window(&self) -> bool {
            true
        }
    }
);

impl OverlayWindow {
    fn new(mtm: MainThreadMarker, frame: NSRect) -> Retained<Self> {
        let this = mtm.alloc::<Self>();
        unsafe {
            msg_send![
                super(this),
                initWithContentRect: frame,
                styleMask: NSWindowStyleMask::Borderless,
                backing: NSBackingStoreType::Buffered,
                defer: false
            ]
        }
    }
}

struct Shown {
    window: Retained<OverlayWindow>,
    count: Retained<NSTextField>,
    ring: Retained<NSProgressIndicator>,
}

pub struct OverlayWindowHost {
    mtm: MainThreadMarker,
    target: Retained<ActionTarget>,
    opacity: f64,
    shown: Option<Shown>,
}

impl OverlayWindowHost {
    pub fn new(mtm: MainThreadMarker, target: Retained<ActionTarget>, opacity: f64) -> Self {
        Self {
            mtm,
            target,
            opacity,
            shown: None,
        }
    }

    pub fn open(&mut self, view: &BreakView) {
        if self.shown.is_some() {
            warn!("Overlay window already open");
            return;
        }

        let mtm = self.mtm;
        let Some(screen) = NSScreen::mainScreen(mtm) else {
            warn!("No main screen; break overlay not shown");
            return;
        };
        let frame = screen.frame();

        let window = OverlayWindow::new(mtm, frame);
        unsafe { window.setReleasedWhenClosed(false) };
        window.setLevel(NSScreenSaverWindowLevel);
        window.setOpaque(false);
        window.setBackgroundColor(Some(&color(CLR_BACKDROP, self.opacity)));
        window.setCollectionBehavior(
            NSWindowCollectionBehavior::CanJoinAllSpaces
                | NSWindowCollectionBehavior::FullScreenAuxiliary,
        );
        window.setIgnoresMouseEvents(false);

        // Content rect is the window's own coordinate space.
        let bounds = NSRect::new(NSPoint::new(0.0, 0.0), frame.size);
        let content = NSView::initWithFrame(mtm.alloc::<NSView>(), bounds);
        let width = bounds.size.width;

        // Layout cursor: y starts at the top of the centred stack and
        // decreases. In AppKit y=0 is at the bottom.
        let mut y = (bounds.size.height + STACK_H) / 2.0;

        y -= TITLE_H;
        let title = make_label(mtm, view.title(), FONT_SIZE_TITLE, true);
        title.setFrame(NSRect::new(NSPoint::new(0.0, y), NSSize::new(width, TITLE_H)));
        content.addSubview(&title);

        y -= GAP + SUBTITLE_H;
        let subtitle = make_label(mtm, &view.subtitle(), FONT_SIZE_NORMAL, false);
        subtitle.setTextColor(Some(&color(CLR_MUTED, 1.0)));
        subtitle.setFrame(NSRect::new(NSPoint::new(0.0, y), NSSize::new(width, SUBTITLE_H)));
        content.addSubview(&subtitle);

        y -= GAP + RING_SIZE;
        let ring_x = (width - RING_SIZE) / 2.0;
        let ring = NSProgressIndicator::initWithFrame(
            mtm.alloc::<NSProgressIndicator>(),
            NSRect::new(NSPoint::new(ring_x, y), NSSize::new(RING_SIZE, RING_SIZE)),
        );
        // A determinate spinning indicator draws as a filling circle.
        ring.setStyle(NSProgressIndicatorStyle::Spinning);
        ring.setIndeterminate(false);
        ring.setMinValue(0.0);
        ring.setMaxValue(1.0);
        ring.setDoubleValue(view.progress());
        content.addSubview(&ring);

        let count = make_label(mtm, &view.remaining().to_string(), FONT_SIZE_COUNT, true);
        count.setFrame(NSRect::new(
            NSPoint::new(ring_x, y + (RING_SIZE - COUNT_H) / 2.0),
            NSSize::new(RING_SIZE, COUNT_H),
        ));
        content.addSubview(&count);

        y -= GAP + BUTTON_H;
        let skip = unsafe {
            NSButton::buttonWithTitle_target_action(
                &NSString::from_str(view.skip_label()),
                Some(self.target.as_object()),
                Some(sel!(skipBreak:)),
                mtm,
            )
        };
        skip.setFont(Some(&NSFont::boldSystemFontOfSize(FONT_SIZE_BUTTON)));
        skip.setFrame(NSRect::new(
            NSPoint::new((width - BUTTON_W) / 2.0, y),
            NSSize::new(BUTTON_W, BUTTON_H),
        ));
        content.addSubview(&skip);

        window.setContentView(Some(&content));
        window.makeKeyAndOrderFront(None);
        NSApplication::sharedApplication(mtm).activate();

        debug!(
            "Overlay window ordered front ({}x{})",
            frame.size.width, frame.size.height
        );
        self.shown = Some(Shown {
            window,
            count,
            ring,
        });
    }

    pub fn refresh(&mut self, view: &BreakView) {
        if let Some(shown) = &self.shown {
            shown
                .count
                .setStringValue(&NSString::from_str(&view.remaining().to_string()));
            shown.ring.setDoubleValue(view.progress());
        }
    }

    pub fn close(&mut self) {
        if let Some(shown) = self.shown.take() {
            shown.window.orderOut(None);
            debug!("Overlay window ordered out");
        }
    }
}
