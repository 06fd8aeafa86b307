// macOS application lifecycle: NSApplication setup, action target, run loop.
//
// This is the composition root. It:
//   • Creates the NSApplication singleton (accessory policy, no Dock icon)
//   • Installs the status bar item and the overlay host
//   • Builds the owned `App` state and moves it into the mailbox consumer
//   • Starts the run loop
//
// Menu items, the Skip button and NSTimer blocks all talk to the app only
// by posting an `Event` into the mailbox.

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, ProtocolObject};
use objc2::{define_class, msg_send, DefinedClass, MainThreadMarker, MainThreadOnly};
use objc2_app_kit::{
    NSApplication, NSApplicationActivationPolicy, NSApplicationDelegate, NSButton, NSMenuItem,
};
use objc2_foundation::{NSNotification, NSObject, NSObjectProtocol};
use tracing::{debug, info};

use lookaway_shared::{App, AppConfig, Event, Flow, Mailbox};

use crate::overlay::OverlayWindowHost;
use crate::platform::MacPlatform;
use crate::timers::MacTimers;
use crate::tray;

define_class!(
    /// Receiver of every menu and button action.
    #[unsafe(super(NSObject))]
    #[name = "LookAwayActionTarget"]
    #[thread_kind = MainThreadOnly]
    #[ivars = Mailbox<Event>]
    pub struct ActionTarget;

    unsafe impl NSObjectProtocol for ActionTarget {}

    impl ActionTarget {
        #[unsafe(method(toggleTimer:))]
        fn toggle_timer(&self, _sender: &NSMenuItem) {
            self.ivars().post(Event::ToggleTimer);
        }

        #[unsafe(method(selectInterval:))]
        fn select_interval(&self, sender: &NSMenuItem) {
            // The item tag carries the minutes.
            self.ivars().post(Event::SelectMinutes(sender.tag() as i64));
        }

        #[unsafe(method(skipBreak:))]
        fn skip_break(&self, _sender: &NSButton) {
            self.ivars().post(Event::Skip);
        }

        #[unsafe(method(quitApp:))]
        fn quit_app(&self, _sender: &NSMenuItem) {
            self.ivars().post(Event::Quit);
        }
    }
);

impl ActionTarget {
    fn new(mtm: MainThreadMarker, mailbox: Mailbox<Event>) -> Retained<Self> {
        let this = mtm.alloc::<Self>().set_ivars(mailbox);
        unsafe { msg_send![super(this), init] }
    }

    pub fn as_object(&self) -> &AnyObject {
        self
    }
}

pub struct DelegateIvars {
    config: AppConfig,
    mailbox: Mailbox<Event>,
}

define_class!(
    #[unsafe(super(NSObject))]
    #[name = "LookAwayAppDelegate"]
    #[thread_kind = MainThreadOnly]
    #[ivars = DelegateIvars]
    struct AppDelegate;

    unsafe impl NSObjectProtocol for AppDelegate {}

    unsafe impl NSApplicationDelegate for AppDelegate {
        #[unsafe(method(applicationDidFinishLaunching:))]
        fn did_finish_launching(&self, _notification: &NSNotification) {
            let mtm = self.mtm();
            let ivars = self.ivars();

            let target = ActionTarget::new(mtm, ivars.mailbox.clone());
            let platform = MacPlatform {
                tray: tray::setup(mtm, &target),
                overlay: OverlayWindowHost::new(mtm, target.clone(), ivars.config.overlay_opacity),
                timers: MacTimers::new(ivars.mailbox.clone()),
            };

            // Starts stopped; nothing is restored from a previous run.
            let mut state = App::new(platform, ivars.config.clone());
            ivars.mailbox.set_consumer(move |event| {
                if state.handle(event) == Flow::Quit {
                    NSApplication::sharedApplication(mtm).terminate(None);
                }
            });

            info!("Status item installed; waiting for an interval");
        }

        #[unsafe(method(applicationWillTerminate:))]
        fn will_terminate(&self, _notification: &NSNotification) {
            debug!("Terminating with {} undelivered event(s)", self.ivars().mailbox.pending());
        }
    }
);

impl AppDelegate {
    fn new(mtm: MainThreadMarker, config: AppConfig) -> Retained<Self> {
        let this = mtm.alloc::<Self>().set_ivars(DelegateIvars {
            config,
            mailbox: Mailbox::new(),
        });
        unsafe { msg_send![super(this), init] }
    }
}

pub fn run(config: AppConfig) {
    let mtm = MainThreadMarker::new().expect("LookAway must be run on the main thread");

    let app = NSApplication::sharedApplication(mtm);
    app.setActivationPolicy(NSApplicationActivationPolicy::Accessory);

    let delegate = AppDelegate::new(mtm, config);
    let delegate_proto = ProtocolObject::from_ref(&*delegate);
    app.setDelegate(Some(delegate_proto));

    unsafe { app.run() };
}
