// Platform-independent core of LookAway.
//
// Everything that decides *when* a break happens and *what* the break view
// shows lives here; the native front end only renders and forwards input.

pub mod app;
pub mod config;
pub mod countdown;
pub mod dispatch;
pub mod error;
pub mod interval;
pub mod overlay;
pub mod scheduler;
pub mod timer;

pub use app::{App, Event, Flow, Platform, StatusMenu};
pub use config::AppConfig;
pub use countdown::{BreakView, Countdown, Tick};
pub use dispatch::Mailbox;
pub use error::ConfigError;
pub use interval::Interval;
pub use overlay::{OverlayHost, OverlayPresenter};
pub use scheduler::ReminderScheduler;
pub use timer::{Repeat, TimerId, TimerIds, TimerSpec, TimerTable, Timers};
