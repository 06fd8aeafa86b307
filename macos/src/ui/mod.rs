pub mod theme;

use objc2::rc::Retained;
use objc2::MainThreadMarker;
use objc2_app_kit::{NSColor, NSFont, NSTextAlignment, NSTextField};
use objc2_foundation::NSString;

use theme::CLR_FG;

pub fn color(c: (f64, f64, f64), alpha: f64) -> Retained<NSColor> {
    NSColor::colorWithRed_green_blue_alpha(c.0, c.1, c.2, alpha)
}

/// Non-editable, centred, transparent label.
pub fn make_label(mtm: MainThreadMarker, text: &str, size: f64, bold: bool) -> Retained<NSTextField> {
    let label = NSTextField::labelWithString(&NSString::from_str(text), mtm);
    label.setBezeled(false);
    label.setDrawsBackground(false);
    label.setEditable(false);
    label.setSelectable(false);
    label.setAlignment(NSTextAlignment::Center);

    let font = if bold {
        NSFont::boldSystemFontOfSize(size)
    } else {
        NSFont::systemFontOfSize(size)
    };
    label.setFont(Some(&font));
    label.setTextColor(Some(&color(CLR_FG, 1.0)));

    label
}
