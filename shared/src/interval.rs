// Reminder intervals offered in the status menu.

use std::fmt;
use std::time::Duration;

/// One of the fixed reminder periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    Ten,
    Twenty,
    Thirty,
    Forty,
    Sixty,
}

impl Interval {
    /// Menu order.
    pub const ALL: [Interval; 5] = [
        Interval::Ten,
        Interval::Twenty,
        Interval::Thirty,
        Interval::Forty,
        Interval::Sixty,
    ];

    pub fn minutes(self) -> u64 {
        match self {
            Interval::Ten => 10,
            Interval::Twenty => 20,
            Interval::Thirty => 30,
            Interval::Forty => 40,
            Interval::Sixty => 60,
        }
    }

    pub fn period(self) -> Duration {
        Duration::from_secs(self.minutes() * 60)
    }

    /// Menu item title, e.g. "20 Min".
    pub fn label(self) -> String {
        format!("{} Min", self.minutes())
    }

    /// Anything outside the fixed set maps to `None`.
    pub fn from_minutes(minutes: i64) -> Option<Interval> {
        Interval::ALL
            .into_iter()
            .find(|i| i.minutes() as i64 == minutes)
    }

    pub fn from_label(label: &str) -> Option<Interval> {
        Interval::ALL.into_iter().find(|i| i.label() == label)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_set() {
        let minutes: Vec<u64> = Interval::ALL.iter().map(|i| i.minutes()).collect();
        assert_eq!(minutes, vec![10, 20, 30, 40, 60]);
    }

    #[test]
    fn test_period_is_minutes() {
        assert_eq!(Interval::Forty.period(), Duration::from_secs(2400));
        assert_eq!(Interval::Sixty.period(), Duration::from_secs(3600));
    }

    #[test]
    fn test_from_minutes_rejects_unmapped() {
        assert_eq!(Interval::from_minutes(30), Some(Interval::Thirty));
        assert_eq!(Interval::from_minutes(0), None);
        assert_eq!(Interval::from_minutes(15), None);
        assert_eq!(Interval::from_minutes(-10), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Interval::Ten.label(), "10 Min");
        assert_eq!(Interval::from_label("60 Min"), Some(Interval::Sixty));
        assert_eq!(Interval::from_label("Custom Time"), None);
    }
}
