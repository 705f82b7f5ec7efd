use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error raised for a wall-clock string that is not well-formed `"HH:MM"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid wall-clock time {input:?}: expected \"HH:MM\" with hour 00-23 and minute 00-59")]
pub struct ParseTimeError {
    pub input: String,
}

/// Wall-clock time of day, stored as minutes since midnight.
///
/// Timetable sessions carry 24-hour `"HH:MM"` strings on the wire; this type
/// parses them once so interval reasoning is plain integer comparison. No
/// timezone, no seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Create from an hour and minute. Returns `None` outside 0-23 / 0-59.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(hour * 60 + minute))
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError {
            input: s.to_string(),
        };

        let (hour, minute) = s.split_once(':').ok_or_else(err)?;
        if hour.len() != 2
            || minute.len() != 2
            || !hour.bytes().all(|b| b.is_ascii_digit())
            || !minute.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }

        let hour: u16 = hour.parse().map_err(|_| err())?;
        let minute: u16 = minute.parse().map_err(|_| err())?;
        Self::from_hm(hour, minute).ok_or_else(err)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

// Serialized as the `"HH:MM"` wire form rather than raw minutes, so conflict
// reports stay directly readable by the frontend.
impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
