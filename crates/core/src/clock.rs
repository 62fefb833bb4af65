//! Wall-clock formatting and parsing.
//!
//! History records carry the anchor as `HH:mm` text; result cards show a
//! 12-hour `h:mm AM/PM` form.

use chrono::NaiveTime;

/// Parse a strict `HH:mm` string (two-digit hour `00-23`, two-digit minute
/// `00-59`).
///
/// Returns `None` for anything else, including `"7:00"`, `"07:00:00"` and
/// `"24:00"`.
///
/// ```
/// use sleepwise_core::clock::parse_hh_mm;
///
/// assert!(parse_hh_mm("23:00").is_some());
/// assert!(parse_hh_mm("7:00").is_none());
/// ```
pub fn parse_hh_mm(text: &str) -> Option<NaiveTime> {
    let bytes = text.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }

    let hour = two_digits(bytes[0], bytes[1])?;
    let minute = two_digits(bytes[3], bytes[4])?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn two_digits(tens: u8, ones: u8) -> Option<u32> {
    if !tens.is_ascii_digit() || !ones.is_ascii_digit() {
        return None;
    }
    Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
}

/// Format as `HH:mm`, dropping seconds.
pub fn format_hh_mm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Format as a 12-hour clock, e.g. `"9:45 PM"`.
pub fn format_12h(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Serde adapter for `NaiveTime` fields carried as `HH:mm` strings.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hh_mm(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_hh_mm(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid HH:mm time '{text}'")))
    }
}
