//! 24-hour to 12-hour clock conversion for prayer times.

use crate::error::TimeFormatError;

/// Shown wherever a time is absent or cannot be converted.
pub const UNAVAILABLE: &str = "N/A";

/// Converts `"H:MM"` / `"HH:MM"` (24-hour) into `"H:MM AM|PM"`.
///
/// Hours 0 and 12 display as `12`. Minutes are zero-padded to two digits,
/// so `"9:5"` becomes `"9:05 AM"`.
pub fn format_12_hour(input: &str) -> Result<String, TimeFormatError> {
    let (hours, minutes) = input
        .split_once(':')
        .ok_or_else(|| TimeFormatError::MissingSeparator(input.to_string()))?;

    let hours = parse_component(hours)?;
    let minutes = parse_component(minutes)?;

    if hours > 23 {
        return Err(TimeFormatError::HourOutOfRange(hours));
    }
    if minutes > 59 {
        return Err(TimeFormatError::MinuteOutOfRange(minutes));
    }

    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };

    Ok(format!("{display_hours}:{minutes:02} {suffix}"))
}

/// Formatted time, or [`UNAVAILABLE`] when the value is missing or malformed.
pub fn display_time(raw: Option<&str>) -> String {
    match raw.map(format_12_hour) {
        Some(Ok(formatted)) => formatted,
        Some(Err(e)) => {
            tracing::debug!(error = %e, code = e.kind().code(), "unformattable time");
            UNAVAILABLE.to_string()
        }
        None => UNAVAILABLE.to_string(),
    }
}

fn parse_component(part: &str) -> Result<u32, TimeFormatError> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeFormatError::NotANumber(part.to_string()));
    }
    part.parse()
        .map_err(|_| TimeFormatError::NotANumber(part.to_string()))
}
