//! Display formatting for weather reports.

use chrono::{Local, TimeZone, Timelike};

/// Icon asset URL for a provider icon id.
pub fn icon_url(icon_id: &str) -> String {
    format!("https://openweathermap.org/img/wn/{}@2x.png", icon_id)
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Temperature as displayed: rounded to the nearest whole degree.
pub fn rounded_temperature(temperature: f64) -> i64 {
    temperature.round() as i64
}

/// Format an epoch-seconds timestamp as a clock time in the local timezone,
/// `H:MM:SS` with a non-zero-padded hour.
pub fn format_clock_time(epoch_secs: i64) -> String {
    let Some(time) = Local.timestamp_opt(epoch_secs, 0).earliest() else {
        return String::new();
    };

    format!("{}:{:02}:{:02}", time.hour(), time.minute(), time.second())
}
