//! Formatting utilities for file sizes and modification dates.

/// Unit symbols for binary size formatting.
const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count as a human-readable string using binary (1024)
/// units, rounded to two decimal places with trailing zeros trimmed.
///
/// Examples: `0 B`, `1023 B`, `1.5 KB`, `1 GB`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", trim_decimal(rounded), SIZE_UNITS[exponent])
}

/// Render a rounded value without trailing decimal zeros (1.50 -> "1.5",
/// 1.00 -> "1").
fn trim_decimal(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format a modification timestamp relative to "now" (both epoch seconds).
///
/// Same calendar day gives `Today HH:MM`, one day prior gives `Yesterday`,
/// under a week gives `N days ago`, anything older gives an absolute date.
/// Calendar days are UTC day numbers.
pub fn format_modified(timestamp: u64, now: u64) -> String {
    let entry_day = timestamp / 86_400;
    let now_day = now / 86_400;

    // Clock skew can put an entry in the future; render it as today.
    let diff_days = now_day.saturating_sub(entry_day);

    match diff_days {
        0 => {
            let hour = (timestamp % 86_400) / 3_600;
            let minute = (timestamp % 3_600) / 60;
            format!("Today {:02}:{:02}", hour, minute)
        }
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", diff_days),
        _ => format_date_absolute(timestamp),
    }
}

/// Format an epoch-seconds timestamp as an absolute date (`Mar 5, 2024`).
///
/// Properly calculates year/month/day accounting for leap years.
fn format_date_absolute(timestamp: u64) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    let days = timestamp / 86_400;
    let mut year = 1970i64;
    let mut remaining_days = days as i64;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 0usize;
    for days_in_month in days_in_months.iter() {
        if remaining_days < *days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    let day = remaining_days + 1;
    format!("{} {}, {}", MONTHS[month], day, year)
}

/// Check if a year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_zero_bytes() {
        assert_eq!(format_size(0), "0 B");
    }

    #[test]
    fn size_below_one_kilobyte() {
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn size_fractional_units_trim_trailing_zeros() {
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1_073_741_824), "1 GB");
        assert_eq!(format_size(1_572_864), "1.5 MB");
    }

    #[test]
    fn size_rounds_to_two_decimals() {
        // 1234 / 1024 = 1.2051... -> 1.21
        assert_eq!(format_size(1234), "1.21 KB");
    }

    #[test]
    fn size_terabyte_range() {
        assert_eq!(format_size(1_099_511_627_776), "1 TB");
    }

    #[test]
    fn modified_same_day() {
        // 2024-01-01 00:00:00 UTC = 1704067200
        let midnight = 1_704_067_200;
        assert_eq!(
            format_modified(midnight + 13 * 3_600 + 45 * 60, midnight + 20 * 3_600),
            "Today 13:45"
        );
    }

    #[test]
    fn modified_yesterday_and_days_ago() {
        let midnight = 1_704_067_200;
        let now = midnight + 12 * 3_600;
        assert_eq!(format_modified(midnight - 3_600, now), "Yesterday");
        assert_eq!(format_modified(midnight - 3 * 86_400, now), "3 days ago");
    }

    #[test]
    fn modified_old_dates_are_absolute() {
        let now = 1_704_067_200 + 12 * 3_600;
        // 2023-11-05 00:00:00 UTC = 1699142400
        assert_eq!(format_modified(1_699_142_400, now), "Nov 5, 2023");
        // Unix epoch
        assert_eq!(format_modified(0, now), "Jan 1, 1970");
    }

    #[test]
    fn modified_future_timestamp_renders_as_today() {
        let now = 1_704_067_200;
        assert_eq!(format_modified(now + 86_400, now), "Today 00:00");
    }

    #[test]
    fn absolute_date_handles_leap_years() {
        // 2024-02-29 00:00:00 UTC = 1709164800
        assert_eq!(format_date_absolute(1_709_164_800), "Feb 29, 2024");
        // 2024-03-01 00:00:00 UTC = 1709251200
        assert_eq!(format_date_absolute(1_709_251_200), "Mar 1, 2024");
    }
}
