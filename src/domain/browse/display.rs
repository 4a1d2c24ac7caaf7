use crate::platform::Platform;

/// Folder names that render through the i18n catalog instead of verbatim.
/// "all" is the virtual everything-filter; the rest are the reserved folders.
const FOLDER_LABEL_KEYS: [(&str, &str); 4] = [
    ("all", "folders.all"),
    ("inbox", "folders.inbox"),
    ("transactions", "folders.transactions"),
    ("exports", "folders.exports"),
];

/// i18n key for a reserved folder name, if it has one. Matching is exact and
/// case-sensitive.
pub fn folder_label_key(name: &str) -> Option<&'static str> {
    FOLDER_LABEL_KEYS
        .iter()
        .find(|(folder, _)| *folder == name)
        .map(|(_, key)| *key)
}

/// Row label for an entry or breadcrumb name.
///
/// Reserved names go through the translation catalog; everything else
/// renders verbatim. Total: a missing catalog entry falls back to the raw
/// name rather than leaking the key.
pub fn display_name(platform: &Platform, name: &str) -> String {
    match folder_label_key(name) {
        Some(key) => platform
            .translator()
            .translate(key)
            .unwrap_or_else(|| name.to_string()),
        None => name.to_string(),
    }
}

/// Compact decimal size for the listing's size column (e.g. "1.2 MB").
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if bytes < 1_000 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1_000.0 && unit < UNITS.len() - 1 {
        value /= 1_000.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// `YYYY-MM-DD HH:MM` cell text for an optional unix-seconds timestamp.
/// Unknown or pre-epoch instants render as "-".
pub fn format_timestamp(timestamp: Option<i64>) -> String {
    let ts = match timestamp {
        Some(ts) if ts >= 0 => ts,
        _ => return "-".to_string(),
    };

    let days = ts / 86_400;
    let mut year = 1970i64;
    let mut remaining_days = days;

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

    let mut month = 1;
    for days_in_month in days_in_months {
        if remaining_days < days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }
    let day = remaining_days + 1;

    let hour = (ts % 86_400) / 3_600;
    let minute = (ts % 3_600) / 60;

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        year, month, day, hour, minute
    )
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
