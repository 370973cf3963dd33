use chrono::{DateTime, Local};

pub fn format_date(time: DateTime<Local>) -> String {
    time.format("%d.%m.%Y").to_string()
}

pub fn format_clock(time: DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

pub fn time_ago(then: DateTime<Local>, now: DateTime<Local>) -> String {
    let total_secs = (now - then).num_seconds();
    if total_secs < 0 {
        return "in the future".to_string();
    }

    let mins = total_secs / 60;
    let hours = total_secs / 3600;
    let days = total_secs / 86400;

    if mins < 1 {
        "just now".to_string()
    } else if hours < 1 {
        format!("{} min ago", mins)
    } else if hours == 1 {
        "1 hr ago".to_string()
    } else if hours < 24 {
        format!("{} hrs ago", hours)
    } else if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{} days ago", days)
    }
}

/// Greeting for the dashboard header based on the hour of day.
pub fn greeting(now: DateTime<Local>) -> &'static str {
    use chrono::Timelike;
    match now.hour() {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}
