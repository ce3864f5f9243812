//! Time axis labels that get coarser as the tick gets "rounder".

use crate::config::locale::Locale;
use chrono::{Datelike, NaiveDateTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeLabel {
    /// `14:30`
    HourMinute,
    /// `Mo 05`
    WeekdayDay,
    /// `Jan 05`
    MonthDay,
    /// `Januar`
    Month,
    /// `2024`
    Year,
}

fn pick_label(time: &NaiveDateTime) -> TimeLabel {
    if time.minute() != 0 || time.hour() != 0 {
        TimeLabel::HourMinute
    } else if time.weekday().num_days_from_sunday() != 0 && time.day() != 1 {
        TimeLabel::WeekdayDay
    } else if time.day() != 1 {
        TimeLabel::MonthDay
    } else if time.month0() != 0 {
        TimeLabel::Month
    } else {
        TimeLabel::Year
    }
}

/// Label for a tick on a time axis, using the names of `locale`.
pub fn time_label(time: &NaiveDateTime, locale: &Locale) -> String {
    match pick_label(time) {
        TimeLabel::HourMinute => format!("{:02}:{:02}", time.hour(), time.minute()),
        TimeLabel::WeekdayDay => format!(
            "{} {:02}",
            locale.short_day(time.weekday().num_days_from_sunday() as usize),
            time.day()
        ),
        TimeLabel::MonthDay => format!("{} {:02}", locale.short_month(time.month0() as usize), time.day()),
        TimeLabel::Month => locale.month(time.month0() as usize).to_string(),
        TimeLabel::Year => time.year().to_string(),
    }
}
