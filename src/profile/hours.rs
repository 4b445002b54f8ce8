//! Weekly opening hours

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::ProfileError;

/// Closed set of day ranges an hours row may cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayRange {
    MonFri,
    MonSat,
    Weekend,
    EveryDay,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayRange {
    /// Label shown in the visible hours table
    pub fn label(&self) -> &'static str {
        match self {
            DayRange::MonFri => "Mon–Fri",
            DayRange::MonSat => "Mon–Sat",
            DayRange::Weekend => "Sat–Sun",
            DayRange::EveryDay => "Every day",
            DayRange::Monday => "Monday",
            DayRange::Tuesday => "Tuesday",
            DayRange::Wednesday => "Wednesday",
            DayRange::Thursday => "Thursday",
            DayRange::Friday => "Friday",
            DayRange::Saturday => "Saturday",
            DayRange::Sunday => "Sunday",
        }
    }

    pub fn weekdays(&self) -> Vec<Weekday> {
        use Weekday::*;
        match self {
            DayRange::MonFri => vec![Mon, Tue, Wed, Thu, Fri],
            DayRange::MonSat => vec![Mon, Tue, Wed, Thu, Fri, Sat],
            DayRange::Weekend => vec![Sat, Sun],
            DayRange::EveryDay => vec![Mon, Tue, Wed, Thu, Fri, Sat, Sun],
            DayRange::Monday => vec![Mon],
            DayRange::Tuesday => vec![Tue],
            DayRange::Wednesday => vec![Wed],
            DayRange::Thursday => vec![Thu],
            DayRange::Friday => vec![Fri],
            DayRange::Saturday => vec![Sat],
            DayRange::Sunday => vec![Sun],
        }
    }
}

/// Full English day name as schema.org expects it
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub opens: NaiveTime,
    pub closes: NaiveTime,
}

impl TimeRange {
    /// Display form, e.g. `8:00 AM – 6:00 PM`
    pub fn display(&self) -> String {
        format!(
            "{} – {}",
            self.opens.format("%-I:%M %p"),
            self.closes.format("%-I:%M %p")
        )
    }
}

/// One row of the weekly schedule. No time range means closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursEntry {
    pub days: DayRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<TimeRange>,
}

impl HoursEntry {
    pub fn open(days: DayRange, opens: NaiveTime, closes: NaiveTime) -> Result<Self, ProfileError> {
        let entry = Self {
            days,
            hours: Some(TimeRange { opens, closes }),
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn closed(days: DayRange) -> Self {
        Self { days, hours: None }
    }

    pub fn label(&self) -> &'static str {
        self.days.label()
    }

    /// Time column text: the range, or `Closed`
    pub fn time_display(&self) -> String {
        match &self.hours {
            Some(range) => range.display(),
            None => "Closed".to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if let Some(range) = &self.hours {
            if range.opens >= range.closes {
                return Err(ProfileError::InvalidHours {
                    days: self.days.label().to_string(),
                    opens: range.opens.format("%H:%M").to_string(),
                    closes: range.closes.format("%H:%M").to_string(),
                });
            }
        }
        Ok(())
    }
}
