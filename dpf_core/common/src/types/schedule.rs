use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt::{Display, Formatter};

use crate::config::error::ConfigError;
use crate::traits::Scheduled;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        };
        f.write_str(label)
    }
}

/// How often a task repeats.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Recurrence {
    Interval {
        minutes: u32,
    },
    Hourly {
        minute: u8,
    },
    Daily {
        hour: u8,
        min: u8,
    },
    Weekly {
        weekdays: Vec<Weekday>,
        hour: u8,
        min: u8,
    },
    Monthly {
        day: u8,
        hour: u8,
        min: u8,
    },
    Cron {
        expression: String,
    },
}

impl Recurrence {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Recurrence::Interval { minutes } if *minutes == 0 => {
                Err(ConfigError::invalid_value("interval minutes must be positive"))
            }
            Recurrence::Hourly { minute } => check_minute(*minute),
            Recurrence::Daily { hour, min } => check_time(*hour, *min),
            Recurrence::Weekly { weekdays, .. } if weekdays.is_empty() => Err(
                ConfigError::invalid_value("weekly schedule needs at least one weekday"),
            ),
            Recurrence::Weekly { hour, min, .. } => check_time(*hour, *min),
            Recurrence::Monthly { day, .. } if !(1..=31).contains(day) => Err(
                ConfigError::invalid_value(format!("day of month {} is outside 1-31", day)),
            ),
            Recurrence::Monthly { hour, min, .. } => check_time(*hour, *min),
            Recurrence::Cron { expression } if expression.split_whitespace().count() != 5 => {
                Err(ConfigError::invalid_value(format!(
                    "cron expression '{}' must have five fields",
                    expression
                )))
            }
            _ => Ok(()),
        }
    }
}

fn check_minute(min: u8) -> Result<(), ConfigError> {
    if min > 59 {
        return Err(ConfigError::invalid_value(format!(
            "minute {} is outside 0-59",
            min
        )));
    }
    Ok(())
}

fn check_time(hour: u8, min: u8) -> Result<(), ConfigError> {
    if hour > 23 {
        return Err(ConfigError::invalid_value(format!(
            "hour {} is outside 0-23",
            hour
        )));
    }
    check_minute(min)
}

impl Display for Recurrence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Recurrence::Interval { minutes: 1 } => write!(f, "Every minute"),
            Recurrence::Interval { minutes } => write!(f, "Every {} minutes", minutes),
            Recurrence::Hourly { minute } => write!(f, "Hourly at minute {}", minute),
            Recurrence::Daily { hour, min } => write!(f, "Daily at {hour:02}:{min:02}"),
            Recurrence::Weekly {
                weekdays,
                hour,
                min,
            } => {
                let days = weekdays
                    .iter()
                    .map(Weekday::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Weekly on {days} at {hour:02}:{min:02}")
            }
            Recurrence::Monthly { day, hour, min } => {
                write!(f, "Monthly on day {day} at {hour:02}:{min:02}")
            }
            Recurrence::Cron { expression } => write!(f, "Cron: {}", expression),
        }
    }
}

/// Recurrence plus the next run computed by the scheduler, if any.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Schedule {
    pub recurrence: Recurrence,
    #[serde(default)]
    pub next_run: Option<DateTime<Utc>>,
}

impl Scheduled for Schedule {
    fn formatted(&self) -> String {
        self.recurrence.to_string()
    }

    fn next_run(&self) -> Option<DateTime<Utc>> {
        self.next_run
    }
}
