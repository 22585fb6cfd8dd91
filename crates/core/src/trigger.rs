// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger specs: start boundary plus one cadence
//!
//! Each cadence variant carries only the fields its trigger type needs, so a
//! weekly trigger cannot be built without a day set and a one-time trigger
//! cannot carry an interval.

use crate::codes::ParseKindError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

macro_rules! bitmask {
    ($(#[$meta:meta])* $name:ident($repr:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name($repr);

        impl $name {
            pub const fn from_bits(bits: $repr) -> Self {
                Self(bits)
            }

            pub const fn bits(self) -> $repr {
                self.0
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }
        }

        impl BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }
    };
}

bitmask!(
    /// Days of the week a trigger runs on
    DaysOfWeek(u16)
);

impl DaysOfWeek {
    pub const SUNDAY: Self = Self(0x01);
    pub const MONDAY: Self = Self(0x02);
    pub const TUESDAY: Self = Self(0x04);
    pub const WEDNESDAY: Self = Self(0x08);
    pub const THURSDAY: Self = Self(0x10);
    pub const FRIDAY: Self = Self(0x20);
    pub const SATURDAY: Self = Self(0x40);

    const NAMES: [&'static str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];

    /// Element names of the set days, Sunday first
    pub fn labels(self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .enumerate()
            .filter(|(i, _)| self.0 & (1 << i) != 0)
            .map(|(_, name)| *name)
            .collect()
    }
}

bitmask!(
    /// Months of the year a trigger runs in
    MonthsOfYear(u16)
);

impl MonthsOfYear {
    pub const JANUARY: Self = Self(0x001);
    pub const FEBRUARY: Self = Self(0x002);
    pub const MARCH: Self = Self(0x004);
    pub const APRIL: Self = Self(0x008);
    pub const MAY: Self = Self(0x010);
    pub const JUNE: Self = Self(0x020);
    pub const JULY: Self = Self(0x040);
    pub const AUGUST: Self = Self(0x080);
    pub const SEPTEMBER: Self = Self(0x100);
    pub const OCTOBER: Self = Self(0x200);
    pub const NOVEMBER: Self = Self(0x400);
    pub const DECEMBER: Self = Self(0x800);
    pub const ALL: Self = Self(0xFFF);

    const NAMES: [&'static str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    pub fn labels(self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .enumerate()
            .filter(|(i, _)| self.0 & (1 << i) != 0)
            .map(|(_, name)| *name)
            .collect()
    }
}

bitmask!(
    /// Days of the month a trigger runs on; bit `n - 1` is day `n`
    DaysOfMonth(u32)
);

impl DaysOfMonth {
    pub const LAST: Self = Self(0x8000_0000);

    /// Single day of the month (1..=31)
    pub fn day(n: u8) -> Option<Self> {
        (1..=31).contains(&n).then(|| Self(1 << (n - 1)))
    }

    /// Day numbers as XML text, with `Last` at the end when set
    pub fn labels(self) -> Vec<String> {
        let mut labels: Vec<String> = (0..31)
            .filter(|i| self.0 & (1 << i) != 0)
            .map(|i| (i + 1).to_string())
            .collect();
        if self.contains(Self::LAST) {
            labels.push("Last".to_string());
        }
        labels
    }
}

bitmask!(
    /// Weeks of the month a day-of-week trigger runs in
    WeeksOfMonth(u8)
);

impl WeeksOfMonth {
    pub const FIRST: Self = Self(0x01);
    pub const SECOND: Self = Self(0x02);
    pub const THIRD: Self = Self(0x04);
    pub const FOURTH: Self = Self(0x08);
    pub const LAST: Self = Self(0x10);

    const NAMES: [&'static str; 5] = ["1", "2", "3", "4", "Last"];

    pub fn labels(self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .enumerate()
            .filter(|(i, _)| self.0 & (1 << i) != 0)
            .map(|(_, name)| *name)
            .collect()
    }
}

/// Trigger type codes of the scheduler object model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerType {
    Time = 1,
    Daily = 2,
    Weekly = 3,
    Monthly = 4,
    MonthlyDow = 5,
}

impl TriggerType {
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Textual trigger tag as accepted from callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    Daily,
    Weekly,
    Monthly,
    MonthlyDow,
    OneTime,
}

impl TriggerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TriggerKind::Daily => "daily",
            TriggerKind::Weekly => "weekly",
            TriggerKind::Monthly => "monthly",
            TriggerKind::MonthlyDow => "monthlydow",
            TriggerKind::OneTime => "one-time",
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriggerKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(TriggerKind::Daily),
            "weekly" => Ok(TriggerKind::Weekly),
            "monthly" => Ok(TriggerKind::Monthly),
            "monthlydow" => Ok(TriggerKind::MonthlyDow),
            "one-time" => Ok(TriggerKind::OneTime),
            other => Err(ParseKindError {
                what: "trigger type",
                value: other.to_string(),
            }),
        }
    }
}

/// Recurrence pattern of a trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cadence {
    Daily {
        days_interval: u16,
    },
    Weekly {
        weeks_interval: u16,
        days_of_week: DaysOfWeek,
    },
    /// By day of month
    Monthly {
        days_of_month: DaysOfMonth,
        months_of_year: MonthsOfYear,
    },
    /// By day-of-week ordinal, e.g. every first Thursday
    MonthlyDayOfWeek {
        days_of_week: DaysOfWeek,
        months_of_year: MonthsOfYear,
        weeks_of_month: WeeksOfMonth,
    },
    OneTime,
}

impl Cadence {
    pub fn kind(&self) -> TriggerKind {
        match self {
            Cadence::Daily { .. } => TriggerKind::Daily,
            Cadence::Weekly { .. } => TriggerKind::Weekly,
            Cadence::Monthly { .. } => TriggerKind::Monthly,
            Cadence::MonthlyDayOfWeek { .. } => TriggerKind::MonthlyDow,
            Cadence::OneTime => TriggerKind::OneTime,
        }
    }

    pub fn trigger_type(&self) -> TriggerType {
        match self {
            Cadence::Daily { .. } => TriggerType::Daily,
            Cadence::Weekly { .. } => TriggerType::Weekly,
            Cadence::Monthly { .. } => TriggerType::Monthly,
            Cadence::MonthlyDayOfWeek { .. } => TriggerType::MonthlyDow,
            Cadence::OneTime => TriggerType::Time,
        }
    }
}

/// A trigger to attach to a new task definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSpec {
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub cadence: Cadence,
}

impl TriggerSpec {
    pub fn new(start_date: NaiveDate, start_time: NaiveTime, cadence: Cadence) -> Self {
        Self {
            start_date,
            start_time,
            cadence,
        }
    }

    pub fn daily(start_date: NaiveDate, start_time: NaiveTime, days_interval: u16) -> Self {
        Self::new(start_date, start_time, Cadence::Daily { days_interval })
    }

    pub fn weekly(
        start_date: NaiveDate,
        start_time: NaiveTime,
        weeks_interval: u16,
        days_of_week: DaysOfWeek,
    ) -> Self {
        Self::new(
            start_date,
            start_time,
            Cadence::Weekly {
                weeks_interval,
                days_of_week,
            },
        )
    }

    pub fn monthly(
        start_date: NaiveDate,
        start_time: NaiveTime,
        days_of_month: DaysOfMonth,
        months_of_year: MonthsOfYear,
    ) -> Self {
        Self::new(
            start_date,
            start_time,
            Cadence::Monthly {
                days_of_month,
                months_of_year,
            },
        )
    }

    pub fn monthly_day_of_week(
        start_date: NaiveDate,
        start_time: NaiveTime,
        days_of_week: DaysOfWeek,
        months_of_year: MonthsOfYear,
        weeks_of_month: WeeksOfMonth,
    ) -> Self {
        Self::new(
            start_date,
            start_time,
            Cadence::MonthlyDayOfWeek {
                days_of_week,
                months_of_year,
                weeks_of_month,
            },
        )
    }

    pub fn one_time(start_date: NaiveDate, start_time: NaiveTime) -> Self {
        Self::new(start_date, start_time, Cadence::OneTime)
    }

    pub fn kind(&self) -> TriggerKind {
        self.cadence.kind()
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start_date.and_time(self.start_time)
    }

    /// ISO-8601 start boundary; fractional seconds only when non-zero
    pub fn start_boundary(&self) -> String {
        iso_boundary(self.start())
    }
}

/// Format a naive timestamp the way the scheduler expects boundaries
pub fn iso_boundary(at: NaiveDateTime) -> String {
    if at.nanosecond() / 1_000 == 0 {
        at.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
