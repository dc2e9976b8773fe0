//! Schedule keys for the thermostat table: time of day and day of week.
//!
//! Both enums resolve from their lowercase name or map to a table index.
//! Command arguments reach them through [`Field`], which reproduces the
//! console's coercion rule: a token whose leading integer is non-zero is an
//! index, anything else (including the literal `0`) is looked up by name.

use std::fmt;

use crate::numeric::parse_leading_int;

/// Half of the day a set-point applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    pub const ALL: [Self; 2] = [Self::Day, Self::Night];

    /// Resolve a lowercase name (`day`, `night`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "day" => Some(Self::Day),
            "night" => Some(Self::Night),
            _ => None,
        }
    }

    /// Resolve a table row index.
    #[must_use]
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Day),
            1 => Some(Self::Night),
            _ => None,
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Resolve a lowercase name (`sunday` .. `saturday`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.name() == name)
    }

    /// Resolve a table column index.
    #[must_use]
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A schedule argument after numeric coercion, before name resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    Index(i64),
    Name(&'a str),
}

impl<'a> Field<'a> {
    #[must_use]
    pub fn classify(token: &'a str) -> Self {
        match parse_leading_int(token) {
            0 => Self::Name(token),
            n => Self::Index(n),
        }
    }

    /// Produce the resolved value: the index as given, or the enum index the
    /// name maps to. `None` when the name is unknown.
    pub fn resolve(self, lookup: impl FnOnce(&str) -> Option<usize>) -> Option<i64> {
        match self {
            Self::Index(n) => Some(n),
            Self::Name(name) => lookup(name).and_then(|i| i64::try_from(i).ok()),
        }
    }
}
