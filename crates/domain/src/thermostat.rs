//! Thermostat: a 2×7 table of temperature set-points.
//!
//! Rows are [`TimeOfDay`], columns are [`Weekday`]. The typed accessors
//! ([`Thermostat::get`], [`Thermostat::write`]) cannot address a cell outside
//! the table. The token-level operations ([`Thermostat::read`],
//! [`Thermostat::set`]) resolve raw command arguments in a fixed order:
//!
//! 1. resolve the time token (`invalid time` on an unknown name)
//! 2. resolve the date token (`invalid day` on an unknown name)
//! 3. range-check the time against `{0, 1}`
//! 4. range-check the date (see [`ReadBoundsCheck`] for `read`)
//!
//! No cell is touched unless every step passes.

use serde::Deserialize;

use crate::error::{ConsoleError, LookupFailure, ValidationError};
use crate::schedule::{Field, TimeOfDay, Weekday};

/// How `read` validates the resolved date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadBoundsCheck {
    /// Reject any date outside `0..=6`, like `set` does.
    #[default]
    Checked,
    /// Reproduce the historical read path: it re-checks the time where it
    /// should check the date, so only negative dates are rejected and dates
    /// above `0xFFFF_FFFF` wrap to 0. The resulting out-of-table access is
    /// reported as [`LookupFailure::CellOutOfBounds`] instead of reading
    /// adjacent memory.
    Legacy,
}

const FACTORY_SUNDAY: (i64, i64) = (75, 67);
const FACTORY_WEEKDAY: (i64, i64) = (78, 69);

/// Simulated programmable thermostat.
#[derive(Debug, Clone)]
pub struct Thermostat {
    table: [[i64; 7]; 2],
    read_bounds: ReadBoundsCheck,
}

impl Default for Thermostat {
    fn default() -> Self {
        Self::with_read_bounds(ReadBoundsCheck::default())
    }
}

impl Thermostat {
    /// Create a thermostat with factory set-points.
    #[must_use]
    pub fn with_read_bounds(read_bounds: ReadBoundsCheck) -> Self {
        let mut table = [[0; 7]; 2];
        for day in Weekday::ALL {
            let (d, n) = if day == Weekday::Sunday {
                FACTORY_SUNDAY
            } else {
                FACTORY_WEEKDAY
            };
            table[TimeOfDay::Day.index()][day.index()] = d;
            table[TimeOfDay::Night.index()][day.index()] = n;
        }
        Self { table, read_bounds }
    }

    #[must_use]
    pub fn read_bounds(&self) -> ReadBoundsCheck {
        self.read_bounds
    }

    #[must_use]
    pub fn get(&self, time: TimeOfDay, day: Weekday) -> i64 {
        self.table[time.index()][day.index()]
    }

    pub fn write(&mut self, time: TimeOfDay, day: Weekday, value: i64) {
        self.table[time.index()][day.index()] = value;
    }

    /// Read the set-point addressed by raw `time` and `date` tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTime`] / [`ValidationError::InvalidDay`]
    /// when a token does not resolve or is out of range, and
    /// [`LookupFailure::CellOutOfBounds`] when [`ReadBoundsCheck::Legacy`]
    /// lets an out-of-table date through.
    pub fn read(&self, time: &str, date: &str) -> Result<i64, ConsoleError> {
        let date_field = match Field::classify(date) {
            Field::Index(n) if self.read_bounds == ReadBoundsCheck::Legacy && n > 0xFFFF_FFFF => {
                Field::Index(0)
            }
            other => other,
        };
        let time_value = resolve_time(time)?;
        let date_value = resolve_date(date_field, date)?;
        let time_slot = check_time(time_value)?;

        match self.read_bounds {
            ReadBoundsCheck::Checked => {
                let day = check_date(date_value)?;
                Ok(self.get(time_slot, day))
            }
            ReadBoundsCheck::Legacy => {
                if date_value < 0 {
                    return Err(ValidationError::InvalidDay(date_value.to_string()).into());
                }
                Weekday::from_index(date_value)
                    .map(|day| self.get(time_slot, day))
                    .ok_or_else(|| {
                        LookupFailure::CellOutOfBounds {
                            time: time_value,
                            date: date_value,
                        }
                        .into()
                    })
            }
        }
    }

    /// Store `temp` in the cell addressed by raw `time` and `date` tokens and
    /// return it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTime`] / [`ValidationError::InvalidDay`]
    /// when a token does not resolve or is out of range. The table is left
    /// untouched on error.
    pub fn set(&mut self, time: &str, date: &str, temp: i64) -> Result<i64, ConsoleError> {
        let time_value = resolve_time(time)?;
        let date_value = resolve_date(Field::classify(date), date)?;
        let time_slot = check_time(time_value)?;
        let day = check_date(date_value)?;
        self.write(time_slot, day, temp);
        Ok(temp)
    }
}

fn resolve_time(token: &str) -> Result<i64, ValidationError> {
    Field::classify(token)
        .resolve(|name| TimeOfDay::from_name(name).map(TimeOfDay::index))
        .ok_or_else(|| ValidationError::InvalidTime(token.to_string()))
}

fn resolve_date(field: Field<'_>, token: &str) -> Result<i64, ValidationError> {
    field
        .resolve(|name| Weekday::from_name(name).map(Weekday::index))
        .ok_or_else(|| ValidationError::InvalidDay(token.to_string()))
}

fn check_time(value: i64) -> Result<TimeOfDay, ValidationError> {
    TimeOfDay::from_index(value).ok_or_else(|| ValidationError::InvalidTime(value.to_string()))
}

fn check_date(value: i64) -> Result<Weekday, ValidationError> {
    Weekday::from_index(value).ok_or_else(|| ValidationError::InvalidDay(value.to_string()))
}
