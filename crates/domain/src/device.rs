//! Device kinds known to the console.

use std::fmt;

/// The closed set of devices the console drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Thermostat,
    Alarm,
    Speaker,
}

impl DeviceKind {
    /// Registration order.
    pub const ALL: [Self; 3] = [Self::Thermostat, Self::Alarm, Self::Speaker];

    /// Type name reported by `INFO`.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Thermostat => "Thermostat",
            Self::Alarm => "Alarm",
            Self::Speaker => "Smartspeaker",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
