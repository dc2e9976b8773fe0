//! Device registry: owns every device and remembers the last one used.

use barbos_domain::alarm::Alarm;
use barbos_domain::device::DeviceKind;
use barbos_domain::speaker::Speaker;
use barbos_domain::thermostat::Thermostat;

/// All device state of one console.
///
/// Devices are registered in [`DeviceKind::ALL`] order and live as long as
/// the registry. `last_used` is a key into the registry, not a second owner.
#[derive(Debug, Clone)]
pub struct Registry {
    thermostat: Thermostat,
    alarm: Alarm,
    speaker: Speaker,
    last_used: DeviceKind,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Thermostat::default(), Alarm::default(), Speaker::default())
    }
}

impl Registry {
    /// Register the three devices. The speaker starts as the last used device.
    #[must_use]
    pub fn new(thermostat: Thermostat, alarm: Alarm, speaker: Speaker) -> Self {
        Self {
            thermostat,
            alarm,
            speaker,
            last_used: DeviceKind::Speaker,
        }
    }

    /// Registered devices, in registration order.
    #[must_use]
    pub fn devices(&self) -> &'static [DeviceKind] {
        &DeviceKind::ALL
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices().is_empty()
    }

    #[must_use]
    pub fn last_used(&self) -> DeviceKind {
        self.last_used
    }

    /// Record `kind` as the most recently dispatched device.
    pub fn touch(&mut self, kind: DeviceKind) {
        self.last_used = kind;
    }

    #[must_use]
    pub fn thermostat(&self) -> &Thermostat {
        &self.thermostat
    }

    pub fn thermostat_mut(&mut self) -> &mut Thermostat {
        &mut self.thermostat
    }

    #[must_use]
    pub fn alarm(&self) -> &Alarm {
        &self.alarm
    }

    pub fn alarm_mut(&mut self) -> &mut Alarm {
        &mut self.alarm
    }

    #[must_use]
    pub fn speaker(&self) -> &Speaker {
        &self.speaker
    }

    pub fn speaker_mut(&mut self) -> &mut Speaker {
        &mut self.speaker
    }
}
