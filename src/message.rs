use crate::num_traits::FilterScalar;
use crate::report::RawFixReport;

/// A message from the GPS receiver, tagged by its sentence kind.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GpsMessage<T> {
    /// A complete fix summary.
    Info(RawFixReport<T>),
    /// Fix data: position, signal quality and horizontal dilution of precision.
    Gga {
        signal: u8,
        hdop: T,
        latitude: T,
        longitude: T,
    },
    /// Active satellites: operating mode and position dilution of precision.
    Gsa { mode: u8, pdop: T },
    /// Satellites in view. Carries no fix content.
    Gsv { satellites_in_view: u8 },
    /// Recommended minimum data: position, speed and heading.
    Rmc {
        latitude: T,
        longitude: T,
        speed: T,
        heading: T,
    },
    /// Track and ground speed. Ignored by the filter.
    Vtg { track: T, speed: T },
}

impl<T> GpsMessage<T> {
    /// Returns the sentence kind, e.g. `"GGA"`.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Info(_) => "INFO",
            Self::Gga { .. } => "GGA",
            Self::Gsa { .. } => "GSA",
            Self::Gsv { .. } => "GSV",
            Self::Rmc { .. } => "RMC",
            Self::Vtg { .. } => "VTG",
        }
    }

    /// Determines whether the message carries a position.
    pub const fn is_fix_data(&self) -> bool {
        matches!(self, Self::Info(_) | Self::Gga { .. } | Self::Rmc { .. })
    }
}

/// The input record assembled from the receiver's messages.
///
/// Fields persist across cycles; a message only overwrites the fields it carries.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CycleInput<T> {
    report: RawFixReport<T>,
    fix_received: bool,
}

impl<T> CycleInput<T>
where
    T: FilterScalar,
{
    /// Initializes an empty record.
    pub fn new() -> Self {
        Self {
            report: RawFixReport {
                mode: 1,
                signal: 0,
                dop: T::DOP_UNDETERMINED,
                latitude: T::zero(),
                longitude: T::zero(),
                speed: T::zero(),
                heading: T::zero(),
            },
            fix_received: false,
        }
    }

    /// Merges a message into the record.
    pub fn absorb(&mut self, message: &GpsMessage<T>) {
        log::debug!("Received {} message", message.kind());

        let report = &mut self.report;
        match *message {
            GpsMessage::Info(info) => {
                *report = info;
            }
            GpsMessage::Gga {
                signal,
                hdop,
                latitude,
                longitude,
            } => {
                report.signal = signal;
                report.dop = hdop;
                report.latitude = latitude;
                report.longitude = longitude;
            }
            GpsMessage::Gsa { mode, pdop } => {
                report.mode = mode;
                report.dop = pdop;
            }
            GpsMessage::Rmc {
                latitude,
                longitude,
                speed,
                heading,
            } => {
                report.latitude = latitude;
                report.longitude = longitude;
                report.speed = speed;
                report.heading = heading;
            }
            GpsMessage::Gsv { .. } | GpsMessage::Vtg { .. } => {}
        }

        self.fix_received |= message.is_fix_data();
    }

    /// Returns the current record.
    pub fn report(&self) -> &RawFixReport<T> {
        &self.report
    }

    /// Determines whether fix data arrived since the last [`take_fix`](Self::take_fix).
    pub fn fix_received(&self) -> bool {
        self.fix_received
    }

    /// Returns the record if fix data arrived since the last call, and clears the flag.
    pub fn take_fix(&mut self) -> Option<RawFixReport<T>> {
        if core::mem::take(&mut self.fix_received) {
            Some(self.report)
        } else {
            None
        }
    }
}

impl<T> Default for CycleInput<T>
where
    T: FilterScalar,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn rmc(latitude: f64, speed: f64) -> GpsMessage<f64> {
        GpsMessage::Rmc {
            latitude,
            longitude: 1131.0,
            speed,
            heading: 84.4,
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(rmc(4807.038, 1.0).kind(), "RMC");
        assert!(rmc(4807.038, 1.0).is_fix_data());
        assert!(!GpsMessage::<f64>::Gsa { mode: 3, pdop: 1.0 }.is_fix_data());
        assert!(!GpsMessage::<f64>::Gsv { satellites_in_view: 8 }.is_fix_data());
        assert!(!GpsMessage::Vtg { track: 54.7, speed: 10.2 }.is_fix_data());
    }

    #[test]
    fn test_status_messages_carry_no_fix() {
        let mut input = CycleInput::<f64>::new();
        input.absorb(&GpsMessage::Gsa { mode: 3, pdop: 1.5 });
        input.absorb(&GpsMessage::Gsv { satellites_in_view: 9 });
        input.absorb(&GpsMessage::Vtg { track: 54.7, speed: 10.2 });

        assert!(!input.fix_received());
        assert_eq!(input.take_fix(), None);
        assert_eq!(input.report().mode, 3);
        assert_eq!(input.report().dop, 1.5);
        assert_eq!(input.report().speed, 0.0);
    }

    #[test]
    fn test_later_messages_overwrite() {
        let mut input = CycleInput::<f64>::new();
        input.absorb(&GpsMessage::Gsa { mode: 3, pdop: 2.5 });
        input.absorb(&GpsMessage::Gga {
            signal: 1,
            hdop: 0.9,
            latitude: 4807.0,
            longitude: 1131.0,
        });
        input.absorb(&rmc(4808.0, 12.0));

        let fix = input.take_fix().expect("fix data arrived");
        assert_eq!(fix.mode, 3);
        assert_eq!(fix.signal, 1);
        assert_eq!(fix.dop, 0.9);
        assert_eq!(fix.latitude, 4808.0);
        assert_eq!(fix.speed, 12.0);
        assert_eq!(fix.heading, 84.4);
    }

    #[test]
    fn test_fields_persist_across_cycles() {
        let mut input = CycleInput::<f64>::new();
        input.absorb(&rmc(4807.0, 7.5));
        assert!(input.take_fix().is_some());
        assert_eq!(input.take_fix(), None);

        // A position-only message keeps the previously reported speed.
        input.absorb(&GpsMessage::Gga {
            signal: 2,
            hdop: 1.1,
            latitude: 4809.0,
            longitude: 1132.0,
        });
        let fix = input.take_fix().expect("fix data arrived");
        assert_eq!(fix.latitude, 4809.0);
        assert_eq!(fix.speed, 7.5);
    }

    #[test]
    fn test_info_replaces_record() {
        let mut input = CycleInput::<f64>::new();
        input.absorb(&rmc(4807.0, 7.5));

        let info = RawFixReport {
            mode: 2,
            signal: 3,
            dop: 3.0,
            latitude: 100.0,
            longitude: 200.0,
            speed: 1.0,
            heading: 0.0,
        };
        input.absorb(&GpsMessage::Info(info));
        assert_eq!(input.take_fix(), Some(info));
    }
}
