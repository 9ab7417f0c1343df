use csv::ReaderBuilder;
use gps_kalman::{GpsMessage, RawFixReport};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::error::Error;

/// One receiver message of a recorded drive.
///
/// Fields a sentence kind does not carry are left empty.
#[derive(Debug, Deserialize)]
pub struct LogRecord {
    /// The wake cycle in which the message arrived.
    pub cycle: usize,
    /// The sentence kind, e.g. `GGA`.
    pub kind: String,
    pub mode: Option<u8>,
    pub signal: Option<u8>,
    pub dop: Option<f64>,
    /// Latitude, in `DDMM.mmmmm`.
    pub latitude: Option<f64>,
    /// Longitude, in `DDDMM.mmmmm`.
    pub longitude: Option<f64>,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
    pub satellites: Option<u8>,
}

impl LogRecord {
    /// Converts the record into the message it describes.
    pub fn to_message(&self) -> Result<GpsMessage<f64>, Box<dyn Error>> {
        let message = match self.kind.as_str() {
            "INFO" => GpsMessage::Info(RawFixReport {
                mode: required(self.mode, "mode")?,
                signal: required(self.signal, "signal")?,
                dop: required(self.dop, "dop")?,
                latitude: required(self.latitude, "latitude")?,
                longitude: required(self.longitude, "longitude")?,
                speed: required(self.speed, "speed")?,
                heading: required(self.heading, "heading")?,
            }),
            "GGA" => GpsMessage::Gga {
                signal: required(self.signal, "signal")?,
                hdop: required(self.dop, "dop")?,
                latitude: required(self.latitude, "latitude")?,
                longitude: required(self.longitude, "longitude")?,
            },
            "GSA" => GpsMessage::Gsa {
                mode: required(self.mode, "mode")?,
                pdop: required(self.dop, "dop")?,
            },
            "GSV" => GpsMessage::Gsv {
                satellites_in_view: self.satellites.unwrap_or_default(),
            },
            "RMC" => GpsMessage::Rmc {
                latitude: required(self.latitude, "latitude")?,
                longitude: required(self.longitude, "longitude")?,
                speed: required(self.speed, "speed")?,
                heading: required(self.heading, "heading")?,
            },
            "VTG" => GpsMessage::Vtg {
                track: required(self.heading, "heading")?,
                speed: required(self.speed, "speed")?,
            },
            other => return Err(format!("unknown sentence kind {other}").into()),
        };
        Ok(message)
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, Box<dyn Error>> {
    value.ok_or_else(|| format!("missing field {field}").into())
}

/// Reads a recorded drive and groups its messages by wake cycle.
///
/// Cycles without messages yield an empty batch.
pub fn read_cycles(file_path: &str) -> Result<Vec<Vec<GpsMessage<f64>>>, Box<dyn Error>> {
    let records = read_csv::<LogRecord>(file_path)?;

    let cycle_count = records.iter().map(|r| r.cycle + 1).max().unwrap_or(0);
    let mut cycles = vec![Vec::new(); cycle_count];
    for record in &records {
        cycles[record.cycle].push(record.to_message()?);
    }

    Ok(cycles)
}

fn read_csv<T: DeserializeOwned>(file_path: &str) -> Result<Vec<T>, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().from_path(file_path)?;
    let mut data = Vec::new();

    for result in rdr.deserialize() {
        let record: T = result?;
        data.push(record);
    }

    Ok(data)
}
