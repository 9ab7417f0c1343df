// Enable no_std mode.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
// Only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod app;
mod command;
mod config;
mod controller;
mod coordinates;
mod error;
mod estimate;
mod gate;
pub mod inverse;
mod macros;
mod measurement;
mod message;
mod model;
mod num_traits;
mod predictor;
mod report;
mod state;
mod updater;

pub use crate::app::{FilterApp, HousekeepingTelemetry};
pub use crate::command::{Command, Housekeeping};
pub use crate::config::FilterConfig;
pub use crate::controller::{CycleOutcome, CycleOutput, FilterController, FilterPhase};
pub use crate::coordinates::decimal_minutes_to_degrees;
pub use crate::error::{FilterError, MalformedField, Singular};
pub use crate::estimate::{Estimate, EstimateVariance};
pub use crate::gate::FixQualityGate;
pub use crate::inverse::invert;
pub use crate::measurement::Measurement;
pub use crate::message::{CycleInput, GpsMessage};
pub use crate::model::TransitionModel;
pub use crate::predictor::StatePredictor;
pub use crate::report::{OperatingMode, RawFixReport, SignalQuality};
pub use crate::state::FilterState;
pub use crate::updater::MeasurementUpdater;

pub use crate::num_traits::*;
pub use nalgebra::{Matrix3, Vector3};
