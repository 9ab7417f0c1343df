use crate::command::{Command, Housekeeping};
use crate::config::FilterConfig;
use crate::controller::{CycleOutput, FilterController};
use crate::error::FilterError;
use crate::estimate::{Estimate, EstimateVariance};
use crate::message::{CycleInput, GpsMessage};
use crate::num_traits::FilterScalar;
use crate::state::FilterState;

/// A snapshot of the application's housekeeping numbers.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HousekeepingTelemetry<T> {
    /// The command counters.
    pub counters: Housekeeping,
    /// The latest published estimate.
    pub estimate: Estimate<T>,
    /// The latest published variance of every axis.
    pub variance: EstimateVariance<T>,
}

/// Drives a [`FilterController`] from receiver messages and ground commands.
///
/// The host calls [`wake`](Self::wake) once per period with the messages received since
/// the previous wake-up and publishes the returned output.
pub struct FilterApp<T> {
    controller: FilterController<T>,
    input: CycleInput<T>,
    housekeeping: Housekeeping,
    output: Option<CycleOutput<T>>,
}

impl<T> FilterApp<T>
where
    T: FilterScalar,
{
    /// Initializes the application.
    ///
    /// ## Errors
    /// Returns [`FilterError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: FilterConfig<T>) -> Result<Self, FilterError> {
        let mut controller = FilterController::new(config)?;
        controller.reset();

        log::info!("GPS Kalman filter initialized");
        Ok(Self {
            controller,
            input: CycleInput::new(),
            housekeeping: Housekeeping::default(),
            output: None,
        })
    }

    /// Runs one wake cycle.
    ///
    /// ## Arguments
    /// * `messages` - The receiver messages of this cycle, in arrival order.
    pub fn wake<'a, I>(&mut self, messages: I) -> CycleOutput<T>
    where
        I: IntoIterator<Item = &'a GpsMessage<T>>,
        T: 'a,
    {
        for message in messages {
            self.input.absorb(message);
        }

        let output = match self.input.take_fix() {
            Some(report) => self.controller.step(&[report]),
            None => self.controller.step(&[]),
        };

        self.output = Some(output);
        output
    }

    /// Executes a ground command.
    ///
    /// ## Errors
    /// Returns [`FilterError::InvalidCommand`] for an unknown code; the error counter
    /// is incremented.
    pub fn handle_command(&mut self, code: u16) -> Result<Command, FilterError> {
        let command = match Command::try_from(code) {
            Ok(command) => command,
            Err(e) => {
                self.housekeeping.count_error();
                log::error!("Received invalid command code {code}");
                return Err(e);
            }
        };

        match command {
            Command::Noop => {
                self.housekeeping.count_command();
                log::info!("Received NOOP command ({code})");
            }
            Command::Reset => {
                self.housekeeping.clear();
                self.controller.reset();
                self.output = None;
                log::info!("Received RESET command ({code})");
            }
        }

        Ok(command)
    }

    /// Returns the housekeeping telemetry.
    pub fn housekeeping(&self) -> HousekeepingTelemetry<T> {
        let (estimate, variance) = match self.output {
            Some(output) => (output.estimate, output.variance),
            None => {
                let state = self.controller.state().copied().unwrap_or_else(|| {
                    FilterState::initial(self.controller.config().initial_uncertainty)
                });
                (state.as_estimate(), state.variance())
            }
        };

        HousekeepingTelemetry {
            counters: self.housekeeping,
            estimate,
            variance,
        }
    }

    /// Returns the output of the latest cycle, if any.
    pub fn last_output(&self) -> Option<&CycleOutput<T>> {
        self.output.as_ref()
    }

    /// Returns the filter controller.
    pub fn controller(&self) -> &FilterController<T> {
        &self.controller
    }
}

impl<T> Default for FilterApp<T>
where
    T: FilterScalar,
{
    fn default() -> Self {
        let mut controller = FilterController::default();
        controller.reset();
        Self {
            controller,
            input: CycleInput::new(),
            housekeeping: Housekeeping::default(),
            output: None,
        }
    }
}
