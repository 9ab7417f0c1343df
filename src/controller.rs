use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::estimate::{Estimate, EstimateVariance};
use crate::gate::FixQualityGate;
use crate::measurement::Measurement;
use crate::model::TransitionModel;
use crate::num_traits::FilterScalar;
use crate::predictor::StatePredictor;
use crate::report::RawFixReport;
use crate::state::FilterState;
use crate::updater::MeasurementUpdater;
use nalgebra::Matrix3;

/// The lifecycle phase of a [`FilterController`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FilterPhase {
    /// Constructed, no state yet.
    Uninitialized,
    /// The state is initialized and advanced every cycle.
    Running,
}

/// What happened to the measurement of a cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A fix passed the gate and corrected the prediction.
    Corrected,
    /// No fix arrived; the cycle was prediction-only.
    NoFix,
    /// The fix was structurally invalid and ignored.
    Malformed,
    /// The fix failed the quality gate.
    Rejected,
    /// The innovation covariance could not be inverted; the correction was skipped.
    Singular,
    /// The correction overflowed to non-finite values and was discarded.
    Diverged,
}

/// The result of one wake cycle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CycleOutput<T> {
    /// The estimate after the cycle.
    pub estimate: Estimate<T>,
    /// The variance of every axis after the cycle.
    pub variance: EstimateVariance<T>,
    /// How the cycle's fix, if any, was used.
    pub outcome: CycleOutcome,
}

/// Owns the filter state and runs predict, gate and update once per cycle.
pub struct FilterController<T> {
    config: FilterConfig<T>,
    gate: FixQualityGate<T>,
    predictor: StatePredictor<T>,
    updater: MeasurementUpdater<T>,
    state: Option<FilterState<T>>,
}

impl<T> FilterController<T>
where
    T: FilterScalar,
{
    /// Initializes a new, uninitialized controller.
    ///
    /// ## Arguments
    /// * `config` - The tuning constants.
    ///
    /// ## Errors
    /// Returns [`FilterError::InvalidConfig`] if a constant is not finite and positive.
    pub fn new(config: FilterConfig<T>) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: FilterConfig<T>) -> Self {
        let model = TransitionModel::new(config.process_noise);
        Self {
            config,
            gate: FixQualityGate::new(config.dop_sentinel),
            predictor: StatePredictor::new(model),
            updater: MeasurementUpdater::new(&model),
            state: None,
        }
    }

    /// Replaces the state transition matrix `F`.
    ///
    /// ## Arguments
    /// * `transition` - The new state transition matrix.
    pub fn with_transition(mut self, transition: Matrix3<T>) -> Self {
        let model = self.predictor.model().with_transition(transition);
        self.predictor = StatePredictor::new(model);
        self.updater = MeasurementUpdater::new(&model);
        self
    }

    /// Runs one cycle.
    ///
    /// The state is always advanced by the prediction. Of the reports that arrived in
    /// the cycle only the last one is used; if it is well-formed and passes the quality
    /// gate, it corrects the prediction.
    ///
    /// ## Arguments
    /// * `reports` - The fix reports received since the previous cycle, oldest first.
    pub fn step(&mut self, reports: &[RawFixReport<T>]) -> CycleOutput<T> {
        let prior = self
            .state
            .unwrap_or_else(|| FilterState::initial(self.config.initial_uncertainty));

        let predicted = self.predictor.predict(&prior);
        let (state, outcome) = match reports.last() {
            None => (predicted, CycleOutcome::NoFix),
            Some(report) => self.correct(predicted, report),
        };

        self.state = Some(state);
        CycleOutput {
            estimate: state.as_estimate(),
            variance: state.variance(),
            outcome,
        }
    }

    fn correct(
        &self,
        predicted: FilterState<T>,
        report: &RawFixReport<T>,
    ) -> (FilterState<T>, CycleOutcome) {
        if let Err(e) = report.validate() {
            log::warn!("Ignoring fix report: {e}");
            return (predicted, CycleOutcome::Malformed);
        }

        let measurement = Measurement::from_report(report, &self.gate, &self.config);
        if !measurement.fix_ok {
            log::info!(
                "Rejecting low quality fix: mode {}, signal {}, DOP {:?}",
                report.mode,
                report.signal,
                report.dop
            );
            return (predicted, CycleOutcome::Rejected);
        }

        match self.updater.update(&predicted, &measurement) {
            Ok(corrected) => (corrected, CycleOutcome::Corrected),
            Err(e) => {
                log::warn!("Skipping correction: {e}");
                let outcome = match e {
                    FilterError::NonFiniteCorrection => CycleOutcome::Diverged,
                    _ => CycleOutcome::Singular,
                };
                (predicted, outcome)
            }
        }
    }

    /// Restores the initial state. The model and configuration are kept.
    pub fn reset(&mut self) {
        log::debug!("Resetting filter state");
        self.state = Some(FilterState::initial(self.config.initial_uncertainty));
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> FilterPhase {
        match self.state {
            None => FilterPhase::Uninitialized,
            Some(_) => FilterPhase::Running,
        }
    }

    /// Returns the persistent state, if initialized.
    pub fn state(&self) -> Option<&FilterState<T>> {
        self.state.as_ref()
    }

    /// Returns the current estimate, if initialized.
    pub fn estimate(&self) -> Option<Estimate<T>> {
        self.state.as_ref().map(FilterState::as_estimate)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FilterConfig<T> {
        &self.config
    }

    /// Returns the transition model.
    pub fn model(&self) -> &TransitionModel<T> {
        self.predictor.model()
    }
}

impl<T> Default for FilterController<T>
where
    T: FilterScalar,
{
    fn default() -> Self {
        Self::from_valid_config(FilterConfig::default())
    }
}
