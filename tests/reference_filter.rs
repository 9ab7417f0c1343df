//! Compares the filter against an independently implemented Kalman filter.

use gps_kalman::{decimal_minutes_to_degrees, CycleOutcome, FilterController, RawFixReport};
use minikalman::buffers::types::*;
use minikalman::prelude::*;
use minikalman::regular::{RegularKalmanBuilder, RegularObservationBuilder};

const STATES: usize = 3; // latitude, longitude, speed
const OBSERVATIONS: usize = 3; // latitude, longitude, speed

const DOP: f64 = 1.2;
const SPEED_VARIANCE: f64 = 0.01;
const PROCESS_NOISE: f64 = 0.1;
const INITIAL_UNCERTAINTY: f64 = 1.0e6;

/// A drive along a road with two cycles of lost reception.
fn fixes() -> Vec<Option<RawFixReport<f64>>> {
    let fix = |latitude: f64, longitude: f64, speed: f64| {
        Some(RawFixReport {
            mode: 3,
            signal: 1,
            dop: DOP,
            latitude,
            longitude,
            speed,
            heading: 84.4,
        })
    };

    vec![
        fix(4807.038, 1131.000, 22.4),
        fix(4807.052, 1131.021, 22.9),
        fix(4807.049, 1131.045, 23.1),
        None,
        fix(4807.071, 1131.088, 22.7),
        None,
        fix(4807.090, 1131.130, 21.8),
        fix(4807.102, 1131.151, 21.5),
        fix(4807.118, 1131.170, 21.9),
    ]
}

#[test]
fn test_matches_reference_filter() {
    let zero = 0.0_f64;

    // State vector.
    let state_vec = StateVectorBuffer::<STATES, f64, _>::new(MatrixData::new_array::<
        STATES,
        1,
        STATES,
        f64,
    >([zero; STATES]));

    // State transition matrix.
    let mut state_transition =
        StateTransitionMatrixMutBuffer::<STATES, f64, _>::new(MatrixData::new_array::<
            STATES,
            STATES,
            { STATES * STATES },
            f64,
        >([zero; { STATES * STATES }]));
    state_transition.make_identity();

    // Estimate covariance matrix.
    let mut estimate_covariance =
        EstimateCovarianceMatrixBuffer::<STATES, f64, _>::new(MatrixData::new_array::<
            STATES,
            STATES,
            { STATES * STATES },
            f64,
        >([zero; { STATES * STATES }]));
    estimate_covariance.make_scalar(INITIAL_UNCERTAINTY);

    // Process noise matrix.
    let mut process_noise = DirectProcessNoiseCovarianceMatrixMutBuffer::<STATES, f64, _>::new(
        MatrixData::new_array::<STATES, STATES, { STATES * STATES }, f64>(
            [zero; { STATES * STATES }],
        ),
    );
    process_noise.make_scalar(PROCESS_NOISE);

    let predicted_state = PredictedStateEstimateVectorBuffer::<STATES, f64, _>::new(
        MatrixData::new_array::<STATES, 1, STATES, f64>([zero; STATES]),
    );
    let temp_state_matrix = TemporaryStateMatrixBuffer::<STATES, f64, _>::new(
        MatrixData::new_array::<STATES, STATES, { STATES * STATES }, f64>(
            [zero; { STATES * STATES }],
        ),
    );

    let mut reference = RegularKalmanBuilder::new::<STATES, f64>(
        state_transition,
        state_vec,
        estimate_covariance,
        process_noise,
        predicted_state,
        temp_state_matrix,
    );

    // Measurement vector.
    let measurement_vec = MeasurementVectorBuffer::<OBSERVATIONS, f64, _>::new(
        MatrixData::new_array::<OBSERVATIONS, 1, OBSERVATIONS, f64>([zero; OBSERVATIONS]),
    );

    // Observation matrix.
    let mut observation_matrix = ObservationMatrixMutBuffer::<OBSERVATIONS, STATES, f64, _>::new(
        MatrixData::new_array::<OBSERVATIONS, STATES, { OBSERVATIONS * STATES }, f64>(
            [zero; { OBSERVATIONS * STATES }],
        ),
    );
    observation_matrix.apply(|mat| {
        mat.set_at(0, 0, 1.0);
        mat.set_at(1, 1, 1.0);
        mat.set_at(2, 2, 1.0);
    });

    // Measurement noise covariance.
    let mut noise_covariance = MeasurementNoiseCovarianceMatrixBuffer::<OBSERVATIONS, f64, _>::new(
        MatrixData::new_array::<OBSERVATIONS, OBSERVATIONS, { OBSERVATIONS * OBSERVATIONS }, f64>(
            [zero; { OBSERVATIONS * OBSERVATIONS }],
        ),
    );
    noise_covariance.apply(|mat| {
        mat.set_at(0, 0, DOP);
        mat.set_at(1, 1, DOP);
        mat.set_at(2, 2, SPEED_VARIANCE);
    });

    let innovation_vector = InnovationVectorBuffer::<OBSERVATIONS, f64, _>::new(
        MatrixData::new_array::<OBSERVATIONS, 1, OBSERVATIONS, f64>([zero; OBSERVATIONS]),
    );
    let innovation_covariance = InnovationCovarianceMatrixBuffer::<OBSERVATIONS, f64, _>::new(
        MatrixData::new_array::<OBSERVATIONS, OBSERVATIONS, { OBSERVATIONS * OBSERVATIONS }, f64>(
            [zero; { OBSERVATIONS * OBSERVATIONS }],
        ),
    );
    let kalman_gain = KalmanGainMatrixBuffer::<STATES, OBSERVATIONS, f64, _>::new(
        MatrixData::new_array::<STATES, OBSERVATIONS, { STATES * OBSERVATIONS }, f64>(
            [zero; { STATES * OBSERVATIONS }],
        ),
    );
    let temp_sinv = TemporaryResidualCovarianceInvertedMatrixBuffer::<OBSERVATIONS, f64, _>::new(
        MatrixData::new_array::<OBSERVATIONS, OBSERVATIONS, { OBSERVATIONS * OBSERVATIONS }, f64>(
            [zero; { OBSERVATIONS * OBSERVATIONS }],
        ),
    );
    let temp_hp = TemporaryHPMatrixBuffer::<OBSERVATIONS, STATES, f64, _>::new(
        MatrixData::new_array::<OBSERVATIONS, STATES, { OBSERVATIONS * STATES }, f64>(
            [zero; { OBSERVATIONS * STATES }],
        ),
    );
    let temp_pht = TemporaryPHTMatrixBuffer::<STATES, OBSERVATIONS, f64, _>::new(
        MatrixData::new_array::<STATES, OBSERVATIONS, { STATES * OBSERVATIONS }, f64>(
            [zero; { STATES * OBSERVATIONS }],
        ),
    );
    let temp_khp = TemporaryKHPMatrixBuffer::<STATES, f64, _>::new(MatrixData::new_array::<
        STATES,
        STATES,
        { STATES * STATES },
        f64,
    >([zero; { STATES * STATES }]));

    let mut measurement = RegularObservationBuilder::new::<STATES, OBSERVATIONS, f64>(
        observation_matrix,
        measurement_vec,
        noise_covariance,
        innovation_vector,
        innovation_covariance,
        kalman_gain,
        temp_sinv,
        temp_hp,
        temp_pht,
        temp_khp,
    );

    let mut controller = FilterController::<f64>::default();

    for (cycle, fix) in fixes().into_iter().enumerate() {
        reference.predict();

        let output = match fix {
            Some(report) => {
                measurement.measurement_vector_mut().apply(|vec| {
                    vec.set_row(0, decimal_minutes_to_degrees(report.latitude));
                    vec.set_row(1, decimal_minutes_to_degrees(report.longitude));
                    vec.set_row(2, report.speed);
                });
                reference.correct(&mut measurement);

                let output = controller.step(&[report]);
                assert_eq!(output.outcome, CycleOutcome::Corrected);
                output
            }
            None => controller.step(&[]),
        };

        for axis in 0..STATES {
            let expected = reference.state_vector().get_row(axis);
            let actual = output.estimate[axis];
            assert!(
                (expected - actual).abs() < 1e-6,
                "cycle {cycle}, axis {axis}: estimate {actual} differs from {expected}"
            );

            let expected = reference.estimate_covariance().get_at(axis, axis);
            let actual = output.variance[axis];
            assert!(
                (expected - actual).abs() <= 1e-6 * expected.abs().max(1.0),
                "cycle {cycle}, axis {axis}: variance {actual} differs from {expected}"
            );
        }
    }
}
