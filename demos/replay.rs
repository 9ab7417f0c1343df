use std::error::Error;

use gps_kalman::{FilterApp, FilterConfig};

use crate::replay_utils::read_cycles;

mod replay_utils;

const DRIVE: &str = "tests/data/drive/messages.csv";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DRIVE.to_string());
    let cycles = read_cycles(&path)?;
    log::info!("Replaying {} cycles from {path}", cycles.len());

    let mut app = FilterApp::new(FilterConfig::<f64>::default())?;

    println!("cycle,outcome,latitude,longitude,speed,var_latitude,var_longitude,var_speed");
    for (cycle, messages) in cycles.iter().enumerate() {
        let output = app.wake(messages);
        let (estimate, variance) = (output.estimate, output.variance);
        println!(
            "{cycle},{:?},{:.7},{:.7},{:.3},{:.4e},{:.4e},{:.4e}",
            output.outcome,
            estimate.latitude,
            estimate.longitude,
            estimate.speed,
            variance.latitude,
            variance.longitude,
            variance.speed
        );
    }

    let hk = app.housekeeping();
    log::info!(
        "Done; {} commands, {} command errors",
        hk.counters.command_count,
        hk.counters.command_error_count
    );
    Ok(())
}
