//! Project a JSON file of line requests and report each line.
//!
//! The file is either an array of `{ data, distance, cameraXRange, defaultCameraLeft }`
//! records or an object with `lines` and an optional `calibration`.
//!
//! Run: `cargo run -p record-section --features tools --bin project_lines -- <lines.json>`
//!
//! Set `RUST_LOG=debug` to see every projected line.

use std::env;
use std::process::ExitCode;

use record_section::LineBatch;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: project_lines <lines.json>");
        return ExitCode::from(2);
    };

    let batch = match LineBatch::from_path(&path) {
        Ok(batch) => batch,
        Err(e) => {
            tracing::error!("Failed to load {path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Loaded {} line request(s) from {path}", batch.lines.len());

    let mut failed = 0usize;
    for (i, result) in batch.project_all().into_iter().enumerate() {
        match result {
            Ok(line) => println!(
                "line[{i}]: {vertices} vertices, {degrees:.3} deg, y_offset={y_offset:.1}, \
                 y min/median/max = {min:.1}/{median:.1}/{max:.1}",
                vertices = line.vertex_count(),
                degrees = line.degrees,
                y_offset = line.y_offset,
                min = line.corrected_min,
                median = line.corrected_median,
                max = line.corrected_max,
            ),
            Err(e) => {
                println!("line[{i}]: FAILED: {e}");
                failed += 1;
            }
        }
    }

    if failed == 0 {
        tracing::info!("All lines projected");
        ExitCode::SUCCESS
    } else {
        tracing::error!("{failed} line(s) failed");
        ExitCode::FAILURE
    }
}
