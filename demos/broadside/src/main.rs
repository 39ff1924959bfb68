//! broadside — smallest runnable scenario for the rust_bf simulator.
//!
//! Starts from the interactive application's default: one straight
//! two-element array, 5 cm spacing, 100 kHz, steered to broadside.  Then
//! adds a curved companion array at 3 GHz, steers it, and writes the field
//! and beam profile of each step to CSV under `output/broadside/`.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bf_core::{SimConfig, format_frequency};
use bf_field::{ArrayFactorProfile, IntensityField};
use bf_output::{CsvWriter, OutputWriter, RenderOutputObserver};
use bf_sim::{RenderObserver, Simulator, load_arrays_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const X_RANGE: (f64, f64) = (-10.0, 10.0);
const Y_RANGE: (f64, f64) = (0.0, 10.0);
const STEERED_FREQUENCY_HZ: f64 = 3e9;
const STEERED_ANGLE_DEG:    f64 = 25.0;
const STEERED_X_RANGE: (f64, f64) = (-1.0, 1.0);
const STEERED_Y_RANGE: (f64, f64) = (0.0, 2.0);

// ── Scenario CSV ──────────────────────────────────────────────────────────────

// Two 8-element arrays at half-wavelength spacing for 3 GHz; the second
// bends through 40°.
const SCENARIO_CSV: &str = "\
num_elements,spacing,curvature_degree\n\
8,0.05,0\n\
8,0.05,40\n\
";

// ── Observer wrapper to print a summary ───────────────────────────────────────

struct SummaryObserver<W: OutputWriter> {
    inner:        RenderOutputObserver<W>,
    field_peak:   Option<(f64, f64)>,
    profile_peak: Option<f64>,
}

impl<W: OutputWriter> SummaryObserver<W> {
    fn new(inner: RenderOutputObserver<W>) -> Self {
        Self { inner, field_peak: None, profile_peak: None }
    }
}

impl<W: OutputWriter> std::fmt::Debug for SummaryObserver<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryObserver")
            .field("field_peak", &self.field_peak)
            .field("profile_peak", &self.profile_peak)
            .finish_non_exhaustive()
    }
}

impl<W: OutputWriter> RenderObserver for SummaryObserver<W> {
    fn on_field(&mut self, field: &IntensityField) {
        self.field_peak = field.peak();
        self.inner.on_field(field);
    }

    fn on_profile(&mut self, profile: &ArrayFactorProfile) {
        self.profile_peak = profile.peak_angle();
        self.inner.on_profile(profile);
    }

    fn on_finish(&mut self) {
        self.inner.on_finish();
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== broadside — rust_bf beamforming simulator ===");
    println!();

    // 1. Default scenario.
    let mut sim = Simulator::from_config(&SimConfig::default())?;
    println!(
        "Frequency: {}  |  λ = {} m  |  steering {}°  |  arrays: {}",
        format_frequency(sim.frequency()),
        sim.wavelength(),
        sim.steering_angle(),
        sim.arrays().len(),
    );
    println!(
        "Broadside array factor (raw) at 0°: {}",
        sim.array_factor_raw(&[0.0])?[0]
    );
    run_step(&sim, "output/broadside/default", X_RANGE, Y_RANGE)?;

    // 2. Load the steered scenario and retune.
    let arrays = load_arrays_reader(Cursor::new(SCENARIO_CSV))?;
    info!(arrays = arrays.len(), "loaded scenario");
    let Some((&first, rest)) = arrays.split_first() else {
        anyhow::bail!("scenario CSV holds no arrays");
    };
    sim.replace_array(0, first)?;
    for &extra in rest {
        sim.add_array(extra);
    }
    sim.set_frequency(STEERED_FREQUENCY_HZ)?;
    sim.set_steering_angle(STEERED_ANGLE_DEG);
    println!();
    println!(
        "Frequency: {}  |  λ = {} m  |  steering {}°  |  arrays: {}",
        format_frequency(sim.frequency()),
        sim.wavelength(),
        sim.steering_angle(),
        sim.arrays().len(),
    );
    run_step(&sim, "output/broadside/steered", STEERED_X_RANGE, STEERED_Y_RANGE)?;

    Ok(())
}

fn run_step(sim: &Simulator, dir: &str, x_range: (f64, f64), y_range: (f64, f64)) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let writer = CsvWriter::new(Path::new(dir))?;

    let t0 = Instant::now();
    let obs = render_step(sim, writer, x_range, y_range)
        .with_context(|| format!("writing render output to {dir}"))?;
    let elapsed = t0.elapsed();

    let (nx, ny) = sim.resolution();
    println!("Rendered {nx} × {ny} field in {:.3} s → {dir}", elapsed.as_secs_f64());
    if let Some((x, y)) = obs.field_peak {
        println!("  field peak at ({x:.3}, {y:.3}) m");
    }
    if let Some(angle) = obs.profile_peak {
        println!("  main lobe at {angle}°");
    }
    Ok(())
}

/// Render into `writer`, surfacing the first write error the observer kept.
fn render_step<W: OutputWriter>(
    sim: &Simulator,
    writer: W,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<SummaryObserver<W>> {
    let mut obs = SummaryObserver::new(RenderOutputObserver::new(writer));
    sim.render(x_range, y_range, &mut obs)?;
    if let Some(e) = obs.inner.take_error() {
        return Err(e.into());
    }
    Ok(obs)
}
