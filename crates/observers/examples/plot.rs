//! Interactive visualizations of the SQP solver.
//!
//! Each mode solves a small constrained problem and opens a plot window
//! showing what the solver did.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- residual
//! cargo run --example plot --features plot -- residual 0.5
//! cargo run --example plot --features plot -- path
//! ```
//!
//! # Modes
//!
//! - **residual [lr]** — Minimize (x − 1)² + (y − 2)² on the line x + y = 1.
//!   Plots ‖∇L‖ and the objective per iteration on a log scale. The damping
//!   factor defaults to 0.1; try `1.0` for a single Newton step.
//!
//! - **path** — Minimize x + y on the circle x² + y² = 2 starting from (1, 0.5).
//!   Plots the iterates in the (x, y) plane over the constraint circle.

use std::error::Error;

use nalgebra::{DMatrix, DVector, Matrix2};
use sqp_core::{Callables, Observer};
use sqp_observers::{PlotObserver, Printer, ShowConfig};
use sqp_solvers::sqp::{self, Action, Config, Event, Iterate};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "residual".into());
    match mode.as_str() {
        "residual" => {
            let lr = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid damping factor, expected a number such as 0.5");
                    std::process::exit(1);
                })
                .unwrap_or(0.1);
            residual(lr)
        }
        "path" => path(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [residual [lr]|path]");
            std::process::exit(1);
        }
    }
}

// --- Residual ----------------------------------------------------------------

/// Watch the residual shrink geometrically by a factor of (1 − lr) per step.
fn residual(lr: f64) -> Result<(), Box<dyn Error>> {
    let problem = Callables::new(
        1,
        |x, y| (x - 1.0).powi(2) + (y - 2.0).powi(2),
        |_, _| Matrix2::identity() * 2.0,
        |_, _| vec![Matrix2::zeros()],
        |_, _| DMatrix::from_row_slice(1, 2, &[1.0, 1.0]),
        |x, y, l: &DVector<f64>| {
            DVector::from_vec(vec![
                2.0 * (x - 1.0) + l[0],
                2.0 * (y - 2.0) + l[0],
                x + y - 1.0,
            ])
        },
    );

    let config = Config::new(1000, 1e-5, lr)?;
    let mut obs = PlotObserver::convergence();
    let mut printer = Printer::stdout();

    sqp::solve(
        &problem,
        Iterate::new([0.0, 0.0], DVector::zeros(1)),
        &config,
        |event: &Event<'_>| -> Option<Action> {
            printer.observe(event);
            obs.observe(event)
        },
    )?;

    obs.show(
        ShowConfig::new()
            .title(format!("SQP: (x-1)² + (y-2)² on x + y = 1, lr = {lr}"))
            .legend()
            .log_y(),
    )?;

    Ok(())
}

// --- Path --------------------------------------------------------------------

/// Trace the iterates as they walk onto the constraint circle.
fn path() -> Result<(), Box<dyn Error>> {
    let problem = Callables::new(
        1,
        |x, y| x + y,
        |_, _| Matrix2::zeros(),
        |_, _| vec![Matrix2::identity() * 2.0],
        |x, y| DMatrix::from_row_slice(1, 2, &[2.0 * x, 2.0 * y]),
        |x, y, l: &DVector<f64>| {
            DVector::from_vec(vec![
                1.0 + 2.0 * l[0] * x,
                1.0 + 2.0 * l[0] * y,
                x * x + y * y - 2.0,
            ])
        },
    );

    let mut obs = PlotObserver::<2>::new(["x² + y² = 2", "Iterates"]);

    for i in 0_u32..=360 {
        let t = f64::from(i).to_radians();
        let r = std::f64::consts::SQRT_2;
        obs.record(r * t.cos(), [Some(r * t.sin()), None]);
    }

    let solution = sqp::solve_unobserved(
        &problem,
        Iterate::new([1.0, 0.5], DVector::from_element(1, 1.0)),
        &Config::new(1000, 1e-8, 1.0)?,
    )?;

    for point in &solution.trajectory {
        obs.record(point.x, [None, Some(point.y)]);
    }

    let (x, y, _) = solution.into_parts();
    obs.show(
        ShowConfig::new()
            .title(format!("SQP: x + y on x² + y² = 2  →  ({x:.3}, {y:.3})"))
            .legend()
            .markers(),
    )?;

    Ok(())
}
