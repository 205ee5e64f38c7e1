// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use heat_relax::boundary::{BoundaryCondition, BoundaryKind, BoundarySet};
use heat_relax::core::{Material, SolverConfig};
use heat_relax::io;
use heat_relax::solver::{ProgressInfo, RelaxationSolver};

#[derive(Parser)]
#[command(name = "heat-relax", about = "Steady-state heat conduction solver")]
struct Cli {
    /// Plate length along x
    #[arg(long, default_value = "1.0")]
    lx: f64,

    /// Plate length along y
    #[arg(long, default_value = "1.0")]
    ly: f64,

    /// Number of grid nodes along x
    #[arg(long)]
    nx: usize,

    /// Number of grid nodes along y
    #[arg(long)]
    ny: usize,

    /// Thermal conductivity k
    #[arg(short = 'k', long, default_value = "1.0")]
    conductivity: f64,

    /// Specific heat capacity cp
    #[arg(long, default_value = "1.0")]
    specific_heat: f64,

    /// Mass density rho
    #[arg(long, default_value = "1.0")]
    density: f64,

    /// Boundary condition on the j=0 edge:
    /// "dirichlet:<value>" or "neumann:<flux>"
    #[arg(long, default_value = "dirichlet:0.0")]
    bottom: String,

    /// Boundary condition on the i=0 edge
    #[arg(long, default_value = "dirichlet:0.0")]
    left: String,

    /// Boundary condition on the i=nx-1 edge
    #[arg(long, default_value = "dirichlet:0.0")]
    right: String,

    /// Boundary condition on the j=ny-1 edge
    #[arg(long, default_value = "dirichlet:0.0")]
    top: String,

    /// Convergence tolerance
    #[arg(short = 't', long, default_value = "1e-6")]
    tolerance: f64,

    /// Maximum number of relaxation sweeps
    #[arg(long, default_value = "1000")]
    max_iters: usize,

    /// Output file path (.npy or .csv)
    #[arg(short = 'o', long, default_value = "temperature.npy")]
    output: PathBuf,

    /// Warm-start field (.npy) to use instead of a zero-seeded field
    #[arg(long)]
    initial: Option<PathBuf>,

    /// Print iteration progress to stderr (see --progress-interval)
    #[arg(long)]
    progress: bool,

    /// Progress reporting interval in milliseconds (used with --progress)
    #[arg(long, default_value = "500")]
    progress_interval: u64,
}

fn parse_boundary(flag: &str, s: &str) -> Result<BoundaryCondition> {
    let Some((kind_str, val_str)) = s.split_once(':') else {
        bail!(
            "invalid {}: '{}'. Expected 'dirichlet:<value>' or 'neumann:<flux>'",
            flag,
            s
        );
    };
    let kind: BoundaryKind = kind_str
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid {}: {}", flag, e))?;
    let value: f64 = val_str
        .trim()
        .parse()
        .with_context(|| format!("invalid {} value '{}'", flag, val_str))?;
    if !value.is_finite() {
        bail!("invalid {} value {}: must be finite", flag, value);
    }
    Ok(BoundaryCondition { kind, value })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let material = Material {
        conductivity: cli.conductivity,
        specific_heat: cli.specific_heat,
        density: cli.density,
    };

    let config = SolverConfig::new(
        [cli.lx, cli.ly],
        [cli.nx, cli.ny],
        material,
        cli.tolerance,
        cli.max_iters,
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    let boundaries = BoundarySet {
        bottom: parse_boundary("--bottom", &cli.bottom)?,
        left: parse_boundary("--left", &cli.left)?,
        right: parse_boundary("--right", &cli.right)?,
        top: parse_boundary("--top", &cli.top)?,
    };

    let mut solver = RelaxationSolver::new(config, boundaries);

    if cli.progress {
        let interval_ms = cli.progress_interval;
        let last_print = std::cell::Cell::new(0u64);
        let start = std::time::Instant::now();
        solver = solver.with_progress(Box::new(move |info: ProgressInfo| {
            let now_ms = start.elapsed().as_millis() as u64;
            let prev = last_print.get();
            if info.iteration == 0 || now_ms >= prev + interval_ms {
                last_print.set(now_ms);
                eprintln!(
                    "[{:.1}s] iteration {}/{}",
                    info.elapsed.as_secs_f64(),
                    info.iteration,
                    info.max_iterations,
                );
            }
        }));
    }

    let mut field = match &cli.initial {
        Some(path) => {
            let mut field = io::load_field(path, &[cli.nx, cli.ny])
                .with_context(|| format!("failed to load initial field from {}", path.display()))?;
            solver.apply_boundaries(&mut field);
            field
        }
        None => solver.seed_field(),
    };

    let report = solver
        .solve(&mut field)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    if report.converged {
        eprintln!("converged after {} iterations", report.iterations);
    } else {
        eprintln!("did not converge within {} iterations", report.iterations);
    }

    io::save_field(&field, &cli.output).map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
