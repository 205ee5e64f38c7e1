// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use std::time::{Duration, Instant};

use crate::boundary::{apply_all, BoundarySet};
use crate::core::{SolverConfig, TemperatureField};
use crate::error::{HeatError, Result};
use crate::update_kernels::{converged, relax_interior};

/// Progress information passed to the optional callback.
pub struct ProgressInfo {
    /// Zero-based index of the sweep currently being run.
    pub iteration: usize,
    /// The configured iteration cap.
    pub max_iterations: usize,
    /// Elapsed time since the solve started.
    pub elapsed: Duration,
}

/// Outcome of a relaxation solve.
///
/// Non-convergence within the iteration cap is a normal outcome, not an
/// error; the field still holds the last sweep's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveReport {
    /// Whether the convergence criterion was met before the cap.
    pub converged: bool,
    /// The zero-based index of the sweep at which convergence was detected,
    /// or the iteration cap if it was exhausted.
    pub iterations: usize,
}

/// A Gauss-Seidel relaxation solver for steady-state heat conduction.
///
/// Each iteration snapshots the field, sweeps the interior, reapplies the
/// boundary conditions, reconciles the corners, and checks convergence
/// against the snapshot. The solve runs on a single thread and blocks until
/// it converges or exhausts the iteration cap.
pub struct RelaxationSolver {
    config: SolverConfig,
    boundaries: BoundarySet,
    progress_callback: Option<Box<dyn Fn(ProgressInfo)>>,
}

impl RelaxationSolver {
    /// Create a new solver from a validated configuration and a full set of
    /// boundary conditions.
    pub fn new(config: SolverConfig, boundaries: BoundarySet) -> Self {
        RelaxationSolver {
            config,
            boundaries,
            progress_callback: None,
        }
    }

    /// Set a progress callback that will be invoked periodically during
    /// solving (builder method). The callback receives progress information
    /// approximately every 500ms.
    pub fn with_progress(mut self, callback: Box<dyn Fn(ProgressInfo)>) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Get a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Get a reference to the boundary conditions.
    pub fn boundaries(&self) -> &BoundarySet {
        &self.boundaries
    }

    /// Build the initial field for this configuration: all zeros, then one
    /// boundary pass (edges and corners).
    pub fn seed_field(&self) -> TemperatureField {
        let [nx, ny] = self.config.shape();
        let mut field = TemperatureField::new(nx, ny);
        self.apply_boundaries(&mut field);
        field
    }

    /// Run the relaxation to steady state, mutating `field` in place.
    ///
    /// The field is typically produced by [`seed_field`](Self::seed_field);
    /// any field of the right shape works as a warm start, but its boundary
    /// nodes should already satisfy the conditions (run
    /// [`apply_boundaries`](Self::apply_boundaries) first if unsure).
    ///
    /// # Errors
    /// Returns a shape mismatch error if the field's dimensions do not match
    /// the configuration.
    pub fn solve(&self, field: &mut TemperatureField) -> Result<SolveReport> {
        let [nx, ny] = self.config.shape();
        if field.nx() != nx || field.ny() != ny {
            return Err(HeatError::ShapeMismatch {
                expected: vec![nx, ny],
                got: vec![field.nx(), field.ny()],
            });
        }

        let dx = self.config.dx();
        let dy = self.config.dy();
        let eps = self.config.eps();
        let max_iters = self.config.max_iters();

        let start_time = Instant::now();
        let mut last_progress = Duration::ZERO;
        let mut previous = field.clone();

        for it in 0..max_iters {
            if let Some(cb) = &self.progress_callback {
                let elapsed = start_time.elapsed();
                if it == 0 || elapsed >= last_progress + Duration::from_millis(500) {
                    last_progress = elapsed;
                    cb(ProgressInfo {
                        iteration: it,
                        max_iterations: max_iters,
                        elapsed,
                    });
                }
            }

            previous.copy_from(field)?;
            relax_interior(field, dx, dy);
            self.apply_boundaries(field);

            if converged(field, &previous, eps) {
                return Ok(SolveReport {
                    converged: true,
                    iterations: it,
                });
            }
        }

        Ok(SolveReport {
            converged: false,
            iterations: max_iters,
        })
    }

    /// Apply all four boundary conditions to `field`, then reconcile the
    /// corners.
    pub fn apply_boundaries(&self, field: &mut TemperatureField) {
        apply_all(
            field,
            &self.boundaries,
            self.config.material().conductivity,
            self.config.dx(),
            self.config.dy(),
        );
    }
}
