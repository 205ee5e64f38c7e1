// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{HeatError, Result};

/// A dense 2D temperature field on a Cartesian grid.
///
/// Values are stored in row-major order: node `(i, j)` lives at flat index
/// `i * ny + j`, with `i` running along the x-axis and `j` along the y-axis.
/// New fields are zero-initialized.
#[derive(Debug, Clone)]
pub struct TemperatureField {
    nx: usize,
    ny: usize,
    data: Box<[f64]>,
}

impl TemperatureField {
    /// Create a zero-filled field with `nx * ny` nodes.
    pub fn new(nx: usize, ny: usize) -> Self {
        TemperatureField {
            nx,
            ny,
            data: vec![0.0; nx * ny].into_boxed_slice(),
        }
    }

    /// Get the temperature at node `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.ny + j]
    }

    /// Set the temperature at node `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, val: f64) {
        self.data[i * self.ny + j] = val;
    }

    /// Number of nodes along the x-axis.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of nodes along the y-axis.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Get the grid shape as `[nx, ny]`.
    pub fn shape(&self) -> [usize; 2] {
        [self.nx, self.ny]
    }

    /// Get a reference to the raw row-major storage.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Overwrite this field's values from another field of the same shape,
    /// reusing the existing allocation.
    ///
    /// # Errors
    /// Returns a shape mismatch error if the two fields differ in shape.
    pub fn copy_from(&mut self, src: &TemperatureField) -> Result<()> {
        if self.nx != src.nx || self.ny != src.ny {
            return Err(HeatError::ShapeMismatch {
                expected: vec![self.nx, self.ny],
                got: vec![src.nx, src.ny],
            });
        }
        self.data.copy_from_slice(&src.data);
        Ok(())
    }

    /// Build a field from row-major values.
    ///
    /// # Errors
    /// Returns a shape mismatch error if `values.len() != nx * ny`.
    pub fn from_values(nx: usize, ny: usize, values: Vec<f64>) -> Result<Self> {
        if values.len() != nx * ny {
            return Err(HeatError::ShapeMismatch {
                expected: vec![nx, ny],
                got: vec![values.len()],
            });
        }
        Ok(TemperatureField {
            nx,
            ny,
            data: values.into_boxed_slice(),
        })
    }
}

/// Material properties of the conducting plate.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Thermal conductivity k (W/(m·K)).
    pub conductivity: f64,
    /// Specific heat capacity cp (J/(kg·K)).
    pub specific_heat: f64,
    /// Mass density rho (kg/m^3).
    pub density: f64,
}

impl Material {
    /// Thermal diffusivity alpha = k / (cp * rho).
    ///
    /// Not used by the steady-state update itself; carried for reporting and
    /// for callers that need the transient time scale.
    pub fn diffusivity(&self) -> f64 {
        self.conductivity / (self.specific_heat * self.density)
    }
}

/// Immutable, validated configuration for a relaxation solve.
///
/// Grid spacings are derived as `dx = lx / nx` and `dy = ly / ny`.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    domain: [f64; 2],
    shape: [usize; 2],
    dx: f64,
    dy: f64,
    material: Material,
    eps: f64,
    max_iters: usize,
}

impl SolverConfig {
    /// Create a new solver configuration.
    ///
    /// # Parameters
    /// - `domain`: Physical extents `[lx, ly]` (each must be positive and finite)
    /// - `shape`: Number of nodes `[nx, ny]` (each must be >= 3)
    /// - `material`: Material properties (each must be positive and finite)
    /// - `eps`: Convergence tolerance (must be positive and finite)
    /// - `max_iters`: Iteration cap (must be > 0)
    ///
    /// # Errors
    /// Returns an error naming the first invalid parameter.
    pub fn new(
        domain: [f64; 2],
        shape: [usize; 2],
        material: Material,
        eps: f64,
        max_iters: usize,
    ) -> Result<Self> {
        for (axis, &length) in domain.iter().enumerate() {
            if !length.is_finite() || length <= 0.0 {
                return Err(HeatError::InvalidDomainLength { axis, length });
            }
        }

        for (axis, &size) in shape.iter().enumerate() {
            if size < 3 {
                return Err(HeatError::InvalidGridShape { axis, size });
            }
        }

        let props = [
            ("conductivity", material.conductivity),
            ("specific heat", material.specific_heat),
            ("density", material.density),
        ];
        for (property, value) in props {
            if !value.is_finite() || value <= 0.0 {
                return Err(HeatError::InvalidMaterial { property, value });
            }
        }

        if !eps.is_finite() || eps <= 0.0 {
            return Err(HeatError::InvalidTolerance(eps));
        }

        if max_iters == 0 {
            return Err(HeatError::InvalidIterationCap(max_iters));
        }

        let dx = domain[0] / shape[0] as f64;
        let dy = domain[1] / shape[1] as f64;

        Ok(SolverConfig {
            domain,
            shape,
            dx,
            dy,
            material,
            eps,
            max_iters,
        })
    }

    /// Physical domain extents `[lx, ly]`.
    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    /// Grid shape `[nx, ny]`.
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// Grid spacing along the x-axis.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Grid spacing along the y-axis.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Material properties.
    pub fn material(&self) -> Material {
        self.material
    }

    /// Convergence tolerance.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Iteration cap.
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copper() -> Material {
        Material {
            conductivity: 385.0,
            specific_heat: 390.0,
            density: 8960.0,
        }
    }

    #[test]
    fn field_starts_at_zero() {
        let field = TemperatureField::new(4, 5);
        for i in 0..4 {
            for j in 0..5 {
                assert_eq!(field.get(i, j), 0.0);
            }
        }
    }

    #[test]
    fn field_get_set_roundtrip() {
        let mut field = TemperatureField::new(6, 4);
        field.set(2, 3, 42.5);
        assert_eq!(field.get(2, 3), 42.5);
        // Row-major layout: (i, j) lands at i * ny + j.
        assert_eq!(field.values()[2 * 4 + 3], 42.5);
    }

    #[test]
    fn field_clone_is_deep() {
        let mut field = TemperatureField::new(3, 3);
        field.set(1, 1, 7.0);
        let snapshot = field.clone();
        field.set(1, 1, 9.0);
        assert_eq!(snapshot.get(1, 1), 7.0);
        assert_eq!(field.get(1, 1), 9.0);
    }

    #[test]
    fn field_copy_from_reuses_allocation() {
        let mut field = TemperatureField::new(3, 3);
        let mut other = TemperatureField::new(3, 3);
        other.set(0, 2, 5.0);
        field.copy_from(&other).unwrap();
        assert_eq!(field.get(0, 2), 5.0);
    }

    #[test]
    fn field_copy_from_shape_mismatch() {
        let mut field = TemperatureField::new(3, 3);
        let other = TemperatureField::new(4, 3);
        assert!(matches!(
            field.copy_from(&other),
            Err(HeatError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn field_from_values_checks_length() {
        let result = TemperatureField::from_values(3, 3, vec![0.0; 8]);
        assert!(matches!(result, Err(HeatError::ShapeMismatch { .. })));
        let field = TemperatureField::from_values(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(field.get(1, 2), 6.0);
    }

    #[test]
    fn config_derives_spacings() {
        let config = SolverConfig::new([2.0, 1.0], [10, 20], copper(), 1e-6, 100).unwrap();
        assert_eq!(config.dx(), 0.2);
        assert_eq!(config.dy(), 0.05);
    }

    #[test]
    fn config_invalid_domain_length() {
        let result = SolverConfig::new([0.0, 1.0], [10, 10], copper(), 1e-6, 100);
        assert!(matches!(
            result,
            Err(HeatError::InvalidDomainLength { axis: 0, .. })
        ));
        let result = SolverConfig::new([1.0, f64::NAN], [10, 10], copper(), 1e-6, 100);
        assert!(matches!(
            result,
            Err(HeatError::InvalidDomainLength { axis: 1, .. })
        ));
    }

    #[test]
    fn config_invalid_grid_shape() {
        let result = SolverConfig::new([1.0, 1.0], [2, 10], copper(), 1e-6, 100);
        assert!(matches!(
            result,
            Err(HeatError::InvalidGridShape { axis: 0, size: 2 })
        ));
    }

    #[test]
    fn config_invalid_material() {
        let mut bad = copper();
        bad.density = -1.0;
        let result = SolverConfig::new([1.0, 1.0], [10, 10], bad, 1e-6, 100);
        assert!(matches!(
            result,
            Err(HeatError::InvalidMaterial {
                property: "density",
                ..
            })
        ));
    }

    #[test]
    fn config_invalid_tolerance() {
        let result = SolverConfig::new([1.0, 1.0], [10, 10], copper(), 0.0, 100);
        assert!(matches!(result, Err(HeatError::InvalidTolerance(_))));
    }

    #[test]
    fn config_invalid_iteration_cap() {
        let result = SolverConfig::new([1.0, 1.0], [10, 10], copper(), 1e-6, 0);
        assert!(matches!(result, Err(HeatError::InvalidIterationCap(0))));
    }

    #[test]
    fn material_diffusivity() {
        let m = Material {
            conductivity: 100.0,
            specific_heat: 10.0,
            density: 2.0,
        };
        assert_eq!(m.diffusivity(), 5.0);
    }
}
