// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use crate::core::TemperatureField;

/// Perform one in-place Gauss-Seidel sweep over the interior nodes.
///
/// Each interior node is replaced by the five-point weighted average of its
/// four neighbors:
///
/// z[i][j] = (dy^2 * (z[i+1][j] + z[i-1][j]) + dx^2 * (z[i][j+1] + z[i][j-1]))
///           / (2 * (dx^2 + dy^2))
///
/// The sweep runs in row-major order (i outer, j inner) and mutates the field
/// as it goes, so nodes later in the sweep see already-updated neighbors.
/// Boundary nodes are not touched.
pub fn relax_interior(field: &mut TemperatureField, dx: f64, dy: f64) {
    let nx = field.nx();
    let ny = field.ny();
    let dx2 = dx * dx;
    let dy2 = dy * dy;
    let denom = 2.0 * (dx2 + dy2);
    for i in 1..nx - 1 {
        for j in 1..ny - 1 {
            let val = (dy2 * (field.get(i + 1, j) + field.get(i - 1, j))
                + dx2 * (field.get(i, j + 1) + field.get(i, j - 1)))
                / denom;
            field.set(i, j, val);
        }
    }
}

/// Scan the interior for convergence against a pre-sweep snapshot.
///
/// Returns true as soon as ANY interior node's absolute change is strictly
/// below `eps`. This is a weak criterion: a single quiet node stops the scan
/// even if the rest of the field is still moving. A max-norm rule over all
/// interior nodes would be stricter; this one reports convergence early.
///
/// Fields with no interior nodes (`nx < 3` or `ny < 3`) never converge under
/// this rule because the scan range is empty.
pub fn converged(current: &TemperatureField, previous: &TemperatureField, eps: f64) -> bool {
    let nx = current.nx();
    let ny = current.ny();
    for i in 1..nx.saturating_sub(1) {
        for j in 1..ny.saturating_sub(1) {
            if (current.get(i, j) - previous.get(i, j)).abs() < eps {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_known_case() {
        // 3x3 with unit spacing: the single interior node becomes the plain
        // average of its four neighbors.
        let mut field = TemperatureField::new(3, 3);
        field.set(0, 1, 4.0);
        field.set(2, 1, 8.0);
        field.set(1, 0, 2.0);
        field.set(1, 2, 6.0);
        relax_interior(&mut field, 1.0, 1.0);
        assert!((field.get(1, 1) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn sweep_anisotropic_spacing() {
        // dx=2, dy=1: denom = 2*(4+1) = 10
        // val = (1*(a + b) + 4*(c + d)) / 10
        let mut field = TemperatureField::new(3, 3);
        field.set(2, 1, 10.0); // z[i+1][j]
        field.set(0, 1, 0.0); // z[i-1][j]
        field.set(1, 2, 5.0); // z[i][j+1]
        field.set(1, 0, 5.0); // z[i][j-1]
        relax_interior(&mut field, 2.0, 1.0);
        let expected = (1.0 * 10.0 + 4.0 * 10.0) / 10.0;
        assert!((field.get(1, 1) - expected).abs() < 1e-12);
    }

    #[test]
    fn sweep_uses_updated_neighbors() {
        // 4x3, unit spacing. Interior nodes (1,1) and (2,1) in row-major
        // order: (2,1) must see the value (1,1) just received.
        let mut field = TemperatureField::new(4, 3);
        field.set(0, 1, 8.0);
        relax_interior(&mut field, 1.0, 1.0);
        let first = 8.0 / 4.0;
        assert!((field.get(1, 1) - first).abs() < 1e-12);
        let second = first / 4.0;
        assert!((field.get(2, 1) - second).abs() < 1e-12);
    }

    #[test]
    fn sweep_leaves_boundary_untouched() {
        let mut field = TemperatureField::new(4, 4);
        for i in 0..4 {
            field.set(i, 0, 1.0);
            field.set(i, 3, 2.0);
        }
        for j in 0..4 {
            field.set(0, j, 3.0);
            field.set(3, j, 4.0);
        }
        let before = field.clone();
        relax_interior(&mut field, 1.0, 1.0);
        for i in 0..4 {
            assert_eq!(field.get(i, 0), before.get(i, 0));
            assert_eq!(field.get(i, 3), before.get(i, 3));
        }
        for j in 0..4 {
            assert_eq!(field.get(0, j), before.get(0, j));
            assert_eq!(field.get(3, j), before.get(3, j));
        }
    }

    #[test]
    fn converged_on_first_quiet_node() {
        // One interior node unchanged, another far from converged: the quiet
        // node alone is enough.
        let mut current = TemperatureField::new(4, 3);
        let previous = TemperatureField::new(4, 3);
        current.set(2, 1, 100.0);
        assert!(converged(&current, &previous, 1e-6));
    }

    #[test]
    fn not_converged_when_all_nodes_move() {
        let mut current = TemperatureField::new(4, 3);
        let previous = TemperatureField::new(4, 3);
        current.set(1, 1, 1.0);
        current.set(2, 1, 2.0);
        assert!(!converged(&current, &previous, 0.5));
    }

    #[test]
    fn change_equal_to_eps_is_not_converged() {
        // Strict inequality: |change| == eps does not count.
        let mut current = TemperatureField::new(3, 3);
        let previous = TemperatureField::new(3, 3);
        current.set(1, 1, 0.5);
        assert!(!converged(&current, &previous, 0.5));
        assert!(converged(&current, &previous, 0.5 + 1e-9));
    }

    #[test]
    fn empty_interior_never_converges() {
        let current = TemperatureField::new(2, 5);
        let previous = TemperatureField::new(2, 5);
        assert!(!converged(&current, &previous, 1e30));
        let current = TemperatureField::new(5, 1);
        let previous = TemperatureField::new(5, 1);
        assert!(!converged(&current, &previous, 1e30));
    }

    #[test]
    fn uniform_field_is_fixed_point() {
        let mut field = TemperatureField::new(5, 5);
        for i in 0..5 {
            for j in 0..5 {
                field.set(i, j, 42.0);
            }
        }
        relax_interior(&mut field, 0.1, 0.2);
        for i in 0..5 {
            for j in 0..5 {
                assert!((field.get(i, j) - 42.0).abs() < 1e-12);
            }
        }
    }
}
