// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use crate::core::TemperatureField;
use crate::error::HeatError;

/// One of the four edges of the rectangular domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// The j = 0 edge.
    Bottom,
    /// The i = 0 edge.
    Left,
    /// The i = nx - 1 edge.
    Right,
    /// The j = ny - 1 edge.
    Top,
}

impl Edge {
    /// All four edges in application order: bottom, left, right, top.
    pub fn all() -> [Edge; 4] {
        [Edge::Bottom, Edge::Left, Edge::Right, Edge::Top]
    }
}

/// The kind of condition imposed on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Fixed temperature along the edge.
    Dirichlet,
    /// Fixed heat flux through the edge.
    Neumann,
}

impl FromStr for BoundaryKind {
    type Err = HeatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dirichlet" => Ok(BoundaryKind::Dirichlet),
            "neumann" => Ok(BoundaryKind::Neumann),
            other => Err(HeatError::Other(format!(
                "unknown boundary kind '{}' (expected 'dirichlet' or 'neumann')",
                other
            ))),
        }
    }
}

/// A boundary condition: a kind plus its scalar parameter.
///
/// For Dirichlet the scalar is the fixed temperature; for Neumann it is the
/// imposed flux.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryCondition {
    /// The condition kind.
    pub kind: BoundaryKind,
    /// Fixed temperature (Dirichlet) or flux (Neumann).
    pub value: f64,
}

impl BoundaryCondition {
    /// A fixed-temperature condition.
    pub fn dirichlet(value: f64) -> Self {
        BoundaryCondition {
            kind: BoundaryKind::Dirichlet,
            value,
        }
    }

    /// A fixed-flux condition.
    pub fn neumann(flux: f64) -> Self {
        BoundaryCondition {
            kind: BoundaryKind::Neumann,
            value: flux,
        }
    }
}

/// The four boundary conditions of a solve, one per edge.
#[derive(Debug, Clone, Copy)]
pub struct BoundarySet {
    /// Condition on the j = 0 edge.
    pub bottom: BoundaryCondition,
    /// Condition on the i = 0 edge.
    pub left: BoundaryCondition,
    /// Condition on the i = nx - 1 edge.
    pub right: BoundaryCondition,
    /// Condition on the j = ny - 1 edge.
    pub top: BoundaryCondition,
}

impl BoundarySet {
    /// The condition assigned to `edge`.
    pub fn get(&self, edge: Edge) -> BoundaryCondition {
        match edge {
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Top => self.top,
        }
    }
}

/// Apply one boundary condition along a single edge.
///
/// Dirichlet sets every edge node to the fixed value. Neumann sets every edge
/// node to its inward neighbor plus `k * flux * spacing_normal`, where the
/// inward neighbor is one node toward the interior. `spacing_normal` is the
/// grid spacing perpendicular to the edge (`dy` for bottom/top, `dx` for
/// left/right).
///
/// Corner nodes are written here like any other edge node, but
/// [`reconcile_corners`] overwrites them afterwards.
pub fn apply_edge(
    field: &mut TemperatureField,
    edge: Edge,
    bc: BoundaryCondition,
    k: f64,
    spacing_normal: f64,
) {
    let nx = field.nx();
    let ny = field.ny();
    let offset = k * bc.value * spacing_normal;
    match edge {
        Edge::Bottom => {
            for i in 0..nx {
                match bc.kind {
                    BoundaryKind::Dirichlet => field.set(i, 0, bc.value),
                    BoundaryKind::Neumann => field.set(i, 0, field.get(i, 1) + offset),
                }
            }
        }
        Edge::Left => {
            for j in 0..ny {
                match bc.kind {
                    BoundaryKind::Dirichlet => field.set(0, j, bc.value),
                    BoundaryKind::Neumann => field.set(0, j, field.get(1, j) + offset),
                }
            }
        }
        Edge::Right => {
            for j in 0..ny {
                match bc.kind {
                    BoundaryKind::Dirichlet => field.set(nx - 1, j, bc.value),
                    BoundaryKind::Neumann => field.set(nx - 1, j, field.get(nx - 2, j) + offset),
                }
            }
        }
        Edge::Top => {
            for i in 0..nx {
                match bc.kind {
                    BoundaryKind::Dirichlet => field.set(i, ny - 1, bc.value),
                    BoundaryKind::Neumann => field.set(i, ny - 1, field.get(i, ny - 2) + offset),
                }
            }
        }
    }
}

/// Overwrite each corner with the arithmetic mean of its two edge-adjacent
/// neighbors, computed from the field's current values.
///
/// Corners are never governed by an edge formula; this runs after every full
/// edge pass, both at seeding and after each sweep.
pub fn reconcile_corners(field: &mut TemperatureField) {
    let nx = field.nx();
    let ny = field.ny();
    field.set(0, 0, 0.5 * (field.get(1, 0) + field.get(0, 1)));
    field.set(
        nx - 1,
        0,
        0.5 * (field.get(nx - 2, 0) + field.get(nx - 1, 1)),
    );
    field.set(
        0,
        ny - 1,
        0.5 * (field.get(1, ny - 1) + field.get(0, ny - 2)),
    );
    field.set(
        nx - 1,
        ny - 1,
        0.5 * (field.get(nx - 2, ny - 1) + field.get(nx - 1, ny - 2)),
    );
}

/// Apply all four boundary conditions in order (bottom, left, right, top),
/// then reconcile the corners.
pub fn apply_all(field: &mut TemperatureField, set: &BoundarySet, k: f64, dx: f64, dy: f64) {
    for edge in Edge::all() {
        let spacing_normal = match edge {
            Edge::Bottom | Edge::Top => dy,
            Edge::Left | Edge::Right => dx,
        };
        apply_edge(field, edge, set.get(edge), k, spacing_normal);
    }
    reconcile_corners(field);
}
