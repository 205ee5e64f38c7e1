// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

/// Errors that can occur during solver setup, I/O, or execution.
#[derive(Debug)]
pub enum HeatError {
    /// Domain length is not positive and finite.
    InvalidDomainLength {
        /// The axis index.
        axis: usize,
        /// The length provided.
        length: f64,
    },
    /// Grid shape is invalid (dimension too small).
    InvalidGridShape {
        /// The axis index.
        axis: usize,
        /// The size provided.
        size: usize,
    },
    /// Material property is not positive and finite.
    InvalidMaterial {
        /// The name of the offending property.
        property: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// Convergence tolerance is not positive and finite.
    InvalidTolerance(f64),
    /// Iteration cap is zero.
    InvalidIterationCap(usize),
    /// Array shape does not match expected shape.
    ShapeMismatch {
        /// The expected shape.
        expected: Vec<usize>,
        /// The actual shape encountered.
        got: Vec<usize>,
    },
    /// Unsupported data type in file.
    UnsupportedDtype(String),
    /// Unsupported file format (unrecognized extension).
    UnsupportedFileFormat(String),
    /// I/O error occurred.
    IoError(std::io::Error),
    /// Other error with a descriptive message.
    Other(String),
}

impl fmt::Display for HeatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeatError::InvalidDomainLength { axis, length } => {
                write!(
                    f,
                    "invalid domain length: axis {} has length {} (must be positive and finite)",
                    axis, length
                )
            }
            HeatError::InvalidGridShape { axis, size } => {
                write!(
                    f,
                    "invalid grid shape: axis {} has size {} (must be >= 3)",
                    axis, size
                )
            }
            HeatError::InvalidMaterial { property, value } => {
                write!(
                    f,
                    "invalid {}: {} (must be positive and finite)",
                    property, value
                )
            }
            HeatError::InvalidTolerance(tol) => {
                write!(
                    f,
                    "invalid tolerance: {} (must be positive and finite)",
                    tol
                )
            }
            HeatError::InvalidIterationCap(cap) => {
                write!(f, "invalid iteration cap: {} (must be > 0)", cap)
            }
            HeatError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {:?}, got {:?}", expected, got)
            }
            HeatError::UnsupportedDtype(dtype) => {
                write!(f, "unsupported dtype: {}", dtype)
            }
            HeatError::UnsupportedFileFormat(ext) => {
                write!(f, "unsupported file format: {}", ext)
            }
            HeatError::IoError(e) => write!(f, "I/O error: {}", e),
            HeatError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for HeatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeatError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HeatError {
    fn from(e: std::io::Error) -> Self {
        HeatError::IoError(e)
    }
}

/// Convenience type alias for Results with HeatError.
pub type Result<T> = std::result::Result<T, HeatError>;
