// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;
use std::path::Path;

use ndarray::Array2;

use crate::core::TemperatureField;
use crate::error::{HeatError, Result};

/// Load a temperature field from a .npy file.
///
/// Accepts f64 arrays, or f32 arrays promoted to f64. The array must be 2D
/// and match `expected_shape`; Fortran-order files are re-laid-out to
/// row-major before the field is built.
pub fn load_npy_field(path: &Path, expected_shape: &[usize; 2]) -> Result<TemperatureField> {
    // Try f64 first
    let arr: Array2<f64> = match ndarray_npy::read_npy(path) {
        Ok(a) => a,
        Err(_) => {
            // Try f32 and promote
            let arr32: Array2<f32> = ndarray_npy::read_npy(path)
                .map_err(|e| HeatError::UnsupportedDtype(format!("{}", e)))?;
            arr32.mapv(|v| v as f64)
        }
    };

    let got_shape: Vec<usize> = arr.shape().to_vec();
    if got_shape != expected_shape {
        return Err(HeatError::ShapeMismatch {
            expected: expected_shape.to_vec(),
            got: got_shape,
        });
    }

    // Collect in logical (row-major) order, so Fortran-order .npy files
    // come out right too.
    let values: Vec<f64> = arr.iter().copied().collect();
    TemperatureField::from_values(expected_shape[0], expected_shape[1], values)
}

/// Save a temperature field to a .npy file.
pub fn save_npy(field: &TemperatureField, path: &Path) -> Result<()> {
    let arr = Array2::from_shape_vec((field.nx(), field.ny()), field.values().to_vec())
        .map_err(|e| HeatError::Other(format!("shape error: {}", e)))?;

    ndarray_npy::write_npy(path, &arr)
        .map_err(|e| HeatError::Other(format!("npy write error: {}", e)))?;

    Ok(())
}

/// Save a temperature field as plain CSV.
///
/// One line per grid row `i`, with `ny` comma-separated values. No header;
/// the file is meant for spreadsheet tools and plotting scripts.
pub fn save_csv(field: &TemperatureField, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut w = std::io::BufWriter::new(file);

    for i in 0..field.nx() {
        for j in 0..field.ny() {
            if j > 0 {
                w.write_all(b",")?;
            }
            write!(w, "{}", field.get(i, j))?;
        }
        w.write_all(b"\n")?;
    }

    w.flush()?;
    Ok(())
}

/// Infer file format from extension.
pub fn infer_format(path: &Path) -> Result<FileFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("npy") => Ok(FileFormat::Npy),
        Some("csv") => Ok(FileFormat::Csv),
        Some(ext) => Err(HeatError::UnsupportedFileFormat(ext.to_string())),
        None => Err(HeatError::UnsupportedFileFormat(
            "(no extension)".to_string(),
        )),
    }
}

/// Supported file formats for field I/O.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    /// NumPy .npy format.
    Npy,
    /// Plain comma-separated values (export only).
    Csv,
}

/// Save a field to a file, inferring format from extension.
pub fn save_field(field: &TemperatureField, path: &Path) -> Result<()> {
    match infer_format(path)? {
        FileFormat::Npy => save_npy(field, path),
        FileFormat::Csv => save_csv(field, path),
    }
}

/// Load a field from a file, inferring format from extension.
///
/// Only .npy import is supported; CSV is an export-only format.
pub fn load_field(path: &Path, expected_shape: &[usize; 2]) -> Result<TemperatureField> {
    match infer_format(path)? {
        FileFormat::Npy => load_npy_field(path, expected_shape),
        FileFormat::Csv => Err(HeatError::UnsupportedFileFormat("csv".to_string())),
    }
}
