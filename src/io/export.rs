//! Export the plotted curve grid to CSV.
//!
//! One row per grid point with the reference value and one column per fitted
//! degree, so the curves can be re-plotted in a spreadsheet.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::data::reference;
use crate::domain::DegreeFit;
use crate::error::AppError;
use crate::models::evaluate;

/// Write the grid CSV to `path`.
pub fn write_grid_csv(path: &Path, grid: &[f64], fits: &[DegreeFit]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    write_grid(&mut out, grid, fits)
        .and_then(|()| out.flush())
        .map_err(|e| AppError::usage(format!("Failed to write export CSV: {e}")))?;

    info!("wrote {} grid rows to {}", grid.len(), path.display());
    Ok(())
}

fn write_grid<W: Write>(out: &mut W, grid: &[f64], fits: &[DegreeFit]) -> std::io::Result<()> {
    write!(out, "x,reference")?;
    for fit in fits {
        write!(out, ",degree_{}", fit.degree)?;
    }
    writeln!(out)?;

    for &x in grid {
        write!(out, "{x:.10},{:.10}", reference(x))?;
        for fit in fits {
            write!(out, ",{:.10}", evaluate(x, &fit.coefficients))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
