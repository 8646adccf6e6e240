//! CSV export of simulated paths for plotting.

use std::io::Write;

use gbm_mc_rs::PathSample;

use crate::error::Result;

/// Number of paths written, matching what a chart can show legibly.
pub const MAX_EXPORTED_PATHS: usize = 10;

/// Write the time grid and up to `max_paths` paths, one time point per row.
///
/// Header: `t,path_0,path_1,...`
pub fn write_paths_csv<W: Write>(
    writer: W,
    paths: &PathSample,
    maturity: f64,
    max_paths: usize,
) -> Result<()> {
    let shown: Vec<&[f64]> = paths.rows().take(max_paths).collect();
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["t".to_string()];
    header.extend((0..shown.len()).map(|i| format!("path_{}", i)));
    wtr.write_record(&header)?;

    for (j, t) in paths.time_grid(maturity).into_iter().enumerate() {
        let mut record = Vec::with_capacity(shown.len() + 1);
        record.push(t.to_string());
        record.extend(shown.iter().map(|row| row[j].to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
