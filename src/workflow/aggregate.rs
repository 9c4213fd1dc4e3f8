use super::config::{AnalysisConfig, DedupPolicy};
use super::error::Error;
use super::staged::Staged;
use crate::io::table::{MetricsTable, TableLayout};
use crate::model::metrics::ModelMetricsRow;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// What one call to [`record_prediction`] did to the tables on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct TableUpdate {
    pub metrics_path: PathBuf,
    pub filtered_path: PathBuf,
    pub appended: usize,
    /// Earlier rows dropped under [`DedupPolicy::Replace`].
    pub replaced: usize,
    pub total_rows: usize,
    pub filtered_rows: usize,
}

/// Reads a metrics table, or an empty one when the file does not exist yet.
pub fn load_table(path: &Path) -> Result<MetricsTable, Error> {
    match File::open(path) {
        Ok(file) => Ok(MetricsTable::read(BufReader::new(file))?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No table at {}; starting empty", path.display());
            Ok(MetricsTable::new())
        }
        Err(e) => Err(Error::file(path, e)),
    }
}

/// Replaces the table at `path`; a failed write leaves the previous file in place.
pub fn save_table(path: &Path, table: &MetricsTable, layout: TableLayout) -> Result<(), Error> {
    Staged::write(path, |w| table.write(w, layout))?.commit()
}

/// Folds the rows of one prediction into the tables kept in `dir`.
///
/// The full table is rewritten with a leading index column; the filtered table
/// is regenerated from it, without one. Both are written out completely before
/// either replaces its file, and the full table is replaced last, so an error
/// never leaves new rows recorded behind a failed call. Nothing is locked: two
/// processes updating the same directory at once can lose rows.
pub fn record_prediction(
    dir: &Path,
    rows: Vec<ModelMetricsRow>,
    config: &AnalysisConfig,
) -> Result<TableUpdate, Error> {
    let metrics_path = dir.join(&config.metrics_file);
    let filtered_path = dir.join(&config.filtered_file);

    let mut table = load_table(&metrics_path)?;
    let before = table.len();

    if config.dedup == DedupPolicy::Replace {
        table.retain(|old| !rows.iter().any(|new| new.info.same_prediction(&old.info)));
    }
    let replaced = before - table.len();

    if config.dedup == DedupPolicy::Append {
        if let Some(first) = rows.first() {
            let previous = table.count_prediction(&first.info);
            if previous > 0 {
                warn!(
                    "'{}' already has {previous} rows in {}; appending duplicates",
                    first.info.prediction_name,
                    metrics_path.display()
                );
            }
        }
    }

    let appended = rows.len();
    table.extend(rows);

    let filtered = table.filtered(config.confidence_threshold);
    let full = Staged::write(&metrics_path, |w| table.write(w, TableLayout::Indexed))?;
    let passing = Staged::write(&filtered_path, |w| filtered.write(w, TableLayout::Plain))?;
    passing.commit()?;
    full.commit()?;

    info!(
        "Wrote {} rows to {} ({} passing {})",
        table.len(),
        metrics_path.display(),
        filtered.len(),
        config.confidence_threshold
    );

    Ok(TableUpdate {
        metrics_path,
        filtered_path,
        appended,
        replaced,
        total_rows: table.len(),
        filtered_rows: filtered.len(),
    })
}
