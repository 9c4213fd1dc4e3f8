use super::error::Error;
use crate::io::scores::{read as read_scores, scores_file_name};
use crate::model::scores::ScoreStatus;
use log::debug;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Looks up the pTM/ipTM scores of one multimer model in a prediction folder.
///
/// Models whose name does not contain `marker` never produce these scores and
/// are reported as [`ScoreStatus::NotProduced`] without touching the disk. An
/// empty marker accepts every model.
pub fn lookup_model_scores(
    folder: &Path,
    multimer_model: &str,
    marker: &str,
) -> Result<ScoreStatus, Error> {
    if !multimer_model.contains(marker) {
        return Ok(ScoreStatus::NotProduced);
    }

    let path = folder.join(scores_file_name(multimer_model));
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No score file for {multimer_model} at {}", path.display());
            return Ok(ScoreStatus::Unavailable);
        }
        Err(e) => return Err(Error::file(&path, e)),
    };

    let scores = read_scores(BufReader::new(file))?;
    Ok(ScoreStatus::Extracted(scores))
}
