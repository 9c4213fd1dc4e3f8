use super::error::Error;
use crate::io::table::read_column;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Occurrence count of one column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub value: String,
    pub count: usize,
}

/// Counts each value of `column` in a metrics table file, in first-seen order.
pub fn tally_column(path: &Path, column: &str) -> Result<Vec<Tally>, Error> {
    let file = File::open(path).map_err(|e| Error::file(path, e))?;
    let values = read_column(BufReader::new(file), column)?;
    Ok(tally(values))
}

pub fn tally(values: impl IntoIterator<Item = String>) -> Vec<Tally> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<Tally> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push(Tally { value, count: 1 });
            }
        }
    }
    counts
}
