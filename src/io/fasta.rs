use crate::io::{Format, error::Error};
use serde::Deserialize;
use std::io::{BufRead, Read, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Header text without the leading `>`.
    pub header: String,
    pub sequence: String,
}

impl FastaRecord {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// Accession used to name per-protein files.
    ///
    /// UniProt headers (`sp|P69905|HBA_HUMAN ...`) yield the accession field;
    /// anything else yields its first whitespace-delimited token.
    pub fn identifier(&self) -> &str {
        let mut fields = self.header.split('|');
        fields.next();
        match fields.next().map(str::trim) {
            Some(accession) if !accession.is_empty() => accession,
            _ => self.header.split_whitespace().next().unwrap_or(""),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

pub fn read<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>, Error> {
    let mut records: Vec<FastaRecord> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            records.push(FastaRecord::new(header.trim(), String::new()));
        } else {
            let record = records.last_mut().ok_or_else(|| {
                Error::parse(Format::Fasta, idx + 1, "sequence data before the first header")
            })?;
            record.sequence.push_str(line);
        }
    }

    Ok(records)
}

pub fn write<W: Write>(mut writer: W, records: &[FastaRecord]) -> Result<(), Error> {
    for record in records {
        writeln!(writer, ">{}", record.header)?;
        writeln!(writer, "{}", record.sequence)?;
    }
    writer.flush()?;
    Ok(())
}

/// Lengths of the first two records, which AlphaFold treats as chains A and B.
pub fn chain_lengths(records: &[FastaRecord]) -> (usize, usize) {
    let length = |idx: usize| records.get(idx).map_or(0, FastaRecord::len);
    (length(0), length(1))
}

#[derive(Debug, Deserialize)]
struct PairRow {
    uid1: String,
    uid2: String,
}

/// Reads a CSV pair list with `uid1` and `uid2` columns; other columns are ignored.
pub fn read_pair_list<R: Read>(reader: R) -> Result<Vec<(String, String)>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in ["uid1", "uid2"] {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::missing_column(Format::PairList, column));
        }
    }

    csv_reader
        .deserialize::<PairRow>()
        .map(|row| -> Result<(String, String), Error> {
            let row = row?;
            Ok((row.uid1, row.uid2))
        })
        .collect()
}
