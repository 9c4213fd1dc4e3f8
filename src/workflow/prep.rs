//! FASTA preparation for multimer screens: splitting proteome-style files into
//! one file per protein and concatenating listed pairs into dimer inputs.

use super::error::Error;
use crate::io::fasta::{FastaRecord, read as read_fasta, read_pair_list, write as write_fasta};
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Files written by [`pair_fastas`], and the pairs that could not be built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairSummary {
    pub written: Vec<PathBuf>,
    /// `(uid1, uid2, missing file)` for each skipped pair.
    pub skipped: Vec<(String, String, PathBuf)>,
}

pub fn read_fasta_file(path: &Path) -> Result<Vec<FastaRecord>, Error> {
    let file = File::open(path).map_err(|e| Error::file(path, e))?;
    Ok(read_fasta(BufReader::new(file))?)
}

pub fn write_fasta_file(path: &Path, records: &[FastaRecord]) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| Error::file(path, e))?;
    write_fasta(BufWriter::new(file), records)?;
    Ok(())
}

/// Writes each record of `input` to `<identifier>.fasta` in `out_dir`.
pub fn split_fasta(input: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let records = read_fasta_file(input)?;
    fs::create_dir_all(out_dir).map_err(|e| Error::file(out_dir, e))?;

    let mut written = Vec::with_capacity(records.len());
    for record in records {
        let identifier = record.identifier();
        if identifier.is_empty() {
            warn!("Skipping record with empty header in {}", input.display());
            continue;
        }
        let path = out_dir.join(format!("{identifier}.fasta"));
        write_fasta_file(&path, std::slice::from_ref(&record))?;
        debug!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Concatenates `<uid1>.fasta` and `<uid2>.fasta` into `<uid1>_<uid2>.fasta` for each listed pair.
///
/// Pairs whose inputs are missing are logged and skipped. Both records are
/// kept for homodimers, so the output always holds chain A then chain B.
pub fn pair_fastas(
    pairs_csv: &Path,
    fasta_dir: &Path,
    out_dir: &Path,
) -> Result<PairSummary, Error> {
    let file = File::open(pairs_csv).map_err(|e| Error::file(pairs_csv, e))?;
    let pairs = read_pair_list(BufReader::new(file))?;
    fs::create_dir_all(out_dir).map_err(|e| Error::file(out_dir, e))?;

    let mut summary = PairSummary::default();
    for (uid1, uid2) in pairs {
        let first = fasta_dir.join(format!("{uid1}.fasta"));
        let second = fasta_dir.join(format!("{uid2}.fasta"));

        if let Some(missing) = [&first, &second].into_iter().find(|p| !p.is_file()) {
            warn!("Skipping pair {uid1}/{uid2}: {} not found", missing.display());
            summary.skipped.push((uid1, uid2, missing.clone()));
            continue;
        }

        let mut records = read_fasta_file(&first)?;
        records.extend(read_fasta_file(&second)?);

        let path = out_dir.join(format!("{uid1}_{uid2}.fasta"));
        write_fasta_file(&path, &records)?;
        summary.written.push(path);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn splits_one_file_per_accession() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("proteome.fasta");
        fs::write(
            &input,
            ">sp|P11111|ONE_HUMAN first\nMKV\nLLA\n>sp|P22222|TWO_HUMAN second\nGGS\n",
        )
        .unwrap();

        let out = dir.path().join("split");
        let written = split_fasta(&input, &out).unwrap();

        assert_eq!(written, vec![out.join("P11111.fasta"), out.join("P22222.fasta")]);
        assert_eq!(
            fs::read_to_string(out.join("P11111.fasta")).unwrap(),
            ">sp|P11111|ONE_HUMAN first\nMKVLLA\n"
        );
    }

    #[test]
    fn pairs_listed_proteins_and_skips_missing_ones() {
        let dir = TempDir::new().unwrap();
        let fastas = dir.path().join("fastas");
        fs::create_dir(&fastas).unwrap();
        fs::write(fastas.join("P1.fasta"), ">p1\nMKV\n").unwrap();
        fs::write(fastas.join("P2.fasta"), ">p2\nGGS\n").unwrap();

        let pairs = dir.path().join("pairs.csv");
        fs::write(&pairs, "uid1,uid2\nP1,P2\nP1,P9\nP1,P1\n").unwrap();

        let out = dir.path().join("pairs");
        let summary = pair_fastas(&pairs, &fastas, &out).unwrap();

        assert_eq!(summary.written, vec![out.join("P1_P2.fasta"), out.join("P1_P1.fasta")]);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].1, "P9");
        assert_eq!(
            fs::read_to_string(out.join("P1_P2.fasta")).unwrap(),
            ">p1\nMKV\n>p2\nGGS\n"
        );
        assert_eq!(
            fs::read_to_string(out.join("P1_P1.fasta")).unwrap(),
            ">p1\nMKV\n>p1\nMKV\n"
        );
    }

    #[test]
    fn missing_input_names_the_file() {
        let dir = TempDir::new().unwrap();
        let err = split_fasta(&dir.path().join("nope.fasta"), dir.path()).unwrap_err();
        assert!(matches!(err, Error::File { ref path, .. } if path.ends_with("nope.fasta")));
    }
}
