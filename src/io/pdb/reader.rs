use crate::io::{Format, error::Error};
use crate::model::atom::{AtomRecord, Structure};
use std::io::BufRead;
use std::ops::Range;

/// Every column up to and including the B-factor field must be present.
pub const MIN_ATOM_LINE_WIDTH: usize = 66;

const ATOM_MARKER: &str = "ATOM";

pub fn read<R: BufRead>(reader: R) -> Result<Structure, Error> {
    let mut atoms = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.starts_with(ATOM_MARKER) {
            continue;
        }
        atoms.push(decode_atom_line(&line, idx + 1)?);
    }

    Ok(Structure::new(atoms))
}

/// Decodes one `ATOM` line by its fixed columns.
///
/// `line_no` is only used to locate the record in error messages.
pub fn decode_atom_line(line: &str, line_no: usize) -> Result<AtomRecord, Error> {
    let line = line.trim_end_matches(['\r', '\n']);

    if !line.is_ascii() {
        return Err(Error::parse(
            Format::Pdb,
            line_no,
            "fixed-column record contains non-ASCII characters",
        ));
    }
    if line.len() < MIN_ATOM_LINE_WIDTH {
        return Err(Error::parse(
            Format::Pdb,
            line_no,
            format!(
                "ATOM record is {} columns wide, expected at least {}",
                line.len(),
                MIN_ATOM_LINE_WIDTH
            ),
        ));
    }

    let columns = Columns { line, line_no };

    Ok(AtomRecord {
        serial: columns.integer(6..11, "atom serial number")?,
        atom_name: columns.text(12..16),
        alt_loc: columns.flag(16),
        residue_name: columns.text(17..20),
        chain_id: columns.character(21),
        residue_number: columns.integer(22..26, "residue sequence number")? as i32,
        insertion_code: columns.flag(26),
        position: [
            columns.real(30..38, "x coordinate")?,
            columns.real(38..46, "y coordinate")?,
            columns.real(46..54, "z coordinate")?,
        ],
        occupancy: columns.real(54..60, "occupancy")?,
        confidence: columns.real(60..66, "B-factor")?,
        element: line
            .get(76..line.len().min(78))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    })
}

/// Column accessors over an ASCII line already checked for minimum width.
struct Columns<'a> {
    line: &'a str,
    line_no: usize,
}

impl Columns<'_> {
    fn text(&self, range: Range<usize>) -> String {
        self.line[range].trim().to_string()
    }

    fn character(&self, idx: usize) -> char {
        self.line.as_bytes()[idx] as char
    }

    fn flag(&self, idx: usize) -> Option<char> {
        Some(self.character(idx)).filter(|c| *c != ' ')
    }

    fn integer(&self, range: Range<usize>, what: &str) -> Result<i64, Error> {
        let raw = self.line[range.clone()].trim();
        raw.parse::<i64>().map_err(|_| self.invalid(range, what, raw))
    }

    fn real(&self, range: Range<usize>, what: &str) -> Result<f64, Error> {
        let raw = self.line[range.clone()].trim();
        raw.parse::<f64>().map_err(|_| self.invalid(range, what, raw))
    }

    fn invalid(&self, range: Range<usize>, what: &str, raw: &str) -> Error {
        Error::parse(
            Format::Pdb,
            self.line_no,
            format!(
                "invalid {} '{}' in columns {}-{}",
                what,
                raw,
                range.start + 1,
                range.end
            ),
        )
    }
}
