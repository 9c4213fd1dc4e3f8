use crate::io::error::Error;
use crate::model::atom::{AtomRecord, Structure};
use std::io::Write;

/// Writes `ATOM` records in fixed-column layout, a `TER` after each chain and a
/// closing `END`.
pub fn write<W: Write>(mut writer: W, structure: &Structure) -> Result<(), Error> {
    let mut previous: Option<char> = None;

    for atom in &structure.atoms {
        if previous.is_some_and(|chain| chain != atom.chain_id) {
            writeln!(writer, "TER")?;
        }
        writeln!(writer, "{}", format_atom_line(atom))?;
        previous = Some(atom.chain_id);
    }

    if previous.is_some() {
        writeln!(writer, "TER")?;
    }
    writeln!(writer, "END")?;
    writer.flush()?;

    Ok(())
}

pub fn format_atom_line(atom: &AtomRecord) -> String {
    let element = atom.element.as_deref().unwrap_or("");
    format!(
        "ATOM  {:>5} {}{}{:>3} {}{:>4}{}   {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}",
        atom.serial,
        atom_name_field(&atom.atom_name, element),
        atom.alt_loc.unwrap_or(' '),
        atom.residue_name,
        atom.chain_id,
        atom.residue_number,
        atom.insertion_code.unwrap_or(' '),
        atom.position[0],
        atom.position[1],
        atom.position[2],
        atom.occupancy,
        atom.confidence,
        element,
    )
}

// Names of single-letter elements start in column 14 unless they fill all four
// columns.
fn atom_name_field(name: &str, element: &str) -> String {
    if name.len() < 4 && element.len() < 2 {
        format!(" {:<3}", name)
    } else {
        format!("{:<4}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::pdb::reader::{self, MIN_ATOM_LINE_WIDTH};
    use std::io::Cursor;

    fn record(name: &str, residue: &str, chain: char, number: i32) -> AtomRecord {
        AtomRecord {
            serial: number as i64,
            atom_name: name.to_string(),
            alt_loc: None,
            residue_name: residue.to_string(),
            chain_id: chain,
            residue_number: number,
            insertion_code: None,
            position: [-13.045, 16.126, -9.17],
            occupancy: 1.0,
            confidence: 47.89,
            element: Some("C".to_string()),
        }
    }

    #[test]
    fn formats_the_alphafold_column_layout() {
        let line = format_atom_line(&record("CB", "MET", 'A', 5));
        assert_eq!(
            line,
            "ATOM      5  CB  MET A   5     -13.045  16.126  -9.170  1.00 47.89           C"
        );
        assert!(line.len() >= MIN_ATOM_LINE_WIDTH);
    }

    #[test]
    fn four_letter_and_two_letter_element_names_start_in_column_13() {
        assert_eq!(atom_name_field("HD21", "H"), "HD21");
        assert_eq!(atom_name_field("ZN", "ZN"), "ZN  ");
        assert_eq!(atom_name_field("CA", "C"), " CA ");
    }

    #[test]
    fn separates_chains_with_ter_records() {
        let structure = Structure::new(vec![
            record("CB", "ALA", 'A', 1),
            record("CB", "ALA", 'A', 2),
            record("CB", "ALA", 'B', 1),
        ]);
        let mut buf = Vec::new();
        write(&mut buf, &structure).expect("write pdb");

        let text = String::from_utf8(buf).expect("utf-8");
        let markers: Vec<&str> = text.lines().map(|l| &l[..3]).collect();
        assert_eq!(markers, vec!["ATO", "ATO", "TER", "ATO", "TER", "END"]);
    }

    #[test]
    fn written_records_decode_to_the_same_atoms() {
        let mut gly = record("CA", "GLY", 'B', 7);
        gly.insertion_code = Some('A');
        gly.alt_loc = Some('B');
        let structure = Structure::new(vec![record("CB", "MET", 'A', 1), gly]);

        let mut buf = Vec::new();
        write(&mut buf, &structure).expect("write pdb");
        let decoded = reader::read(Cursor::new(buf)).expect("read pdb");

        assert_eq!(decoded, structure);
    }
}
