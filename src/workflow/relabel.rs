use crate::model::atom::{AtomRecord, Structure};

/// Label of the duplicate pairing partner in three-chain predictions.
pub const PARTNER_CHAIN: char = 'C';

/// Folds a three-chain prediction back onto the canonical {A, B} labeling.
///
/// When chain `C` is present, chain `B` is relabeled `A` and placed after the
/// original `A` records, and chain `C` becomes `B`. Other chains keep their
/// labels. Returns `None`, leaving the caller's structure as is, when there is
/// no chain `C`.
///
/// Merged chain `A` keeps whole original chains together. Its atom order
/// therefore differs from a PyMOL `alter` + `sort` save, which interleaves
/// same-numbered residues of the two source chains.
pub fn merge_partner_chains(structure: &Structure) -> Option<Structure> {
    if !structure.has_chain(PARTNER_CHAIN) {
        return None;
    }

    let mut tagged: Vec<(char, AtomRecord)> = structure
        .atoms
        .iter()
        .map(|atom| {
            let original = atom.chain_id;
            let mut relabeled = atom.clone();
            relabeled.chain_id = match original {
                'B' => 'A',
                'C' => 'B',
                other => other,
            };
            (original, relabeled)
        })
        .collect();

    // Stable, so file order survives within each original chain.
    tagged.sort_by_key(|(original, atom)| (atom.chain_id, *original));

    Some(Structure::new(
        tagged.into_iter().map(|(_, atom)| atom).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::atom;

    fn three_chains() -> Structure {
        Structure::new(vec![
            atom("CB", "ALA", 'A', 1),
            atom("CB", "ALA", 'A', 2),
            atom("CB", "SER", 'B', 1),
            atom("CA", "GLY", 'B', 2),
            atom("CB", "LEU", 'C', 1),
        ])
    }

    #[test]
    fn two_chain_structures_are_left_alone() {
        let structure = Structure::new(vec![atom("CB", "ALA", 'A', 1), atom("CB", "ALA", 'B', 1)]);
        assert!(merge_partner_chains(&structure).is_none());
    }

    #[test]
    fn yields_exactly_chains_a_and_b() {
        let merged = merge_partner_chains(&three_chains()).expect("chain C present");
        assert_eq!(merged.chain_ids(), vec!['A', 'B']);
        assert_eq!(merged.atom_count(), 5);
    }

    #[test]
    fn original_b_follows_original_a_and_c_becomes_b() {
        let merged = merge_partner_chains(&three_chains()).expect("chain C present");

        let labels: Vec<(char, &str, i32)> = merged
            .atoms
            .iter()
            .map(|a| (a.chain_id, a.residue_name.as_str(), a.residue_number))
            .collect();
        assert_eq!(
            labels,
            vec![
                ('A', "ALA", 1),
                ('A', "ALA", 2),
                ('A', "SER", 1),
                ('A', "GLY", 2),
                ('B', "LEU", 1),
            ]
        );
    }

    #[test]
    fn original_a_stays_first_even_when_b_comes_first_in_file() {
        let structure = Structure::new(vec![
            atom("CB", "SER", 'B', 1),
            atom("CB", "ALA", 'A', 1),
            atom("CB", "LEU", 'C', 1),
        ]);
        let merged = merge_partner_chains(&structure).expect("chain C present");
        let names: Vec<&str> = merged.atoms.iter().map(|a| a.residue_name.as_str()).collect();
        assert_eq!(names, vec!["ALA", "SER", "LEU"]);
    }

    #[test]
    fn input_structure_is_not_mutated() {
        let structure = three_chains();
        let before = structure.clone();
        let _ = merge_partner_chains(&structure);
        assert_eq!(structure, before);
    }

    #[test]
    fn other_chains_keep_their_labels() {
        let structure = Structure::new(vec![
            atom("CB", "ALA", 'A', 1),
            atom("CB", "ALA", 'C', 1),
            atom("CB", "ALA", 'D', 1),
        ]);
        let merged = merge_partner_chains(&structure).expect("chain C present");
        assert_eq!(merged.chain_ids(), vec!['A', 'B', 'D']);
    }
}
