use crate::model::atom::AtomRecord;
use crate::model::profile::{ChainProfile, ChainProfileBuilder};
use std::collections::BTreeMap;

pub type ChainProfiles = BTreeMap<char, ChainProfile>;

/// Groups backbone-proxy atoms by chain, keeping file order within each chain.
///
/// Chains without a single CB (or glycine CA) are absent from the result.
pub fn build_chain_profiles(atoms: &[AtomRecord]) -> ChainProfiles {
    let mut builders: BTreeMap<char, ChainProfileBuilder> = BTreeMap::new();

    for atom in atoms.iter().filter(|a| a.is_backbone_proxy()) {
        builders
            .entry(atom.chain_id)
            .or_default()
            .push(atom.position, atom.confidence);
    }

    builders
        .into_iter()
        .map(|(chain, builder)| (chain, builder.finish()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::atom;

    #[test]
    fn keeps_cb_and_glycine_ca_only() {
        let mut gly = atom("CA", "GLY", 'A', 2);
        gly.confidence = 55.0;
        let atoms = vec![
            atom("N", "ALA", 'A', 1),
            atom("CA", "ALA", 'A', 1),
            atom("CB", "ALA", 'A', 1),
            gly,
            atom("CA", "TRP", 'A', 3),
            atom("CB", "GLY", 'A', 4),
        ];
        let profiles = build_chain_profiles(&atoms);

        let chain_a = &profiles[&'A'];
        assert_eq!(chain_a.len(), 3);
        assert_eq!(chain_a.coords[0], [1.0, 0.0, 0.0]);
        assert_eq!(chain_a.coords[1], [2.0, 0.0, 0.0]);
        assert_eq!(chain_a.coords[2], [4.0, 0.0, 0.0]);
        assert_eq!(&*chain_a.confidence, &[90.0, 55.0, 90.0]);
    }

    #[test]
    fn chains_without_proxies_are_absent() {
        let atoms = vec![
            atom("CB", "ALA", 'A', 1),
            atom("N", "ALA", 'B', 1),
            atom("CA", "SER", 'B', 1),
        ];
        let profiles = build_chain_profiles(&atoms);
        assert_eq!(profiles.keys().copied().collect::<Vec<_>>(), vec!['A']);
    }

    #[test]
    fn interleaved_chains_keep_file_order() {
        let atoms = vec![
            atom("CB", "ALA", 'B', 7),
            atom("CB", "ALA", 'A', 1),
            atom("CB", "ALA", 'B', 3),
        ];
        let profiles = build_chain_profiles(&atoms);
        assert_eq!(profiles[&'B'].coords[0][0], 7.0);
        assert_eq!(profiles[&'B'].coords[1][0], 3.0);
        assert_eq!(profiles[&'B'].len(), profiles[&'B'].confidence.len());
    }

    #[test]
    fn empty_input_gives_no_profiles() {
        assert!(build_chain_profiles(&[]).is_empty());
    }
}
