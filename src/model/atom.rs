/// A single `ATOM` record decoded from a fixed-column PDB line.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub serial: i64,
    pub atom_name: String,
    pub alt_loc: Option<char>,
    pub residue_name: String,
    pub chain_id: char,
    pub residue_number: i32,
    pub insertion_code: Option<char>,
    pub position: [f64; 3],
    pub occupancy: f64,
    /// B-factor column; AlphaFold stores per-residue pLDDT (0–100) here.
    pub confidence: f64,
    pub element: Option<String>,
}

impl AtomRecord {
    /// Backbone-proxy selection: CB, or CA for glycine (which has no CB).
    #[inline]
    pub fn is_backbone_proxy(&self) -> bool {
        self.atom_name == "CB" || (self.atom_name == "CA" && self.residue_name == "GLY")
    }
}

/// Ordered `ATOM` records of one predicted model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    pub atoms: Vec<AtomRecord>,
}

impl Structure {
    pub fn new(atoms: Vec<AtomRecord>) -> Self {
        Self { atoms }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Distinct chain identifiers in order of first appearance.
    pub fn chain_ids(&self) -> Vec<char> {
        let mut ids = Vec::new();
        for atom in &self.atoms {
            if !ids.contains(&atom.chain_id) {
                ids.push(atom.chain_id);
            }
        }
        ids
    }

    pub fn has_chain(&self, chain_id: char) -> bool {
        self.atoms.iter().any(|a| a.chain_id == chain_id)
    }
}

#[cfg(test)]
pub(crate) fn atom(name: &str, residue: &str, chain: char, number: i32) -> AtomRecord {
    AtomRecord {
        serial: number as i64,
        atom_name: name.to_string(),
        alt_loc: None,
        residue_name: residue.to_string(),
        chain_id: chain,
        residue_number: number,
        insertion_code: None,
        position: [number as f64, 0.0, 0.0],
        occupancy: 1.0,
        confidence: 90.0,
        element: None,
    }
}
