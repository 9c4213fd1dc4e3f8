//! Interface contacts between the two chains of a dimer and the pDockQ score
//! derived from them.

use crate::model::profile::ChainProfile;

const PDOCKQ_L: f64 = 0.724;
const PDOCKQ_X0: f64 = 152.611;
const PDOCKQ_K: f64 = 0.052;
const PDOCKQ_B: f64 = 0.018;

/// Residue contacts across the A/B interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterfaceContacts {
    /// Residue pairs within the cutoff distance.
    pub contacts: usize,
    /// Mean confidence over residues of either chain taking part in a contact.
    pub mean_confidence: Option<f64>,
}

impl InterfaceContacts {
    /// pDockQ estimate of interface quality; 0 without contacts.
    pub fn pdockq(&self) -> f64 {
        match self.mean_confidence {
            Some(plddt) if self.contacts > 0 => {
                let x = plddt * (self.contacts as f64).log10();
                PDOCKQ_L / (1.0 + (-PDOCKQ_K * (x - PDOCKQ_X0)).exp()) + PDOCKQ_B
            }
            _ => 0.0,
        }
    }
}

pub fn interface_contacts(a: &ChainProfile, b: &ChainProfile, cutoff: f64) -> InterfaceContacts {
    let cutoff_sq = cutoff * cutoff;
    let mut in_a = vec![false; a.len()];
    let mut in_b = vec![false; b.len()];
    let mut contacts = 0;

    for (i, pa) in a.coords.iter().enumerate() {
        for (j, pb) in b.coords.iter().enumerate() {
            if distance_sq(pa, pb) <= cutoff_sq {
                contacts += 1;
                in_a[i] = true;
                in_b[j] = true;
            }
        }
    }

    let interface: Vec<f64> = a
        .confidence
        .iter()
        .zip(&in_a)
        .chain(b.confidence.iter().zip(&in_b))
        .filter_map(|(&c, &hit)| hit.then_some(c))
        .collect();

    let mean_confidence = if interface.is_empty() {
        None
    } else {
        Some(interface.iter().sum::<f64>() / interface.len() as f64)
    };

    InterfaceContacts {
        contacts,
        mean_confidence,
    }
}

#[inline]
fn distance_sq(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    (0..3).map(|k| (a[k] - b[k]).powi(2)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::profile::ChainProfileBuilder;

    fn profile(points: &[([f64; 3], f64)]) -> ChainProfile {
        let mut builder = ChainProfileBuilder::new();
        for &(position, confidence) in points {
            builder.push(position, confidence);
        }
        builder.finish()
    }

    #[test]
    fn counts_pairs_within_cutoff_inclusively() {
        let a = profile(&[([0.0, 0.0, 0.0], 80.0), ([20.0, 0.0, 0.0], 40.0)]);
        let b = profile(&[([8.0, 0.0, 0.0], 60.0), ([100.0, 0.0, 0.0], 10.0)]);

        let contacts = interface_contacts(&a, &b, 8.0);
        assert_eq!(contacts.contacts, 1);
        assert_eq!(contacts.mean_confidence, Some(70.0));
    }

    #[test]
    fn residue_in_several_contacts_is_averaged_once() {
        let a = profile(&[([0.0, 0.0, 0.0], 90.0)]);
        let b = profile(&[([1.0, 0.0, 0.0], 70.0), ([0.0, 1.0, 0.0], 50.0)]);

        let contacts = interface_contacts(&a, &b, 8.0);
        assert_eq!(contacts.contacts, 2);
        assert_eq!(contacts.mean_confidence, Some(70.0));
    }

    #[test]
    fn no_contacts_scores_zero() {
        let a = profile(&[([0.0, 0.0, 0.0], 90.0)]);
        let b = profile(&[([50.0, 0.0, 0.0], 90.0)]);

        let contacts = interface_contacts(&a, &b, 8.0);
        assert_eq!(contacts.contacts, 0);
        assert_eq!(contacts.mean_confidence, None);
        assert_eq!(contacts.pdockq(), 0.0);
    }

    #[test]
    fn pdockq_follows_the_sigmoid() {
        let weak = InterfaceContacts {
            contacts: 1,
            mean_confidence: Some(90.0),
        };
        // log10(1) = 0, so only the sigmoid floor remains.
        let floor = PDOCKQ_L / (1.0 + (PDOCKQ_K * PDOCKQ_X0).exp()) + PDOCKQ_B;
        assert!((weak.pdockq() - floor).abs() < 1e-12);

        let strong = InterfaceContacts {
            contacts: 100,
            mean_confidence: Some(90.0),
        };
        assert!((strong.pdockq() - 0.6015).abs() < 1e-3);
        assert!(strong.pdockq() < PDOCKQ_L + PDOCKQ_B);
    }
}
