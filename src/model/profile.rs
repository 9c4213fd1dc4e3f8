/// Backbone-proxy coordinates and aligned confidence values for one chain.
///
/// Both slices have one entry per retained residue, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainProfile {
    pub coords: Box<[[f64; 3]]>,
    pub confidence: Box<[f64]>,
}

impl ChainProfile {
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn mean_confidence(&self) -> Option<f64> {
        if self.confidence.is_empty() {
            return None;
        }
        Some(self.confidence.iter().sum::<f64>() / self.confidence.len() as f64)
    }
}

/// Growable form of a [`ChainProfile`] used while a file is being scanned.
#[derive(Debug, Clone, Default)]
pub struct ChainProfileBuilder {
    coords: Vec<[f64; 3]>,
    confidence: Vec<f64>,
}

impl ChainProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, position: [f64; 3], confidence: f64) {
        self.coords.push(position);
        self.confidence.push(confidence);
    }

    pub fn finish(self) -> ChainProfile {
        ChainProfile {
            coords: self.coords.into_boxed_slice(),
            confidence: self.confidence.into_boxed_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_entries_aligned() {
        let mut builder = ChainProfileBuilder::new();
        builder.push([0.0, 1.0, 2.0], 80.0);
        builder.push([3.0, 4.0, 5.0], 60.0);
        let profile = builder.finish();

        assert_eq!(profile.len(), 2);
        assert_eq!(profile.coords[1], [3.0, 4.0, 5.0]);
        assert_eq!(&*profile.confidence, &[80.0, 60.0]);
        assert_eq!(profile.mean_confidence(), Some(70.0));
    }

    #[test]
    fn empty_profile_has_no_mean() {
        let profile = ChainProfileBuilder::new().finish();
        assert!(profile.is_empty());
        assert_eq!(profile.mean_confidence(), None);
    }
}
