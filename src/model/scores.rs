/// Scalar confidence scores of one ranked model.
///
/// Each score is `None` when the auxiliary data does not carry it; that is a
/// valid state for model variants that never produce it, not a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfidenceScores {
    pub ptm: Option<f64>,
    pub iptm: Option<f64>,
}

impl ConfidenceScores {
    pub fn new(ptm: Option<f64>, iptm: Option<f64>) -> Self {
        Self { ptm, iptm }
    }
}

/// Where the scores of a ranked model came from, or why there are none.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreStatus {
    /// Scores decoded from the model's auxiliary file.
    Extracted(ConfidenceScores),
    /// The multimer model variant does not produce pTM/ipTM.
    NotProduced,
    /// The variant produces scores but the auxiliary file is not on disk.
    Unavailable,
}

impl ScoreStatus {
    /// Scores with every missing value made explicit.
    pub fn scores(&self) -> ConfidenceScores {
        match self {
            ScoreStatus::Extracted(scores) => *scores,
            ScoreStatus::NotProduced | ScoreStatus::Unavailable => ConfidenceScores::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_statuses_yield_empty_scores() {
        assert_eq!(ScoreStatus::NotProduced.scores(), ConfidenceScores::default());
        assert_eq!(ScoreStatus::Unavailable.scores().iptm, None);
    }

    #[test]
    fn extracted_status_passes_scores_through() {
        let status = ScoreStatus::Extracted(ConfidenceScores::new(Some(0.8), None));
        assert_eq!(status.scores().ptm, Some(0.8));
        assert_eq!(status.scores().iptm, None);
    }
}
