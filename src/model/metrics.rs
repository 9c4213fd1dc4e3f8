use std::fmt;

/// Label written in the `model_id` column of a failed prediction's row.
pub const PREDICTION_FAILED: &str = "Prediction failed";

/// Identifying fields shared by every row of one prediction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PredictionInfo {
    pub project_name: Option<String>,
    pub prediction_name: String,
    pub chain_a_length: usize,
    pub chain_b_length: usize,
}

impl PredictionInfo {
    pub fn new(
        project_name: Option<String>,
        prediction_name: impl Into<String>,
        chain_a_length: usize,
        chain_b_length: usize,
    ) -> Self {
        Self {
            project_name,
            prediction_name: prediction_name.into(),
            chain_a_length,
            chain_b_length,
        }
    }

    /// Whether `other` belongs to the same project and prediction.
    pub fn same_prediction(&self, other: &PredictionInfo) -> bool {
        self.project_name == other.project_name && self.prediction_name == other.prediction_name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutcome {
    Ranked {
        model_id: String,
        /// Composite `iptm+ptm` ranking confidence, when the ranking lists one.
        confidence: Option<f64>,
    },
    PredictionFailed,
}

impl ModelOutcome {
    pub fn model_id(&self) -> &str {
        match self {
            ModelOutcome::Ranked { model_id, .. } => model_id,
            ModelOutcome::PredictionFailed => PREDICTION_FAILED,
        }
    }

    pub fn confidence(&self) -> Option<f64> {
        match self {
            ModelOutcome::Ranked { confidence, .. } => *confidence,
            ModelOutcome::PredictionFailed => None,
        }
    }
}

/// One row of the persistent metrics table.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMetricsRow {
    pub info: PredictionInfo,
    pub outcome: ModelOutcome,
}

impl ModelMetricsRow {
    pub fn ranked(
        info: PredictionInfo,
        model_id: impl Into<String>,
        confidence: Option<f64>,
    ) -> Self {
        Self {
            info,
            outcome: ModelOutcome::Ranked {
                model_id: model_id.into(),
                confidence,
            },
        }
    }

    pub fn failed(info: PredictionInfo) -> Self {
        Self {
            info,
            outcome: ModelOutcome::PredictionFailed,
        }
    }

    /// Rows with no confidence never pass, whatever the threshold.
    pub fn passes(&self, threshold: f64) -> bool {
        self.outcome.confidence().is_some_and(|c| c >= threshold)
    }
}

impl fmt::Display for ModelMetricsRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.info.prediction_name, self.outcome.model_id())?;
        if let Some(confidence) = self.outcome.confidence() {
            write!(f, " ({confidence:.3})")?;
        }
        Ok(())
    }
}
