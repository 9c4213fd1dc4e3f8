use crate::io::{Format, error::Error};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

pub const RANKING_FILE: &str = "ranking_debug.json";

#[derive(Debug, Deserialize)]
struct RankingDebug {
    order: Vec<String>,
    #[serde(rename = "iptm+ptm")]
    iptm_ptm: HashMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedModel {
    /// Rank label, `ranked_<i>`, matching the `ranked_<i>.pdb` file name.
    pub model_id: String,
    /// Name of the multimer model that produced this rank, e.g. `model_1_multimer_v2_pred_0`.
    pub multimer_model: String,
    pub confidence: Option<f64>,
}

/// The ranked models of one prediction, best first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    pub models: Vec<RankedModel>,
}

impl Ranking {
    #[inline]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

pub fn rank_label(rank: usize) -> String {
    format!("ranked_{rank}")
}

/// Reads `ranking_debug.json`.
///
/// `ranked_<i>` is paired with `order[i]`, and receives the i-th largest
/// `iptm+ptm` value as its confidence.
pub fn read<R: Read>(reader: R) -> Result<Ranking, Error> {
    let debug: RankingDebug =
        serde_json::from_reader(reader).map_err(|e| Error::json(Format::Ranking, e))?;

    let mut confidences: Vec<f64> = debug.iptm_ptm.into_values().collect();
    confidences.sort_by(|a, b| b.total_cmp(a));

    let models = debug
        .order
        .into_iter()
        .enumerate()
        .map(|(rank, multimer_model)| RankedModel {
            model_id: rank_label(rank),
            multimer_model,
            confidence: confidences.get(rank).copied(),
        })
        .collect();

    Ok(Ranking { models })
}
