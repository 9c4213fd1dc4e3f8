use super::config::AnalysisConfig;
use super::contacts::{InterfaceContacts, interface_contacts};
use super::error::Error;
use super::profile::{ChainProfiles, build_chain_profiles};
use super::relabel::merge_partner_chains;
use super::scores::lookup_model_scores;
use super::staged::Staged;
use crate::io::fasta::{chain_lengths, read as read_fasta};
use crate::io::pdb::{read_structure, write_structure};
use crate::io::ranking::{RANKING_FILE, RankedModel, read as read_ranking};
use crate::model::metrics::{ModelMetricsRow, PredictionInfo};
use crate::model::scores::ScoreStatus;
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// An AlphaFold output folder, named after the prediction it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionFolder {
    path: PathBuf,
    name: String,
}

impl PredictionFolder {
    /// Paths ending in `.` or `..` are resolved against the filesystem first,
    /// so `.` names the current folder.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let mut path: PathBuf = path.into();
        if path.file_name().is_none() && !path.as_os_str().is_empty() {
            path = fs::canonicalize(&path).map_err(|e| Error::file(&path, e))?;
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| Error::InvalidPredictionFolder(path.clone()))?
            .to_string();
        Ok(Self { path, name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the prediction folders and the metrics tables.
    pub fn parent(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// FASTA locations in lookup order: the sibling `<folder>.fasta`, then one inside the folder.
    pub fn fasta_candidates(&self) -> [PathBuf; 2] {
        [
            self.parent().join(format!("{}.fasta", self.name)),
            self.path.join(format!("{}.fasta", self.name)),
        ]
    }

    pub fn ranking_path(&self) -> PathBuf {
        self.path.join(RANKING_FILE)
    }

    pub fn model_path(&self, model_id: &str) -> PathBuf {
        self.path.join(format!("{model_id}.pdb"))
    }
}

/// Everything derived from one ranked model.
#[derive(Debug, Clone)]
pub struct ModelReport {
    pub model_id: String,
    pub multimer_model: String,
    pub confidence: Option<f64>,
    pub scores: ScoreStatus,
    /// Whether partner chains were merged back onto A/B.
    pub relabeled: bool,
    pub profiles: ChainProfiles,
    /// Present when both chain A and chain B have backbone proxies.
    pub interface: Option<InterfaceContacts>,
}

impl ModelReport {
    pub fn pdockq(&self) -> Option<f64> {
        self.interface.as_ref().map(InterfaceContacts::pdockq)
    }

    /// Mean pLDDT over every profiled residue, all chains together.
    pub fn mean_plddt(&self) -> Option<f64> {
        let (sum, count) = self
            .profiles
            .values()
            .filter_map(|p| p.mean_confidence().map(|mean| (mean, p.len())))
            .fold((0.0, 0usize), |(sum, count), (mean, len)| {
                (sum + mean * len as f64, count + len)
            });
        (count > 0).then(|| sum / count as f64)
    }
}

#[derive(Debug, Clone)]
pub enum PredictionOutcome {
    Ranked(Vec<ModelReport>),
    /// AlphaFold left no ranking behind.
    Failed,
}

#[derive(Debug, Clone)]
pub struct PredictionReport {
    pub info: PredictionInfo,
    pub outcome: PredictionOutcome,
}

impl PredictionReport {
    /// Table rows for this prediction: one per ranked model, or a single failed row.
    pub fn rows(&self) -> Vec<ModelMetricsRow> {
        match &self.outcome {
            PredictionOutcome::Ranked(models) => models
                .iter()
                .map(|m| ModelMetricsRow::ranked(self.info.clone(), &m.model_id, m.confidence))
                .collect(),
            PredictionOutcome::Failed => vec![ModelMetricsRow::failed(self.info.clone())],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, PredictionOutcome::Failed)
    }
}

/// Reads one prediction folder: chain lengths, ranking and every ranked model.
///
/// A missing `ranking_debug.json` yields a [`PredictionOutcome::Failed`]
/// report. A model that cannot be decoded stops this prediction with an error.
pub fn analyze_prediction(
    folder: &PredictionFolder,
    project_name: Option<&str>,
    config: &AnalysisConfig,
) -> Result<PredictionReport, Error> {
    let (chain_a_length, chain_b_length) = read_chain_lengths(folder)?;
    let info = PredictionInfo::new(
        project_name.map(str::to_string),
        folder.name(),
        chain_a_length,
        chain_b_length,
    );

    let ranking_path = folder.ranking_path();
    let ranking = match File::open(&ranking_path) {
        Ok(file) => read_ranking(BufReader::new(file))?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "No {RANKING_FILE} in {}; recording '{}' as failed",
                folder.path().display(),
                folder.name()
            );
            return Ok(PredictionReport {
                info,
                outcome: PredictionOutcome::Failed,
            });
        }
        Err(e) => return Err(Error::file(&ranking_path, e)),
    };

    if ranking.len() < config.num_models {
        warn!(
            "Ranking of '{}' lists {} models; expected {}",
            folder.name(),
            ranking.len(),
            config.num_models
        );
    }

    let models = ranking
        .models
        .iter()
        .take(config.num_models)
        .map(|ranked| analyze_model(folder, ranked, config))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Analyzed {} ranked models of '{}'", models.len(), folder.name());

    Ok(PredictionReport {
        info,
        outcome: PredictionOutcome::Ranked(models),
    })
}

fn read_chain_lengths(folder: &PredictionFolder) -> Result<(usize, usize), Error> {
    let candidates = folder.fasta_candidates();
    for path in &candidates {
        match File::open(path) {
            Ok(file) => {
                debug!("Reading chain lengths from {}", path.display());
                let records = read_fasta(BufReader::new(file))?;
                return Ok(chain_lengths(&records));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(Error::file(path, e)),
        }
    }
    Err(Error::MissingFasta {
        prediction: folder.name().to_string(),
        searched: candidates.to_vec(),
    })
}

fn analyze_model(
    folder: &PredictionFolder,
    ranked: &RankedModel,
    config: &AnalysisConfig,
) -> Result<ModelReport, Error> {
    let model_id = ranked.model_id.as_str();
    let path = folder.model_path(model_id);

    let file = File::open(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::MissingModel {
            model_id: model_id.to_string(),
            path: path.clone(),
        },
        _ => Error::file(&path, e),
    })?;
    let structure = read_structure(BufReader::new(file))
        .map_err(|source| Error::model(folder.name(), model_id, source))?;

    let (structure, relabeled) = match merge_partner_chains(&structure) {
        Some(merged) => {
            info!("Merged partner chains of {model_id} in '{}'", folder.name());
            if config.rewrite_relabeled {
                Staged::write(&path, |w| write_structure(w, &merged))?.commit()?;
            }
            (merged, true)
        }
        None => (structure, false),
    };

    let scores = lookup_model_scores(
        folder.path(),
        &ranked.multimer_model,
        &config.score_model_marker,
    )
    .map_err(|e| match e {
        Error::Io(source) => Error::model(folder.name(), model_id, source),
        other => other,
    })?;
    let profiles = build_chain_profiles(&structure.atoms);
    let interface = match (profiles.get(&'A'), profiles.get(&'B')) {
        (Some(a), Some(b)) => Some(interface_contacts(a, b, config.contact_cutoff)),
        _ => None,
    };

    Ok(ModelReport {
        model_id: model_id.to_string(),
        multimer_model: ranked.multimer_model.clone(),
        confidence: ranked.confidence,
        scores,
        relabeled,
        profiles,
        interface,
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};

    /// A 78-column `ATOM` line with y = z = 0 and full occupancy.
    pub fn atom_line(
        serial: usize,
        name: &str,
        residue: &str,
        chain: char,
        number: i32,
        x: f64,
        plddt: f64,
    ) -> String {
        let element = &name[..1];
        format!(
            "ATOM  {serial:>5}  {name:<3} {residue:>3} {chain}{number:>4}    \
             {x:>8.3}{:>8.3}{:>8.3}{:>6.2}{plddt:>6.2}           {element}",
            0.0, 0.0, 1.0
        )
    }

    /// Writes a prediction folder with one CB per chain per model and the given ranking.
    pub fn write_prediction(
        root: &Path,
        name: &str,
        confidences: &[(&str, f64)],
        chains: &[char],
    ) -> PathBuf {
        let folder = root.join(name);
        fs::create_dir_all(&folder).unwrap();
        fs::write(root.join(format!("{name}.fasta")), ">a\nMKVLA\n>b\nGGS\n").unwrap();

        let order: Vec<String> = confidences.iter().map(|(m, _)| format!("\"{m}\"")).collect();
        let scores: Vec<String> = confidences
            .iter()
            .map(|(m, c)| format!("\"{m}\": {c}"))
            .collect();
        fs::write(
            folder.join("ranking_debug.json"),
            format!(
                "{{\"order\": [{}], \"iptm+ptm\": {{{}}}}}",
                order.join(", "),
                scores.join(", ")
            ),
        )
        .unwrap();

        for (rank, (model, _)) in confidences.iter().enumerate() {
            let lines: Vec<String> = chains
                .iter()
                .enumerate()
                .map(|(i, &chain)| atom_line(i + 1, "CB", "ALA", chain, 1, 4.0 * i as f64, 85.0))
                .collect();
            let pdb = lines.join("\n") + "\nEND\n";
            fs::write(folder.join(format!("ranked_{rank}.pdb")), pdb).unwrap();
            fs::write(
                folder.join(format!("result_{model}.json")),
                r#"{"ptm": 0.7, "iptm": 0.6}"#,
            )
            .unwrap();
        }

        folder
    }
}
