use crate::io::{Format, error::Error};
use crate::model::metrics::{ModelMetricsRow, ModelOutcome, PREDICTION_FAILED, PredictionInfo};
use std::io::{Read, Write};

pub const PROJECT_NAME: &str = "project_name";
pub const PREDICTION_NAME: &str = "prediction_name";
pub const CHAIN_A_LENGTH: &str = "chain_A_length";
pub const CHAIN_B_LENGTH: &str = "chain_B_length";
pub const MODEL_ID: &str = "model_id";
pub const MODEL_CONFIDENCE: &str = "model_confidence";

pub const COLUMNS: [&str; 6] = [
    PROJECT_NAME,
    PREDICTION_NAME,
    CHAIN_A_LENGTH,
    CHAIN_B_LENGTH,
    MODEL_ID,
    MODEL_CONFIDENCE,
];

const DELIMITER: u8 = b'\t';

/// Whether a table file carries a leading, unnamed row-index column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    Indexed,
    Plain,
}

/// Ordered rows of a metrics table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsTable {
    rows: Vec<ModelMetricsRow>,
}

impl MetricsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<ModelMetricsRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ModelMetricsRow] {
        &self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn extend(&mut self, rows: impl IntoIterator<Item = ModelMetricsRow>) {
        self.rows.extend(rows);
    }

    pub fn retain(&mut self, keep: impl FnMut(&ModelMetricsRow) -> bool) {
        self.rows.retain(keep);
    }

    /// Rows whose confidence is at least `threshold`, in table order.
    pub fn filtered(&self, threshold: f64) -> MetricsTable {
        Self::from_rows(
            self.rows
                .iter()
                .filter(|row| row.passes(threshold))
                .cloned()
                .collect(),
        )
    }

    /// Rows already recorded for the same project and prediction as `info`.
    pub fn count_prediction(&self, info: &PredictionInfo) -> usize {
        self.rows
            .iter()
            .filter(|row| row.info.same_prediction(info))
            .count()
    }

    /// Reads a table in either layout; an unnamed first column is taken as the index.
    pub fn read<R: Read>(reader: R) -> Result<Self, Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let position = |name: &str| headers.iter().position(|h| h == name);
        let required = |name: &str| {
            position(name).ok_or_else(|| Error::missing_column(Format::MetricsTable, name))
        };

        let project = position(PROJECT_NAME);
        let prediction = required(PREDICTION_NAME)?;
        let chain_a = required(CHAIN_A_LENGTH)?;
        let chain_b = required(CHAIN_B_LENGTH)?;
        let model_id = required(MODEL_ID)?;
        let confidence = required(MODEL_CONFIDENCE)?;

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

            let info = PredictionInfo {
                project_name: project.map(cell).filter(|s| !s.is_empty()).map(str::to_string),
                prediction_name: cell(prediction).to_string(),
                chain_a_length: parse_length(cell(chain_a), line)?,
                chain_b_length: parse_length(cell(chain_b), line)?,
            };

            let row = match cell(model_id) {
                PREDICTION_FAILED => ModelMetricsRow::failed(info),
                id => ModelMetricsRow::ranked(info, id, parse_confidence(cell(confidence), line)?),
            };
            rows.push(row);
        }

        Ok(Self { rows })
    }

    pub fn write<W: Write>(&self, writer: W, layout: TableLayout) -> Result<(), Error> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .from_writer(writer);

        let indexed = layout == TableLayout::Indexed;

        let mut header: Vec<&str> = Vec::with_capacity(COLUMNS.len() + 1);
        if indexed {
            header.push("");
        }
        header.extend(COLUMNS);
        csv_writer.write_record(&header)?;

        for (idx, row) in self.rows.iter().enumerate() {
            let mut fields: Vec<String> = Vec::with_capacity(COLUMNS.len() + 1);
            if indexed {
                fields.push(idx.to_string());
            }
            fields.push(row.info.project_name.clone().unwrap_or_default());
            fields.push(row.info.prediction_name.clone());
            fields.push(row.info.chain_a_length.to_string());
            fields.push(row.info.chain_b_length.to_string());
            fields.push(row.outcome.model_id().to_string());
            fields.push(format_confidence(&row.outcome));
            csv_writer.write_record(&fields)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

/// Values of one named column, in row order.
pub fn read_column<R: Read>(reader: R, column: &str) -> Result<Vec<String>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_reader(reader);

    let idx = csv_reader
        .headers()?
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| Error::missing_column(Format::MetricsTable, column))?;

    csv_reader
        .records()
        .map(|record| -> Result<String, Error> {
            Ok(record?.get(idx).unwrap_or("").to_string())
        })
        .collect()
}

fn format_confidence(outcome: &ModelOutcome) -> String {
    outcome
        .confidence()
        .map(|c| c.to_string())
        .unwrap_or_default()
}

// Lengths may have been written as floats by tools that coerce integer columns.
fn parse_length(raw: &str, line: usize) -> Result<usize, Error> {
    if let Ok(length) = raw.parse::<usize>() {
        return Ok(length);
    }
    match raw.parse::<f64>() {
        Ok(v) if v >= 0.0 && v.fract() == 0.0 => Ok(v as usize),
        _ => Err(Error::parse(
            Format::MetricsTable,
            line,
            format!("invalid chain length '{raw}'"),
        )),
    }
}

fn parse_confidence(raw: &str, line: usize) -> Result<Option<f64>, Error> {
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    raw.parse::<f64>().map(Some).map_err(|_| {
        Error::parse(
            Format::MetricsTable,
            line,
            format!("invalid model confidence '{raw}'"),
        )
    })
}
