use crate::io::{Format, error::Error};
use crate::model::scores::ConfidenceScores;
use serde_json::{Map, Value};
use std::io::Read;

/// Auxiliary score file written next to the ranked models for one multimer model.
pub fn scores_file_name(multimer_model: &str) -> String {
    format!("result_{multimer_model}.json")
}

pub fn read<R: Read>(reader: R) -> Result<ConfidenceScores, Error> {
    let value: Value =
        serde_json::from_reader(reader).map_err(|e| Error::json(Format::Scores, e))?;
    extract(&value)
}

/// Pulls `ptm` and `iptm` out of a model's auxiliary data.
///
/// Missing (or null) keys come back as `None`; any other non-numeric value is an error.
pub fn extract(value: &Value) -> Result<ConfidenceScores, Error> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::parse(Format::Scores, 1, "expected a JSON object at top level"))?;

    Ok(ConfidenceScores {
        ptm: numeric_field(object, "ptm")?,
        iptm: numeric_field(object, "iptm")?,
    })
}

fn numeric_field(object: &Map<String, Value>, field: &'static str) -> Result<Option<f64>, Error> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or(Error::NonNumericField {
            format: Format::Scores,
            field,
        }),
    }
}
