//! DNA Document
//!
//! The genome document exchanged between the designer and the engine.
//!
//! Field names (`genes`, `organs`, `neural_links` and their sub-fields) are
//! the interchange format of exported documents and must not change.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A named trait value. Descriptive only; the tick loop does not read genes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    pub name: String,
    pub value: f64,
}

impl Gene {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// An organ entry, keyed by name in [`Dna::organs`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organ {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neuron_count: Option<u32>,
}

impl Organ {
    pub fn with_efficiency(efficiency: f64) -> Self {
        Self {
            efficiency: Some(efficiency),
            neuron_count: None,
        }
    }

    pub fn with_neurons(neuron_count: u32) -> Self {
        Self {
            efficiency: None,
            neuron_count: Some(neuron_count),
        }
    }
}

/// Directed, weighted edge from a sensory channel to an action channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuralLink {
    pub input: String,
    pub output: String,
    pub weight: f64,
}

impl NeuralLink {
    pub fn new(input: impl Into<String>, output: impl Into<String>, weight: f64) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            weight,
        }
    }
}

/// Complete genome: genes, organs and neural wiring.
///
/// `Clone` is a deep copy, so two agents never share a genome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dna {
    #[serde(default)]
    pub genes: Vec<Gene>,
    #[serde(default)]
    pub organs: BTreeMap<String, Organ>,
    #[serde(default)]
    pub neural_links: Vec<NeuralLink>,
}

/// Errors raised while importing or exporting a DNA document
#[derive(Debug, Error)]
pub enum DnaError {
    /// The document has the wrong structure for a field
    #[error("invalid DNA: `{field}` {reason}")]
    InvalidDna { field: String, reason: String },
    /// The text is not JSON at all
    #[error("malformed DNA JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DnaError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DnaError::InvalidDna {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Expected JSON shape of a top-level field
#[derive(Debug, Clone, Copy)]
enum Shape {
    Sequence,
    Mapping,
}

impl Shape {
    fn matches(self, value: &Value) -> bool {
        match self {
            Shape::Sequence => value.is_array(),
            Shape::Mapping => value.is_object(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Sequence => write!(f, "an array"),
            Shape::Mapping => write!(f, "an object"),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Take a top-level field out of the document.
/// Absent and `null` fields normalize to the empty value.
fn take_field<T>(root: &mut Map<String, Value>, field: &str, shape: Shape) -> Result<T, DnaError>
where
    T: DeserializeOwned + Default,
{
    match root.remove(field) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) if shape.matches(&value) => {
            serde_json::from_value(value).map_err(|e| DnaError::invalid(field, e.to_string()))
        }
        Some(other) => Err(DnaError::invalid(
            field,
            format!("expected {}, found {}", shape, json_kind(&other)),
        )),
    }
}

impl Dna {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an exported DNA document
    pub fn from_json(content: &str) -> Result<Self, DnaError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Build a DNA document from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self, DnaError> {
        let mut root = match value {
            Value::Object(root) => root,
            other => {
                return Err(DnaError::invalid(
                    "dna",
                    format!("expected an object, found {}", json_kind(&other)),
                ))
            }
        };

        Ok(Self {
            genes: take_field(&mut root, "genes", Shape::Sequence)?,
            organs: take_field(&mut root, "organs", Shape::Mapping)?,
            neural_links: take_field(&mut root, "neural_links", Shape::Sequence)?,
        })
    }

    /// Export as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, DnaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check whether any link drives the given output channel
    pub fn has_output(&self, channel: &str) -> bool {
        self.neural_links.iter().any(|l| l.output == channel)
    }

    /// Links reading from the given input channel
    pub fn links_from<'a>(&'a self, channel: &'a str) -> impl Iterator<Item = &'a NeuralLink> + 'a {
        self.neural_links.iter().filter(move |l| l.input == channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORTED: &str = r#"{
        "genes": [{"name": "Speed", "value": 1.5}],
        "organs": {
            "brain": {"neuron_count": 100},
            "heart": {"efficiency": 0.75}
        },
        "neural_links": [
            {"input": "light", "output": "move_up", "weight": 1.0},
            {"input": "pain", "output": "scream", "weight": -0.25}
        ]
    }"#;

    #[test]
    fn test_parse_exported_document() {
        let dna = Dna::from_json(EXPORTED).unwrap();
        assert_eq!(dna.genes, vec![Gene::new("Speed", 1.5)]);
        assert_eq!(dna.organs["brain"].neuron_count, Some(100));
        assert_eq!(dna.organs["heart"].efficiency, Some(0.75));
        assert_eq!(dna.neural_links.len(), 2);
        assert_eq!(dna.neural_links[1], NeuralLink::new("pain", "scream", -0.25));
    }

    #[test]
    fn test_missing_fields_normalize_to_empty() {
        let dna = Dna::from_json(r#"{"genes": [{"name": "Speed", "value": 1.0}]}"#).unwrap();
        assert_eq!(dna.genes.len(), 1);
        assert!(dna.organs.is_empty());
        assert!(dna.neural_links.is_empty());

        let dna = Dna::from_json(r#"{"neural_links": null}"#).unwrap();
        assert!(dna.neural_links.is_empty());
    }

    #[test]
    fn test_wrong_field_type_is_invalid() {
        let err = Dna::from_json(r#"{"neural_links": {"input": "light"}}"#).unwrap_err();
        match err {
            DnaError::InvalidDna { field, reason } => {
                assert_eq!(field, "neural_links");
                assert!(reason.contains("expected an array"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = Dna::from_json(r#"{"organs": []}"#).unwrap_err();
        assert!(matches!(err, DnaError::InvalidDna { ref field, .. } if field == "organs"));
    }

    #[test]
    fn test_malformed_link_is_invalid() {
        let err =
            Dna::from_json(r#"{"neural_links": [{"input": "light", "output": "eat"}]}"#).unwrap_err();
        assert!(matches!(err, DnaError::InvalidDna { ref field, .. } if field == "neural_links"));
    }

    #[test]
    fn test_non_object_root_is_invalid() {
        let err = Dna::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DnaError::InvalidDna { ref field, .. } if field == "dna"));
    }

    #[test]
    fn test_not_json_is_json_error() {
        assert!(matches!(Dna::from_json("not json"), Err(DnaError::Json(_))));
    }

    #[test]
    fn test_export_keeps_field_names() {
        let dna = Dna::from_json(EXPORTED).unwrap();
        let json = dna.to_json_pretty().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert!(value["genes"].is_array());
        assert!(value["organs"].is_object());
        assert_eq!(value["neural_links"][0]["input"], "light");
        assert_eq!(value["neural_links"][0]["output"], "move_up");
        // Unset organ fields are omitted rather than written as null
        assert!(value["organs"]["brain"].get("efficiency").is_none());

        assert_eq!(Dna::from_json(&json).unwrap(), dna);
    }

    #[test]
    fn test_clone_does_not_alias() {
        let original = Dna::from_json(EXPORTED).unwrap();
        let mut copy = original.clone();
        copy.neural_links[0].weight = 0.0;
        assert_eq!(original.neural_links[0].weight, 1.0);
    }

    #[test]
    fn test_link_queries() {
        let dna = Dna::from_json(EXPORTED).unwrap();
        assert!(dna.has_output("scream"));
        assert!(!dna.has_output("eat"));
        assert_eq!(dna.links_from("light").count(), 1);
    }
}
