//! Personality Reports
//!
//! A text-generation service can describe a genome as a field report.
//! The engine only defines the capability and builds the prompt; no
//! network client lives here.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use morph_dna::{Dna, DnaError};

/// Colour words used for specimen designations
pub const SPECIMEN_COLOURS: [&str; 10] = [
    "Veridian", "Cobalt", "Crimson", "Amber", "Azure", "Obsidian", "Ivory", "Jade", "Sable", "Coral",
];

const REPORT_PROMPT: &str = "\
You are a synthetic biologist studying artificial life.

Write an imaginative field report on the digital organism described by the
DNA below: its likely behavior, instincts and preferred environment, based on
its genes, organs and neural wiring.

Specimen designation: {specimen}
Date: {date}

DNA:
{dna}
";

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service could not be reached or returned a failure status
    #[error("transport error: {0}")]
    Transport(String),
    /// The service answered with something that is not a report
    #[error("could not parse service response: {0}")]
    Parse(String),
    #[error(transparent)]
    Dna(#[from] DnaError),
}

/// Anything that can turn a genome into free text
pub trait Describer {
    fn describe(&self, dna: &Dna) -> Result<String, ServiceError>;
}

/// Returns the same report for every genome
#[derive(Debug, Clone)]
pub struct StaticDescriber {
    pub report: String,
}

impl StaticDescriber {
    pub fn new(report: impl Into<String>) -> Self {
        Self {
            report: report.into(),
        }
    }
}

impl Describer for StaticDescriber {
    fn describe(&self, _dna: &Dna) -> Result<String, ServiceError> {
        Ok(self.report.clone())
    }
}

/// Random designation such as `Synth-Cobalt-42`
pub fn specimen_name(rng: &mut impl Rng) -> String {
    let colour = SPECIMEN_COLOURS.choose(rng).copied().unwrap_or("Grey");
    format!("Synth-{}-{}", colour, rng.gen_range(1..=99))
}

/// Render the report prompt with the full DNA document embedded
pub fn build_prompt(dna: &Dna, specimen: &str, date: &str) -> Result<String, ServiceError> {
    let json = dna.to_json_pretty()?;
    Ok(REPORT_PROMPT
        .replace("{specimen}", specimen)
        .replace("{date}", date)
        .replace("{dna}", &json))
}
