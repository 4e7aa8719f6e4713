//! Genome Editor Session
//!
//! The designer's working copy of a genome with undo/redo.
//! Every successful edit snapshots the previous genome first.

use std::str::FromStr;
use thiserror::Error;

use crate::channels;
use crate::dna::{Dna, Gene, NeuralLink, Organ};
use crate::history::DnaHistory;

/// Weight given to the movement links added by [`DnaEditor::add_neural_link`]
pub const DEFAULT_MOVEMENT_WEIGHT: f64 = 0.5;

/// Errors raised by editor operations
#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("no {kind} at index {index}")]
    NotFound { kind: &'static str, index: usize },
    #[error("unknown organ property `{0}`")]
    UnknownProperty(String),
}

/// Editable organ fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganProperty {
    Efficiency,
    NeuronCount,
}

impl FromStr for OrganProperty {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "efficiency" => Ok(OrganProperty::Efficiency),
            "neuron_count" => Ok(OrganProperty::NeuronCount),
            other => Err(EditError::UnknownProperty(other.to_string())),
        }
    }
}

/// A single-field change to an existing neural link
#[derive(Debug, Clone, PartialEq)]
pub enum LinkEdit {
    Input(String),
    Output(String),
    Weight(f64),
}

/// Current genome plus its edit history
#[derive(Debug, Clone, Default)]
pub struct DnaEditor {
    dna: Dna,
    history: DnaHistory,
}

impl DnaEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing an existing genome with a fresh history
    pub fn from_dna(dna: Dna) -> Self {
        Self {
            dna,
            history: DnaHistory::new(),
        }
    }

    pub fn with_history(dna: Dna, history: DnaHistory) -> Self {
        Self { dna, history }
    }

    pub fn dna(&self) -> &Dna {
        &self.dna
    }

    pub fn history(&self) -> &DnaHistory {
        &self.history
    }

    /// Replace the whole genome (e.g. after an import)
    pub fn set_dna(&mut self, dna: Dna) {
        self.checkpoint();
        self.dna = dna;
    }

    pub fn add_gene(&mut self, gene: Gene) {
        self.checkpoint();
        self.dna.genes.push(gene);
    }

    pub fn update_gene(&mut self, index: usize, value: f64) -> Result<(), EditError> {
        if index >= self.dna.genes.len() {
            return Err(EditError::NotFound { kind: "gene", index });
        }
        self.checkpoint();
        self.dna.genes[index].value = value;
        Ok(())
    }

    /// Insert or replace an organ by name
    pub fn add_organ(&mut self, name: impl Into<String>, organ: Organ) {
        self.checkpoint();
        self.dna.organs.insert(name.into(), organ);
    }

    /// Set one organ property, creating the organ if it does not exist yet
    pub fn update_organ(&mut self, name: &str, property: OrganProperty, value: f64) {
        self.checkpoint();
        let organ = self.dna.organs.entry(name.to_string()).or_default();
        match property {
            OrganProperty::Efficiency => organ.efficiency = Some(value),
            OrganProperty::NeuronCount => organ.neuron_count = Some(value.max(0.0).round() as u32),
        }
    }

    /// Append a link, then make sure every movement channel has at least one driver.
    ///
    /// Missing movement outputs get a `light -> move_*` link of weight 0.5.
    pub fn add_neural_link(&mut self, link: NeuralLink) {
        self.checkpoint();
        self.dna.neural_links.push(link);
        for output in channels::MOVEMENT {
            if !self.dna.has_output(output) {
                self.dna.neural_links.push(NeuralLink::new(
                    channels::LIGHT,
                    output,
                    DEFAULT_MOVEMENT_WEIGHT,
                ));
            }
        }
    }

    pub fn update_neural_link(&mut self, index: usize, edit: LinkEdit) -> Result<(), EditError> {
        if index >= self.dna.neural_links.len() {
            return Err(EditError::NotFound {
                kind: "neural link",
                index,
            });
        }
        self.checkpoint();
        let link = &mut self.dna.neural_links[index];
        match edit {
            LinkEdit::Input(input) => link.input = input,
            LinkEdit::Output(output) => link.output = output,
            LinkEdit::Weight(weight) => link.weight = weight,
        }
        Ok(())
    }

    /// Returns false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.dna) {
            Some(previous) => {
                self.dna = previous;
                true
            }
            None => false,
        }
    }

    /// Returns false when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.dna) {
            Some(next) => {
                self.dna = next;
                true
            }
            None => false,
        }
    }

    fn checkpoint(&mut self) {
        self.history.record(self.dna.clone());
    }
}
