//! Shared genome types and serialization for MorphLink.
//!
//! This crate contains pure data structures with no simulation logic.
//! The engine consumes [`Dna`] documents; the designer edits them through
//! [`DnaEditor`].

pub mod channels;
pub mod dna;
pub mod editor;
pub mod history;

pub use dna::{Dna, DnaError, Gene, NeuralLink, Organ};
pub use editor::{DnaEditor, EditError, LinkEdit, OrganProperty};
pub use history::{DnaHistory, DEFAULT_HISTORY_CAPACITY};
