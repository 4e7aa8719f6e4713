//! Genome Generators
//!
//! Ready-made genomes wired across the full channel set, so a generated
//! agent can in principle show every behavior.

use rand::Rng;

use morph_dna::channels::{EAT, FOOD, LIGHT, MOVE_DOWN, MOVE_LEFT, MOVE_RIGHT, MOVE_UP, PAIN, SCREAM};
use morph_dna::{Dna, Gene, NeuralLink, Organ};

/// Random genome weights and trait ranges
pub mod dna_ranges {
    /// Movement and eating link weights are drawn from `[MIN, MAX)`
    pub const LINK_WEIGHT_MIN: f64 = 0.2;
    pub const LINK_WEIGHT_MAX: f64 = 1.0;
    /// The pain -> scream weight may inhibit as well as excite
    pub const SCREAM_WEIGHT_MIN: f64 = -1.0;
    pub const SCREAM_WEIGHT_MAX: f64 = 1.0;
    pub const GENE_VALUE_MAX: f64 = 2.0;
    pub const BRAIN_NEURONS_MIN: u32 = 50;
    pub const BRAIN_NEURONS_SPAN: u32 = 100;
    pub const HEART_EFFICIENCY_MIN: f64 = 0.5;
}

use dna_ranges::*;

/// Sample a genome with independently drawn weights
pub fn random_dna(rng: &mut impl Rng) -> Dna {
    let mut weight = || rng.gen_range(LINK_WEIGHT_MIN..LINK_WEIGHT_MAX);
    let mut neural_links = vec![
        NeuralLink::new(LIGHT, MOVE_UP, weight()),
        NeuralLink::new(LIGHT, MOVE_DOWN, weight()),
        NeuralLink::new(LIGHT, MOVE_LEFT, weight()),
        NeuralLink::new(LIGHT, MOVE_RIGHT, weight()),
    ];
    neural_links.push(NeuralLink::new(
        PAIN,
        SCREAM,
        rng.gen_range(SCREAM_WEIGHT_MIN..SCREAM_WEIGHT_MAX),
    ));

    let mut weight = || rng.gen_range(LINK_WEIGHT_MIN..LINK_WEIGHT_MAX);
    neural_links.extend([
        NeuralLink::new(FOOD, EAT, weight()),
        NeuralLink::new(PAIN, MOVE_DOWN, weight()),
        NeuralLink::new(PAIN, MOVE_LEFT, weight()),
        NeuralLink::new(PAIN, MOVE_RIGHT, weight()),
        NeuralLink::new(FOOD, MOVE_UP, weight()),
        NeuralLink::new(FOOD, MOVE_DOWN, weight()),
        NeuralLink::new(FOOD, MOVE_LEFT, weight()),
        NeuralLink::new(FOOD, MOVE_RIGHT, weight()),
    ]);

    let genes = vec![
        Gene::new("Speed", rng.gen_range(0.0..GENE_VALUE_MAX)),
        Gene::new("Aggression", rng.gen_range(0.0..GENE_VALUE_MAX)),
    ];

    let mut dna = Dna {
        genes,
        neural_links,
        ..Dna::default()
    };
    dna.organs.insert(
        "brain".into(),
        Organ::with_neurons(BRAIN_NEURONS_MIN + rng.gen_range(0..BRAIN_NEURONS_SPAN)),
    );
    dna.organs.insert(
        "heart".into(),
        Organ::with_efficiency(rng.gen_range(HEART_EFFICIENCY_MIN..1.0)),
    );
    dna
}

/// Hand-authored genome: strongly climbs in light, heads right on food,
/// screams in pain
pub fn fixed_dna() -> Dna {
    let mut dna = Dna {
        genes: vec![Gene::new("Speed", 1.5), Gene::new("Aggression", 1.0)],
        neural_links: vec![
            NeuralLink::new(LIGHT, MOVE_UP, 1.0),
            NeuralLink::new(LIGHT, MOVE_DOWN, 0.5),
            NeuralLink::new(LIGHT, MOVE_LEFT, 0.5),
            NeuralLink::new(LIGHT, MOVE_RIGHT, 0.5),
            NeuralLink::new(FOOD, MOVE_UP, 0.5),
            NeuralLink::new(FOOD, MOVE_DOWN, 0.5),
            NeuralLink::new(FOOD, MOVE_LEFT, 0.5),
            NeuralLink::new(FOOD, MOVE_RIGHT, 1.0),
            NeuralLink::new(PAIN, SCREAM, 1.0),
        ],
        ..Dna::default()
    };
    dna.organs.insert("brain".into(), Organ::with_neurons(100));
    dna.organs.insert("heart".into(), Organ::with_efficiency(1.0));
    dna
}
