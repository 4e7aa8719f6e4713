//! Neural Evaluator
//!
//! One linear pass over a genome's links: no hidden state, no activation
//! function, no recurrence.

use morph_dna::Dna;

use crate::components::signals::Signals;

/// Map sensory inputs through the genome's links into action outputs.
///
/// Each link adds `inputs[input] * weight` to `outputs[output]`, with absent
/// inputs reading as zero. Duplicate links accumulate.
pub fn evaluate(dna: &Dna, inputs: &Signals) -> Signals {
    let mut outputs = Signals::new();
    for link in &dna.neural_links {
        outputs.accumulate(&link.output, inputs.get(&link.input) * link.weight);
    }
    outputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_dna::NeuralLink;

    fn dna(links: Vec<NeuralLink>) -> Dna {
        Dna {
            neural_links: links,
            ..Dna::default()
        }
    }

    #[test]
    fn test_weighted_sum() {
        let genome = dna(vec![
            NeuralLink::new("light", "move_up", 0.75),
            NeuralLink::new("food", "eat", 0.9),
            NeuralLink::new("food", "move_up", 0.5),
        ]);
        let inputs: Signals = [("light", 1.0), ("food", 1.0), ("pain", 0.0)]
            .into_iter()
            .collect();

        let outputs = evaluate(&genome, &inputs);
        assert_eq!(outputs.get("move_up"), 1.25);
        assert_eq!(outputs.get("eat"), 0.9);
        assert_eq!(outputs.get("scream"), 0.0);
    }

    #[test]
    fn test_duplicate_links_accumulate() {
        let genome = dna(vec![
            NeuralLink::new("light", "rest", 0.5),
            NeuralLink::new("light", "rest", 0.5),
        ]);
        let inputs: Signals = [("light", 1.0)].into_iter().collect();
        assert_eq!(evaluate(&genome, &inputs).get("rest"), 1.0);
    }

    #[test]
    fn test_unknown_input_reads_zero() {
        let genome = dna(vec![NeuralLink::new("sound", "scream", 1.0)]);
        let outputs = evaluate(&genome, &Signals::new());
        // The output exists, with a zero activation
        assert!(outputs.contains("scream"));
        assert_eq!(outputs.get("scream"), 0.0);
    }

    #[test]
    fn test_negative_weights_inhibit() {
        let genome = dna(vec![
            NeuralLink::new("pain", "move_down", 1.0),
            NeuralLink::new("pain", "move_down", -0.75),
        ]);
        let inputs: Signals = [("pain", 1.0)].into_iter().collect();
        assert_eq!(evaluate(&genome, &inputs).get("move_down"), 0.25);
    }

    #[test]
    fn test_empty_genome_produces_nothing() {
        let inputs: Signals = [("light", 1.0)].into_iter().collect();
        assert!(evaluate(&Dna::default(), &inputs).is_empty());
    }
}
