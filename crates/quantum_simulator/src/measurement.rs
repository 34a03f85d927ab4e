// =============================================================================
// DenseQ Reference Simulator - Measurement Statistics
// =============================================================================
// Table of Contents:
//   1. Bitstring helpers
//   2. MeasurementStatistics - Aggregated sampling outcomes
// =============================================================================
// Purpose: Aggregates full-register measurement outcomes into counts,
//          relative frequencies, and entropy. Sampling itself is driven by
//          caller-supplied random values (`measure_all_deterministic` on the
//          state); random-number generation stays outside the core.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// 1. Bitstring helpers
// =============================================================================

pub fn bitstring_as_string(bitstring: &[u8]) -> String {
    bitstring
        .iter()
        .map(|bit| if *bit == 0 { '0' } else { '1' })
        .collect()
}

pub fn bitstring_as_basis_index(bitstring: &[u8]) -> usize {
    bitstring
        .iter()
        .fold(0usize, |acc, &bit| (acc << 1) | (bit as usize))
}

// =============================================================================
// 2. MeasurementStatistics - Aggregated sampling outcomes
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementStatistics {
    pub total_shots: usize,
    pub bitstring_counts: HashMap<String, usize>,
    pub probabilities: HashMap<String, f64>,
    pub entropy: f64,
}

impl MeasurementStatistics {
    pub fn from_bitstrings(outcomes: &[Vec<u8>]) -> Self {
        let total_shots = outcomes.len();
        let mut bitstring_counts: HashMap<String, usize> = HashMap::new();
        for outcome in outcomes {
            *bitstring_counts
                .entry(bitstring_as_string(outcome))
                .or_insert(0) += 1;
        }

        let probabilities: HashMap<String, f64> = bitstring_counts
            .iter()
            .map(|(bitstring, &count)| (bitstring.clone(), count as f64 / total_shots as f64))
            .collect();

        let entropy = Self::compute_entropy(&probabilities);

        Self {
            total_shots,
            bitstring_counts,
            probabilities,
            entropy,
        }
    }

    fn compute_entropy(probabilities: &HashMap<String, f64>) -> f64 {
        probabilities
            .values()
            .filter(|&&p| p > 0.0)
            .map(|&p| -p * p.log2())
            .sum()
    }

    pub fn probability_of(&self, bitstring: &str) -> f64 {
        *self.probabilities.get(bitstring).unwrap_or(&0.0)
    }

    pub fn count_of(&self, bitstring: &str) -> usize {
        *self.bitstring_counts.get(bitstring).unwrap_or(&0)
    }

    pub fn most_probable_bitstring(&self) -> Option<(&String, f64)> {
        self.probabilities
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(bitstring, &probability)| (bitstring, probability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitstring_conversions() {
        assert_eq!(bitstring_as_string(&[0, 1, 1]), "011");
        assert_eq!(bitstring_as_basis_index(&[0, 1, 1]), 3);
        assert_eq!(bitstring_as_basis_index(&[1, 0]), 2);
    }

    #[test]
    fn test_statistics_from_bitstrings() {
        let outcomes = vec![vec![0, 0], vec![0, 0], vec![1, 1], vec![1, 1]];
        let statistics = MeasurementStatistics::from_bitstrings(&outcomes);

        assert_eq!(statistics.total_shots, 4);
        assert_eq!(statistics.count_of("00"), 2);
        assert!((statistics.probability_of("00") - 0.5).abs() < 1e-12);
        assert!((statistics.probability_of("11") - 0.5).abs() < 1e-12);
        assert!((statistics.entropy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unseen_bitstring_has_zero_probability() {
        let statistics = MeasurementStatistics::from_bitstrings(&[vec![0, 0]]);
        assert_eq!(statistics.count_of("10"), 0);
        assert!(statistics.probability_of("10").abs() < 1e-12);
    }
}
