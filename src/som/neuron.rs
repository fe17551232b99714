use crate::utils::Float;

/// Represents a single map cell: a prototype vector in data space together with
/// bookkeeping about samples it has won.
pub struct Neuron {
    /// A location in the grid as (row, col).
    pub location: (Float, Float),
    /// A prototype vector of the dataset's dimensionality.
    pub weights: Vec<Float>,
    /// Amount of samples won within the current evaluation window.
    pub award: usize,
    /// Indices of dataset samples won within the current evaluation window.
    pub captured: Vec<usize>,
}

impl Neuron {
    pub(crate) fn new(location: (Float, Float), weights: Vec<Float>) -> Self {
        Self { location, weights, award: 0, captured: Vec::default() }
    }

    /// Returns a squared Euclidean distance between the prototype and given weights.
    pub fn distance(&self, weights: &[Float]) -> Float {
        debug_assert!(self.weights.len() == weights.len());

        self.weights.iter().zip(weights.iter()).map(|(a, b)| (a - b) * (a - b)).sum()
    }

    /// Moves the prototype towards the target, scaled by given rate per dimension.
    pub(crate) fn adjust(&mut self, target: &[Float], rate: Float) {
        debug_assert!(self.weights.len() == target.len());

        for (idx, value) in target.iter().enumerate() {
            self.weights[idx] += rate * (*value - self.weights[idx]);
        }
    }

    pub(crate) fn record_capture(&mut self, sample_idx: usize) {
        self.award += 1;
        self.captured.push(sample_idx);
    }

    pub(crate) fn reset_stats(&mut self) {
        self.award = 0;
        self.captured.clear();
    }
}
