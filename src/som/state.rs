#[cfg(test)]
#[path = "../../tests/unit/som/state_test.rs"]
mod state_test;

use super::*;
use crate::utils::parallel_collect;
use std::fmt::{Display, Formatter, Result, Write};

/// Represents state of the network, a read-only snapshot consumed by external
/// collaborators (e.g. a renderer).
pub struct NetworkState {
    /// Shape of the network as (rows, cols, num of weights).
    pub shape: (usize, usize, usize),
    /// States of individual neurons in row-major grid order.
    pub neurons: Vec<NeuronState>,
}

/// Contains information about a single neuron state.
pub struct NeuronState {
    /// Neuron location in the grid as (row, col).
    pub location: (Float, Float),
    /// Prototype weights.
    pub weights: Vec<Float>,
    /// Average squared distance to prototypes of directly coupled neurons
    /// (a u-matrix value). Zero when the neuron has no discrete couplings.
    pub unified_distance: Float,
    /// Amount of samples won within the current window.
    pub award: usize,
    /// Indices of captured dataset samples within the current window.
    pub captured: Vec<usize>,
}

/// Gets network state.
pub fn get_network_state<I: Input>(network: &Network<I>) -> NetworkState {
    let indices = (0..network.size()).collect::<Vec<_>>();

    let neurons = parallel_collect(indices.as_slice(), |&index| {
        let neuron = &network.neurons()[index];

        let (sum, count) = network.neighbors(index).iter().fold((0., 0), |(sum, count), &neighbor| {
            (sum + neuron.distance(network.weights(neighbor)), count + 1)
        });

        NeuronState {
            location: neuron.location,
            weights: neuron.weights.clone(),
            unified_distance: if count > 0 { sum / count as Float } else { 0. },
            award: neuron.award,
            captured: neuron.captured.clone(),
        }
    });

    NetworkState { shape: (network.rows(), network.cols(), network.dimension()), neurons }
}

impl Display for NetworkState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // NOTE serialize state in simple representation which can be embedded
        // to json as string and then easily parsed.
        let neurons = self.neurons.iter().fold(String::new(), |mut res, n| {
            let (row, col) = n.location;
            let weights = n.weights.iter().map(|w| format!("{w:.7}")).collect::<Vec<_>>().join(",");
            let captured = n.captured.iter().map(|idx| idx.to_string()).collect::<Vec<_>>().join(",");

            write!(&mut res, "({row},{col},{:.7},{},[{weights}],[{captured}]),", n.unified_distance, n.award).unwrap();

            res
        });

        write!(f, "({},{},{},[{neurons}])", self.shape.0, self.shape.1, self.shape.2)
    }
}
