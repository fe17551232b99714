#[cfg(test)]
#[path = "../../tests/unit/som/network_test.rs"]
mod network_test;

use super::*;
use crate::utils::{map_reduce, Environment, Float, GenericResult};
use std::sync::Arc;

/// A Self-Organizing Map configuration. Defaults are applied by [`SomConfig::new`],
/// every field can be overridden before the network is constructed.
pub struct SomConfig {
    /// Amount of grid rows.
    pub rows: usize,
    /// Amount of grid columns.
    pub cols: usize,
    /// Amount of training epochs, a hard upper bound on work.
    pub epochs: usize,
    /// Specifies how neurons are coupled within the grid.
    pub connection_policy: ConnectionPolicy,
    /// Specifies how initial neuron weights are generated.
    pub init_policy: InitPolicy,
    /// Initial learning rate, decayed every epoch.
    pub learning_rate: Float,
    /// Autostop sensitivity: training stops early once the largest per-dimension
    /// weight change between consecutive epochs falls below this value.
    pub adaptation_threshold: Float,
}

impl SomConfig {
    /// Creates a new instance of `SomConfig` for given grid shape and epoch budget.
    pub fn new(rows: usize, cols: usize, epochs: usize) -> Self {
        Self {
            rows,
            cols,
            epochs,
            connection_policy: ConnectionPolicy::GridEight,
            init_policy: InitPolicy::UniformGrid,
            learning_rate: 0.1,
            adaptation_threshold: 0.001,
        }
    }
}

/// A Self-Organizing Map: a fixed grid of neurons trained by competitive learning.
/// The topology (locations, distance table, couplings) never changes after
/// construction, only neuron weights and capture statistics are mutated by training.
pub struct Network<I: Input> {
    data: Vec<I>,
    dimension: usize,
    topology: GridTopology,
    neurons: Vec<Neuron>,
    connection_policy: ConnectionPolicy,
    epochs: usize,
    init_radius: Float,
    init_learn_rate: Float,
    adaptation_threshold: Float,
    environment: Arc<Environment>,
}

impl<I: Input> Network<I> {
    /// Creates a new instance of `Network` with initialized weights. The dataset is
    /// owned by the network and stays immutable during training.
    pub fn new(data: Vec<I>, config: SomConfig, environment: Arc<Environment>) -> GenericResult<Self> {
        if data.is_empty() {
            return Err("cannot create a network from an empty dataset".into());
        }

        if config.rows == 0 || config.cols == 0 {
            return Err("grid dimensions must be positive".into());
        }

        if config.epochs == 0 {
            return Err("amount of epochs must be positive".into());
        }

        if !(config.learning_rate > 0.) {
            return Err("learning rate must be positive".into());
        }

        if !(config.adaptation_threshold > 0.) {
            return Err("adaptation threshold must be positive".into());
        }

        let dimension = data[0].weights().len();
        if dimension < 2 {
            return Err("dataset dimensionality must be at least 2".into());
        }

        if data.iter().any(|item| item.weights().len() != dimension) {
            return Err("all samples must have the same dimensionality".into());
        }

        let topology = GridTopology::new(config.rows, config.cols, config.connection_policy);

        let bounds = BoundingBox::new(data.as_slice());
        let weights = create_initial_weights(&topology, config.init_policy, &bounds, environment.random.as_ref());
        let neurons = weights
            .into_iter()
            .enumerate()
            .map(|(index, weights)| Neuron::new(topology.location(index), weights))
            .collect();

        // a larger grid starts with a larger neighborhood to avoid premature fragmentation
        let init_radius = if (config.rows + config.cols) as Float / 4. > 1. {
            2.
        } else if config.rows > 1 && config.cols > 1 {
            1.5
        } else {
            1.
        };

        Ok(Self {
            data,
            dimension,
            topology,
            neurons,
            connection_policy: config.connection_policy,
            epochs: config.epochs,
            init_radius,
            init_learn_rate: config.learning_rate,
            adaptation_threshold: config.adaptation_threshold,
            environment,
        })
    }

    /// Trains the network on the owned dataset and returns amount of epochs performed.
    ///
    /// Samples are processed strictly in dataset order: each adaptation step mutates
    /// weights read by the next competition step, so ordering affects the result.
    /// When `autostop` is enabled, training terminates early once the largest
    /// per-dimension weight change between consecutive epochs falls below the
    /// adaptation threshold.
    pub fn train(&mut self, autostop: bool) -> usize {
        let mut previous_weights: Option<Vec<Vec<Float>>> = None;

        for epoch in 1..=self.epochs {
            let (local_radius, learn_rate) = self.decay_schedule(epoch);

            if autostop {
                self.neurons.iter_mut().for_each(|neuron| neuron.reset_stats());
            }

            for sample_idx in 0..self.data.len() {
                let winner = self.competition(self.data[sample_idx].weights());
                self.adaptation(winner, sample_idx, local_radius, learn_rate);

                if autostop || epoch == self.epochs {
                    self.neurons[winner].record_capture(sample_idx);
                }
            }

            if autostop {
                if let Some(previous_weights) = previous_weights.as_ref() {
                    let maximal_adaptation = self.maximal_adaptation(previous_weights.as_slice());
                    if maximal_adaptation < self.adaptation_threshold {
                        (self.environment.logger)(
                            format!(
                                "autostop: converged at epoch {epoch} of {}, maximal adaptation {maximal_adaptation}",
                                self.epochs
                            )
                            .as_str(),
                        );
                        return epoch;
                    }
                }

                previous_weights = Some(self.neurons.iter().map(|neuron| neuron.weights.clone()).collect());
            }
        }

        self.epochs
    }

    /// Returns the decayed neighborhood radius (squared units) and learning rate for
    /// given epoch. Both are non-increasing in the epoch number.
    fn decay_schedule(&self, epoch: usize) -> (Float, Float) {
        let ratio = epoch as Float / self.epochs as Float;

        let local_radius = (self.init_radius * (-ratio).exp()).powi(2);
        let learn_rate = self.init_learn_rate * (-ratio).exp();

        (local_radius, learn_rate)
    }

    /// Finds the neuron whose prototype is closest (squared Euclidean) to the sample.
    /// The first strict improvement wins, ties are resolved to the lowest index.
    fn competition(&self, sample: &[Float]) -> usize {
        let mut winner = 0;
        let mut minimum = self.neurons[0].distance(sample);

        for (index, neuron) in self.neurons.iter().enumerate().skip(1) {
            let candidate = neuron.distance(sample);
            if candidate < minimum {
                winner = index;
                minimum = candidate;
            }
        }

        winner
    }

    /// Moves the winner and its neighborhood towards the sample. Neighborhood candidates
    /// with a grid distance below the current radius receive an exponentially decaying
    /// influence; the rest are left untouched.
    fn adaptation(&mut self, winner: usize, sample_idx: usize, local_radius: Float, learn_rate: Float) {
        let sample = self.data[sample_idx].weights();

        match self.connection_policy {
            ConnectionPolicy::FuncNeighbor => {
                // scan all neurons, the winner included (its grid distance to itself is 0)
                for index in 0..self.neurons.len() {
                    let distance = self.topology.distance(winner, index);
                    if distance < local_radius {
                        let influence = (-(distance / (2. * local_radius))).exp();
                        self.neurons[index].adjust(sample, learn_rate * influence);
                    }
                }
            }
            _ => {
                self.neurons[winner].adjust(sample, learn_rate);

                for &neighbor in self.topology.neighbors(winner) {
                    let distance = self.topology.distance(winner, neighbor);
                    if distance < local_radius {
                        let influence = (-(distance / (2. * local_radius))).exp();
                        self.neurons[neighbor].adjust(sample, learn_rate * influence);
                    }
                }
            }
        }
    }

    /// Returns the largest absolute per-dimension weight change since the previous epoch.
    fn maximal_adaptation(&self, previous_weights: &[Vec<Float>]) -> Float {
        let pairs = self.neurons.iter().zip(previous_weights.iter()).collect::<Vec<_>>();

        map_reduce(
            pairs.as_slice(),
            |(neuron, previous)| {
                neuron
                    .weights
                    .iter()
                    .zip(previous.iter())
                    .fold(0., |acc: Float, (current, previous)| acc.max((current - previous).abs()))
            },
            || 0.,
            Float::max,
        )
    }

    /// Returns a total amount of neurons.
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Returns amount of grid rows.
    pub fn rows(&self) -> usize {
        self.topology.rows()
    }

    /// Returns amount of grid columns.
    pub fn cols(&self) -> usize {
        self.topology.cols()
    }

    /// Returns dimensionality of the dataset and every prototype vector.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the owned dataset.
    pub fn data(&self) -> &[I] {
        self.data.as_slice()
    }

    /// Returns neurons in row-major grid order.
    pub fn neurons(&self) -> &[Neuron] {
        self.neurons.as_slice()
    }

    /// Returns a connection policy used to build the topology.
    pub fn connection_policy(&self) -> ConnectionPolicy {
        self.connection_policy
    }

    /// Returns the grid topology.
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Returns indices of neurons directly coupled with given one.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.topology.neighbors(index)
    }

    /// Returns current prototype weights of the neuron.
    pub fn weights(&self, index: usize) -> &[Float] {
        self.neurons[index].weights.as_slice()
    }

    /// Returns amount of samples won by the neuron within the current window.
    pub fn awards(&self, index: usize) -> usize {
        self.neurons[index].award
    }

    /// Returns indices of dataset samples captured by the neuron within the current window.
    pub fn captured(&self, index: usize) -> &[usize] {
        self.neurons[index].captured.as_slice()
    }

    /// Returns amount of neurons which have won at least one sample.
    pub fn winner_count(&self) -> usize {
        self.neurons.iter().filter(|neuron| neuron.award > 0).count()
    }

    /// Returns the current autostop sensitivity.
    pub fn adaptation_threshold(&self) -> Float {
        self.adaptation_threshold
    }

    /// Changes the autostop sensitivity. Non-positive values are rejected.
    pub fn set_adaptation_threshold(&mut self, value: Float) -> GenericResult<()> {
        if !(value > 0.) {
            return Err("adaptation threshold must be positive".into());
        }

        self.adaptation_threshold = value;

        Ok(())
    }
}
