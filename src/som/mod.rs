//! Provides an implementation of Self-Organizing Map with a fixed grid topology.

use crate::utils::Float;

mod init;
pub(crate) use self::init::*;

mod network;
pub use self::network::*;

mod neuron;
pub use self::neuron::*;

mod state;
pub use self::state::*;

mod topology;
pub use self::topology::*;

/// Represents an input for the network.
pub trait Input: Send + Sync {
    /// Returns weights (coordinates in data space).
    fn weights(&self) -> &[Float];
}

/// Specifies how neurons are coupled within the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionPolicy {
    /// Each neuron is coupled with up to four orthogonal neighbors.
    GridFour,
    /// Each neuron is coupled with up to eight neighbors, diagonals included.
    GridEight,
    /// Hexagonal adjacency where diagonal couplings depend on row parity.
    Honeycomb,
    /// No discrete couplings: during adaptation every neuron is a neighborhood
    /// candidate filtered by the current radius.
    FuncNeighbor,
}

/// Specifies how initial neuron weights are generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitPolicy {
    /// Weights are placed on a regular lattice which covers the dataset's bounding
    /// box in the first two dimensions and is centered in the remaining ones.
    UniformGrid,
    /// Weights are drawn uniformly from the dataset's bounding box.
    RandomSurface,
    /// Weights are clustered tightly around the dataset's centroid.
    RandomCentroid,
}
